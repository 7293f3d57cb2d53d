pub mod common;
pub mod layer;
pub mod model;
pub mod project_spec;
pub mod project_structure;
pub mod source;

pub use common::*;
pub use layer::*;
pub use model::*;
pub use project_spec::*;
pub use project_structure::*;
pub use source::*;
