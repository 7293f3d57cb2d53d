//! Infrastructure adapters for tierforge.
//!
//! This crate implements the ports defined in
//! `tierforge_core::application::ports` and owns every piece of I/O: the
//! filesystem sink, Go text emission, description loading and the Go
//! toolchain.

pub mod filesystem;
pub mod renderer;
pub mod spec_loader;
pub mod toolchain;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::GoRenderer;
pub use spec_loader::{SpecFormat, SpecLoader, SpecParseError, example_spec, parse_spec};
pub use toolchain::{GoToolchain, NoopToolchain};
