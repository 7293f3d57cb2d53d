//! Filesystem adapters: the sink every generated unit is written through.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
