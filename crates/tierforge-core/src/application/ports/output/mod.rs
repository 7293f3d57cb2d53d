//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tierforge-adapters` crate provides implementations.

use crate::domain::FileContent;
use crate::error::ForgeResult;
use std::path::Path;

/// Port for filesystem operations. This is the sink every generated unit
/// is written through.
///
/// Implemented by:
/// - `tierforge_adapters::filesystem::LocalFilesystem` (production)
/// - `tierforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for turning planned file content into text.
///
/// Implemented by:
/// - `tierforge_adapters::renderer::GoRenderer`
pub trait SourceRenderer: Send + Sync {
    fn render(&self, content: &FileContent) -> ForgeResult<String>;
}

/// Port for post-generation tooling run inside the output root.
///
/// Implemented by:
/// - `tierforge_adapters::toolchain::GoToolchain` (`go mod tidy`, `go fmt`)
/// - `tierforge_adapters::toolchain::NoopToolchain`
#[cfg_attr(test, mockall::automock)]
pub trait Toolchain: Send + Sync {
    /// Run every step and return the command lines that were executed.
    fn run(&self, root: &Path) -> ForgeResult<Vec<String>>;
}
