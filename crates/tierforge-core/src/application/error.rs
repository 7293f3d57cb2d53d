//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! input description. Input problems are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while generating and writing a project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The input description could not be read or parsed.
    #[error("unable to load spec from {path}: {reason}")]
    SpecLoadFailed { path: PathBuf, reason: String },

    /// The input description file does not exist.
    #[error("spec file not found: {path}")]
    SpecNotFound { path: PathBuf },

    /// A generated unit could not be rendered to text.
    #[error("unable to render {artifact}: {reason}")]
    RenderingFailed { artifact: String, reason: String },

    /// A generated unit could not be written.
    #[error("unable to generate {artifact} at {path}: {reason}")]
    ArtifactFailed {
        artifact: String,
        path: PathBuf,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("in-memory filesystem lock poisoned")]
    StoreLockError,

    /// A post-generation tool exited unsuccessfully.
    #[error("`{command}` failed: {reason}")]
    ToolchainFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SpecLoadFailed { path, .. } => vec![
                format!("Check the syntax of {}", path.display()),
                "Supported formats: .yaml, .yml, .json, .toml".into(),
                "Try: tierforge init to write an example spec".into(),
            ],
            Self::SpecNotFound { path } => vec![
                format!("No file at {}", path.display()),
                "Try: tierforge init to write an example spec".into(),
            ],
            Self::ArtifactFailed { path, .. } | Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::ToolchainFailed { .. } => vec![
                "Make sure the Go toolchain is installed and on PATH".into(),
                "Or skip post-processing with --skip-tooling".into(),
            ],
            Self::StoreLockError => vec!["Retry the operation".into()],
            Self::RenderingFailed { .. } => vec!["This is likely a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SpecLoadFailed { .. } => ErrorCategory::Validation,
            Self::SpecNotFound { .. } => ErrorCategory::NotFound,
            Self::ToolchainFailed { .. } => ErrorCategory::Configuration,
            Self::RenderingFailed { .. }
            | Self::ArtifactFailed { .. }
            | Self::FilesystemError { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
