//! Application layer for tierforge.
//!
//! This layer contains:
//! - **Strategies**: Method bodies per layer kind
//! - **Generator**: The layer controller that plans every generated unit
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types

pub mod error;
pub mod generator;
pub mod ports;
pub mod services;
pub mod strategy;

pub use services::{GenerateOptions, GenerateService, GenerationReport};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, SourceRenderer, Toolchain};

pub use error::ApplicationError;
