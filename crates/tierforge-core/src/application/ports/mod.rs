//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `tierforge-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and file writes
//!   - `SourceRenderer`: Structured units to text
//!   - `Toolchain`: Post-generation commands

pub mod output;

pub use output::{Filesystem, SourceRenderer, Toolchain};

#[cfg(test)]
pub use output::{MockFilesystem, MockToolchain};
