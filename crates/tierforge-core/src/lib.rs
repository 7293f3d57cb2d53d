//! tierforge core - hexagonal architecture implementation
//!
//! Domain and application layers of the tierforge layered-project
//! generator. Adapters for the filesystem, Go rendering and the Go toolchain
//! live in `tierforge-adapters`.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          tierforge-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          GenerateService                │
//! │   validate → plan → render → write      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   LayerController  +  BodyStrategy      │
//! │   (chain → units, one body per kind)    │
//! └──────────────────┬──────────────────────┘
//!                    │ ports
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  Filesystem · SourceRenderer · Toolchain│
//! │     implemented by tierforge-adapters   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tierforge_core::prelude::*;
//!
//! let service = GenerateService::new(filesystem, renderer, toolchain);
//! let report = service.generate(spec, GenerateOptions::default())?;
//! println!("{} files in {}", report.files_written, report.root.display());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateOptions, GenerateService, GenerationReport,
        ports::{Filesystem, SourceRenderer, Toolchain},
    };
    pub use crate::domain::{
        Field, FieldType, FileContent, LayerChain, LayerDecl, LayerKind, MethodType, Model,
        ProjectSpec, ProjectStructure, SourceFile,
    };
    pub use crate::error::{ErrorCategory, ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
