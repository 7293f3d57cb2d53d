//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer, the orchestrator and the ports to
//! accomplish "generate a project" end to end.

pub mod generate_service;

pub use generate_service::{GenerateOptions, GenerateService, GenerationReport};
