//! Renderers: structured units to final text.

mod go;

pub use go::GoRenderer;
