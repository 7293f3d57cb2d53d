// ============================================================================
// domain/error.rs - SPEC VALIDATION AND CHAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry through reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("invalid layer name '{name}': {reason}")]
    InvalidLayerName { name: String, reason: String },

    #[error("layer '{name}' is declared more than once")]
    DuplicateLayer { name: String },

    #[error("invalid model name '{name}': {reason}")]
    InvalidModelName { name: String, reason: String },

    #[error("model '{name}' is declared more than once")]
    DuplicateModel { name: String },

    #[error("invalid field name '{field}' on model '{model}'")]
    InvalidFieldName { model: String, field: String },

    #[error("field '{field}' is declared more than once on model '{model}'")]
    DuplicateField { model: String, field: String },

    #[error("unknown field type '{0}'")]
    UnknownFieldType(String),

    #[error("invalid method tag '{tag}' on model '{model}'")]
    InvalidMethodTag { model: String, tag: String },

    #[error("method '{method}' is declared more than once on model '{model}'")]
    DuplicateMethod { model: String, method: String },

    #[error("Duplicate path in generated tree: {path}")]
    DuplicatePath { path: String },

    #[error("output path {path} leaves the sandbox directory")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Compatibility Errors
    // ========================================================================
    #[error("layer '{layer}' has unknown tag '{tag}'")]
    UnknownLayerTag { layer: String, tag: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "The project name doubles as the Go module path".into(),
                "Use lower-case letters, digits, '-' or '_' (e.g. 'shop-api')".into(),
            ],
            Self::InvalidLayerName { .. } | Self::DuplicateLayer { .. } => vec![
                "Layer names become Go package names and directories".into(),
                "Use unique lower-case identifiers such as 'controller' or 'repository'".into(),
                "Names of generated packages and entry-point variables are reserved".into(),
            ],
            Self::InvalidModelName { name, .. } => vec![
                format!("Model '{name}' must be a PascalCase identifier"),
                "Avoid names whose lower-camel form is a Go keyword (Type, Func, Map...)".into(),
            ],
            Self::InvalidFieldName { .. } | Self::DuplicateField { .. } => vec![
                "Field names must be unique identifiers within a model".into(),
            ],
            Self::UnknownFieldType(_) => vec![
                "Supported field types: id, int, float, string, bool, object".into(),
            ],
            Self::InvalidMethodTag { .. } | Self::DuplicateMethod { .. } => vec![
                "Methods are create, read, update, delete or a custom identifier".into(),
                "Each method may appear once per model (case-insensitive)".into(),
            ],
            Self::AbsolutePathNotAllowed { .. } => vec![
                "Safe output paths are relative and may not contain '..'".into(),
                "Set 'unsafe: true' (or pass --unsafe) to write elsewhere".into(),
            ],
            Self::UnknownLayerTag { tag, .. } => vec![
                format!("'{tag}' is not a known layer tag"),
                "Known tags: http, postgres, telebot (empty for a generic layer)".into(),
                "Try: tierforge layers".into(),
                "Drop --strict to fall back to a generic layer".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two generated units both map to {path}"),
                "A layer named like a model's snake_case form clashes with its interface file"
                    .into(),
                "Rename the layer or the model".into(),
            ],
            Self::DuplicateModel { .. } => vec!["Model names must be unique".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownLayerTag { .. } => ErrorCategory::Compatibility,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
}
