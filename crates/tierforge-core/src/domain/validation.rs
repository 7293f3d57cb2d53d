use std::collections::HashSet;
use std::path::{Component, Path};

use crate::domain::{
    entities::{
        layer::LayerDecl,
        model::Model,
        project_spec::ProjectSpec,
        project_structure::ProjectStructure,
    },
    error::DomainError,
    naming::{is_go_keyword, is_identifier, lower_first},
};

/// Package names the generator itself emits or imports, and identifiers
/// the entry point and layer structs declare next to layer packages.
pub static RESERVED_PACKAGES: &[&str] = &[
    "config",
    "models",
    "router",
    "telerouter",
    "main",
    "gin",
    "gorm",
    "postgres",
    "telebot",
    "fmt",
    "json",
    "os",
    "strings",
    "time",
    "db",
    "bot",
    "cfg",
    "err",
    "dsn",
    "r",
    "tr",
];

/// Package names imported by layer files. A model's private struct lives in
/// every layer package and must not shadow any of them.
pub static IMPORTED_PACKAGES: &[&str] = &[
    "config", "models", "gin", "gorm", "telebot", "json", "strings",
];

/// Model names that would collide with fields of the generated routers.
pub static RESERVED_MODELS: &[&str] = &["Config", "Bot"];

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a normalized spec.
    ///
    /// With `strict`, layer tags that do not name a known kind are rejected
    /// instead of falling back to the generic strategy.
    pub fn validate_spec(spec: &ProjectSpec, strict: bool) -> Result<(), DomainError> {
        Self::validate_project_name(&spec.project_name)?;

        if !spec.unsafe_output {
            let path = Path::new(&spec.path);
            let escapes = path
                .components()
                .any(|c| matches!(c, Component::ParentDir));
            if path.is_absolute() || escapes {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: spec.path.clone(),
                });
            }
        }

        let mut layers = HashSet::new();
        for layer in &spec.layers {
            Self::validate_layer(layer, strict)?;
            if !layers.insert(layer.name.as_str()) {
                return Err(DomainError::DuplicateLayer {
                    name: layer.name.clone(),
                });
            }
        }

        let mut models = HashSet::new();
        for model in &spec.models {
            Self::validate_model(model)?;
            if !models.insert(model.name.as_str()) {
                return Err(DomainError::DuplicateModel {
                    name: model.name.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let first = name.chars().next().ok_or_else(|| invalid("name is empty"))?;
        if !first.is_ascii_lowercase() {
            return Err(invalid("must start with a lower-case letter"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(invalid("only a-z, 0-9, '-' and '_' are allowed"));
        }
        Ok(())
    }

    pub fn validate_layer(layer: &LayerDecl, strict: bool) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidLayerName {
            name: layer.name.clone(),
            reason: reason.to_string(),
        };

        if !is_identifier(&layer.name) {
            return Err(invalid("not a valid identifier"));
        }
        if layer.name.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(invalid("package names are lower-case"));
        }
        if is_go_keyword(&layer.name) {
            return Err(invalid("is a Go keyword"));
        }
        if RESERVED_PACKAGES.contains(&layer.name.as_str()) {
            return Err(invalid("name is reserved by the generator"));
        }
        if strict && !layer.is_recognized() {
            return Err(DomainError::UnknownLayerTag {
                layer: layer.name.clone(),
                tag: layer.tag.clone(),
            });
        }
        Ok(())
    }

    pub fn validate_model(model: &Model) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidModelName {
            name: model.name.clone(),
            reason: reason.to_string(),
        };

        if !is_identifier(&model.name) {
            return Err(invalid("not a valid identifier"));
        }
        if !model.name.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Err(invalid("must start with an upper-case letter"));
        }
        if is_go_keyword(&lower_first(&model.name)) {
            return Err(invalid("its lower-camel form is a Go keyword"));
        }
        if RESERVED_MODELS.contains(&model.name.as_str()) {
            return Err(invalid("name is reserved by the generator"));
        }
        if IMPORTED_PACKAGES.contains(&model.private_name().as_str()) {
            return Err(invalid("shadows an imported package"));
        }

        let mut fields = HashSet::new();
        for field in &model.fields {
            if !is_identifier(&field.name) {
                return Err(DomainError::InvalidFieldName {
                    model: model.name.clone(),
                    field: field.name.clone(),
                });
            }
            if !fields.insert(field.go_name()) {
                return Err(DomainError::DuplicateField {
                    model: model.name.clone(),
                    field: field.name.clone(),
                });
            }
        }

        let mut methods = HashSet::new();
        for method in &model.methods {
            if !is_identifier(method.tag()) {
                return Err(DomainError::InvalidMethodTag {
                    model: model.name.clone(),
                    tag: method.tag().to_string(),
                });
            }
            if !methods.insert(method.display_name()) {
                return Err(DomainError::DuplicateMethod {
                    model: model.name.clone(),
                    method: method.tag().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
