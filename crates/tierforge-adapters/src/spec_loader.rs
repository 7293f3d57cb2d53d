//! Project description loading.
//!
//! Reads a project description from disk and deserializes it into a domain
//! [`ProjectSpec`]. The format is chosen from the file extension:
//!
//! | Extension        | Format |
//! |------------------|--------|
//! | `.yaml` / `.yml` | YAML   |
//! | `.json`          | JSON   |
//! | `.toml`          | TOML   |
//! | anything else    | YAML   |
//!
//! Defaults are not applied here; the core normalizes the spec before use.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, instrument};

use tierforge_core::{application::ApplicationError, domain::ProjectSpec, error::ForgeResult};

// ── Format ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl SpecFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntax or shape error in a project description.
#[derive(Debug, Error)]
pub enum SpecParseError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Deserialize a project description from text.
///
/// Blank input is an empty description, which normalizes to the default
/// project.
pub fn parse_spec(text: &str, format: SpecFormat) -> Result<ProjectSpec, SpecParseError> {
    if text.trim().is_empty() {
        return Ok(ProjectSpec::default());
    }

    let spec = match format {
        SpecFormat::Yaml => serde_yaml::from_str(text)?,
        SpecFormat::Json => serde_json::from_str(text)?,
        SpecFormat::Toml => toml::from_str(text)?,
    };
    Ok(spec)
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads one project description file.
pub struct SpecLoader {
    path: PathBuf,
}

impl SpecLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SpecFormat {
        SpecFormat::from_path(&self.path)
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn load(&self) -> ForgeResult<ProjectSpec> {
        let raw = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::SpecNotFound {
                path: self.path.clone(),
            },
            _ => ApplicationError::SpecLoadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            },
        })?;

        let format = self.format();
        let spec = parse_spec(&raw, format).map_err(|e| ApplicationError::SpecLoadFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        debug!(
            %format,
            layers = spec.layers.len(),
            models = spec.models.len(),
            "loaded project description"
        );
        Ok(spec)
    }
}

// ── Example description ───────────────────────────────────────────────────────

/// Starter description written by `tierforge init`.
pub const EXAMPLE_SPEC_YAML: &str = r#"# tierforge project description
project_name: shop

# Without `unsafe: true` the project is written to generated/<path>.
unsafe: false
path: shop

# Outermost layer first. Tags: http, postgres, telebot; anything else is generic.
layers:
  - layer: controller
    tag: http
  - layer: service
  - layer: repository
    tag: postgres

models:
  - name: User
    fields:
      - name: id
        type: id
      - name: name
        type: string
      - name: email
        type: string
      - name: age
        type: int
    methods: [create, read, update, delete]
"#;

const EXAMPLE_SPEC_TOML: &str = r#"# tierforge project description
project_name = "shop"

# Without `unsafe = true` the project is written to generated/<path>.
unsafe = false
path = "shop"

# Outermost layer first. Tags: http, postgres, telebot; anything else is generic.
[[layers]]
layer = "controller"
tag = "http"

[[layers]]
layer = "service"

[[layers]]
layer = "repository"
tag = "postgres"

[[models]]
name = "User"
methods = ["create", "read", "update", "delete"]
fields = [
  { name = "id", type = "id" },
  { name = "name", type = "string" },
  { name = "email", type = "string" },
  { name = "age", type = "int" },
]
"#;

/// The starter description in the requested format.
pub fn example_spec(format: SpecFormat) -> ForgeResult<String> {
    match format {
        SpecFormat::Yaml => Ok(EXAMPLE_SPEC_YAML.to_string()),
        SpecFormat::Toml => Ok(EXAMPLE_SPEC_TOML.to_string()),
        SpecFormat::Json => {
            let spec = parse_spec(EXAMPLE_SPEC_YAML, SpecFormat::Yaml)
                .and_then(|spec| Ok(serde_json::to_string_pretty(&spec)?))
                .map_err(|e| ApplicationError::RenderingFailed {
                    artifact: "example description".into(),
                    reason: e.to_string(),
                })?;
            Ok(spec + "\n")
        }
    }
}
