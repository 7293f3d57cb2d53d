use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    layer::{LayerDecl, default_layers},
    model::Model,
};

/// Project name used when the input leaves it empty.
pub const DEFAULT_PROJECT_NAME: &str = "tierforge";

/// Directory generated trees are placed under unless `unsafe` is set.
pub const SANDBOX_DIR: &str = "generated";

/// The parsed input description of the project to generate.
///
/// Adapters deserialize this from YAML, JSON or TOML. The core only ever
/// sees the materialized structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    #[serde(default)]
    pub project_name: String,

    /// Outer to inner.
    #[serde(default)]
    pub layers: Vec<LayerDecl>,

    /// Write to `path` as given instead of below [`SANDBOX_DIR`].
    #[serde(default, rename = "unsafe")]
    pub unsafe_output: bool,

    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub models: Vec<Model>,
}

impl ProjectSpec {
    /// Fill every documented default.
    ///
    /// - empty project name → [`DEFAULT_PROJECT_NAME`]
    /// - empty path → project name
    /// - empty layer list → `controller(http) → service → repository(postgres)`
    pub fn normalized(mut self) -> Self {
        self.project_name = self.project_name.trim().to_string();
        if self.project_name.is_empty() {
            self.project_name = DEFAULT_PROJECT_NAME.to_string();
        }

        self.path = self.path.trim().to_string();
        if self.path.is_empty() {
            self.path = self.project_name.clone();
        }

        if self.layers.is_empty() {
            self.layers = default_layers();
        }

        self
    }

    /// Go module path of the generated project.
    pub fn module(&self) -> &str {
        &self.project_name
    }

    /// Where the tree is written, relative to the working directory unless
    /// `unsafe` allows an absolute path.
    pub fn output_root(&self) -> PathBuf {
        if self.unsafe_output {
            PathBuf::from(&self.path)
        } else {
            PathBuf::from(SANDBOX_DIR).join(&self.path)
        }
    }

    /// Layers whose tag did not resolve to a known kind.
    pub fn unrecognized_layers(&self) -> Vec<&LayerDecl> {
        self.layers.iter().filter(|l| !l.is_recognized()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_fills_defaults() {
        let spec = ProjectSpec::default().normalized();
        assert_eq!(spec.project_name, DEFAULT_PROJECT_NAME);
        assert_eq!(spec.path, DEFAULT_PROJECT_NAME);
        assert_eq!(spec.layers.len(), 3);
        assert_eq!(spec.layers[0], LayerDecl::new("controller", "http"));
    }

    #[test]
    fn normalized_keeps_declared_values() {
        let spec = ProjectSpec {
            project_name: "shop".into(),
            path: "out/shop".into(),
            layers: vec![LayerDecl::new("api", "http")],
            ..Default::default()
        }
        .normalized();
        assert_eq!(spec.path, "out/shop");
        assert_eq!(spec.layers.len(), 1);
    }

    #[test]
    fn safe_output_is_sandboxed() {
        let spec = ProjectSpec {
            project_name: "shop".into(),
            ..Default::default()
        }
        .normalized();
        assert_eq!(spec.output_root(), PathBuf::from("generated/shop"));

        let spec = ProjectSpec {
            unsafe_output: true,
            ..spec
        };
        assert_eq!(spec.output_root(), PathBuf::from("shop"));
    }
}
