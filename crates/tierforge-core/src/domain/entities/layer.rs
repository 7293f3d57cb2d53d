//! Layer declarations and the ordered layer chain.
//!
//! The chain is an arena: layers live in one `Vec` in declaration order and
//! each layer's successor is an index into it. Successors are computed by
//! [`LayerChain::build`] and cannot be set from outside, so the chain always
//! matches the declaration order it was built from.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::model::Model, naming::upper_first, value_objects::LayerKind,
};

/// `(name, tag)` pairs substituted when no layers are declared.
pub static DEFAULT_LAYERS: &[(&str, &str)] = &[
    ("controller", "http"),
    ("service", ""),
    ("repository", "postgres"),
];

// ── Declaration ──────────────────────────────────────────────────────────────

/// One entry of the declared layer list, as written in the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDecl {
    #[serde(rename = "layer")]
    pub name: String,
    #[serde(default)]
    pub tag: String,
}

impl LayerDecl {
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
        }
    }

    /// Resolved kind. Unknown tags fall back to [`LayerKind::Generic`].
    pub fn kind(&self) -> LayerKind {
        LayerKind::from_tag(&self.tag).unwrap_or(LayerKind::Generic)
    }

    pub fn is_recognized(&self) -> bool {
        LayerKind::from_tag(&self.tag).is_some()
    }
}

pub fn default_layers() -> Vec<LayerDecl> {
    DEFAULT_LAYERS
        .iter()
        .map(|(name, tag)| LayerDecl::new(*name, *tag))
        .collect()
}

// ── Layer ────────────────────────────────────────────────────────────────────

/// Position of a layer in its chain. Index 0 is the outermost layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(usize);

impl LayerId {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Layer {
    id: LayerId,
    name: String,
    kind: LayerKind,
    next: Option<LayerId>,
    models: Arc<[Model]>,
}

impl Layer {
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// Also the Go package name and output directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn next(&self) -> Option<LayerId> {
        self.next
    }

    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }

    /// The model set shared by every layer of the chain.
    pub fn models(&self) -> &Arc<[Model]> {
        &self.models
    }

    /// `controller` → `Controller`
    pub fn public_name(&self) -> String {
        upper_first(&self.name)
    }

    /// `New<Model><Layer>`
    pub fn constructor_name(&self, model: &Model) -> String {
        format!("New{}{}", model.name, self.public_name())
    }

    /// Variable the entry point binds this layer's instance of `model` to.
    pub fn instance_var(&self, model: &Model) -> String {
        format!("{}{}", model.private_name(), self.public_name())
    }
}

// ── Chain ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct LayerChain {
    layers: Vec<Layer>,
    models: Arc<[Model]>,
}

impl LayerChain {
    /// Build the chain in declaration order; layer `i` points at `i + 1`.
    ///
    /// An empty declaration list is replaced by [`DEFAULT_LAYERS`] before
    /// any node is created.
    pub fn build(decls: &[LayerDecl], models: impl Into<Arc<[Model]>>) -> Self {
        let models = models.into();
        let defaults;
        let decls = if decls.is_empty() {
            defaults = default_layers();
            defaults.as_slice()
        } else {
            decls
        };

        let count = decls.len();
        let layers = decls
            .iter()
            .enumerate()
            .map(|(i, decl)| Layer {
                id: LayerId(i),
                name: decl.name.clone(),
                kind: decl.kind(),
                next: (i + 1 < count).then_some(LayerId(i + 1)),
                models: Arc::clone(&models),
            })
            .collect();

        Self { layers, models }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Outer to inner.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Layer> {
        self.layers.iter()
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id.0)
    }

    pub fn successor(&self, layer: &Layer) -> Option<&Layer> {
        layer.next.and_then(|id| self.get(id))
    }

    pub fn outermost(&self) -> Option<&Layer> {
        self.layers.first()
    }

    pub fn models(&self) -> &Arc<[Model]> {
        &self.models
    }

    /// First (outermost) layer of the given kind.
    pub fn first_of_kind(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    pub fn has_kind(&self, kind: LayerKind) -> bool {
        self.first_of_kind(kind).is_some()
    }

    /// Distinct kinds present, in chain order.
    pub fn kinds(&self) -> Vec<LayerKind> {
        let mut kinds = Vec::new();
        for layer in &self.layers {
            if !kinds.contains(&layer.kind) {
                kinds.push(layer.kind);
            }
        }
        kinds
    }

    pub fn names(&self) -> Vec<String> {
        self.layers.iter().map(|l| l.name.clone()).collect()
    }
}
