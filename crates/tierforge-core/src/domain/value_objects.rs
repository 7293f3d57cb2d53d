//! Domain value objects: FieldType, LayerKind, MethodType, HttpVerb.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Per-kind technology facts (imports, injected handles, config options) live
//! in `capabilities.rs`; this file only defines the types, their string
//! representations and the per-operation naming rules.

use crate::domain::{error::DomainError, naming::upper_first};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── FieldType ────────────────────────────────────────────────────────────────

/// Semantic type of a model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Id,
    Int,
    #[serde(alias = "float64")]
    Float,
    String,
    Bool,
    Object,
}

impl FieldType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Object => "object",
        }
    }

    /// The Go type a field of this kind is declared with.
    pub const fn go_type(&self) -> &'static str {
        match self {
            Self::Id => "uint",
            Self::Int => "int",
            Self::Float => "float64",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Object => "json.RawMessage",
        }
    }

    /// Extra gorm struct-tag content, if any.
    pub const fn gorm_tag(&self) -> Option<&'static str> {
        match self {
            Self::Id => Some("primaryKey"),
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "int" => Ok(Self::Int),
            "float" | "float64" => Ok(Self::Float),
            "string" => Ok(Self::String),
            "bool" => Ok(Self::Bool),
            "object" => Ok(Self::Object),
            other => Err(DomainError::UnknownFieldType(other.to_string())),
        }
    }
}

// ── LayerKind ────────────────────────────────────────────────────────────────

/// The technology behind a layer. Selects the body strategy and the extra
/// handle a layer struct carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Http,
    Postgres,
    Telebot,
    Generic,
}

impl LayerKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Postgres => "postgres",
            Self::Telebot => "telebot",
            Self::Generic => "generic",
        }
    }

    /// Resolve a declaration tag. `None` means the tag is not recognised.
    ///
    /// Delegates to `capabilities::kind_for_tag`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        crate::domain::capabilities::kind_for_tag(tag)
    }

    /// Transport layers receive a per-request context instead of a model.
    pub const fn is_transport(self) -> bool {
        matches!(self, Self::Http | Self::Telebot)
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── HttpVerb ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpVerb {
    /// Upper-case form, which is also the gin router method name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Lower-case form used by `@Router` annotations.
    pub const fn annotation(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ReturnShape ──────────────────────────────────────────────────────────────

/// What a non-transport method returns besides `error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnShape {
    /// `[]models.M, error`
    Collection,
    /// `*models.M, error`
    Pointer,
    /// `error`
    ErrorOnly,
}

// ── MethodType ───────────────────────────────────────────────────────────────

/// An operation a model supports.
///
/// Parsing is case-insensitive for the four canonical operations. Anything
/// else is kept verbatim as a custom tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MethodType {
    Create,
    Read,
    Update,
    Delete,
    Custom(String),
}

impl MethodType {
    pub fn parse(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "create" => Self::Create,
            "read" => Self::Read,
            "update" => Self::Update,
            "delete" => Self::Delete,
            _ => Self::Custom(tag.to_string()),
        }
    }

    /// The declaration tag (`create`, or the custom text as written).
    pub fn tag(&self) -> &str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Custom(tag) => tag,
        }
    }

    /// Capitalised operation name used as the method-name prefix.
    pub fn display_name(&self) -> String {
        match self {
            Self::Create => "Create".into(),
            Self::Read => "Read".into(),
            Self::Update => "Update".into(),
            Self::Delete => "Delete".into(),
            Self::Custom(tag) => upper_first(tag),
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    pub fn http_verb(&self) -> HttpVerb {
        match self {
            Self::Create => HttpVerb::Post,
            Self::Read => HttpVerb::Get,
            Self::Update => HttpVerb::Patch,
            Self::Delete => HttpVerb::Delete,
            Self::Custom(_) => HttpVerb::Post,
        }
    }

    /// Sub-route below the model collection route. Empty for canonical ops.
    pub fn route_suffix(&self) -> String {
        match self {
            Self::Custom(tag) => tag.to_lowercase(),
            _ => String::new(),
        }
    }

    pub fn return_shape(&self) -> ReturnShape {
        match self {
            Self::Read => ReturnShape::Collection,
            Self::Delete => ReturnShape::ErrorOnly,
            _ => ReturnShape::Pointer,
        }
    }
}

impl fmt::Display for MethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl From<String> for MethodType {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<&str> for MethodType {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl From<MethodType> for String {
    fn from(method: MethodType) -> Self {
        method.tag().to_string()
    }
}
