use serde::{Deserialize, Serialize};

use crate::domain::{
    naming::{lower_first, to_pascal_case, to_snake_case},
    value_objects::{FieldType, MethodType},
};

/// One typed member of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Exported Go member name (`created_at` → `CreatedAt`).
    pub fn go_name(&self) -> String {
        to_pascal_case(&self.name)
    }

    /// JSON key (`CreatedAt` → `created_at`).
    pub fn json_name(&self) -> String {
        to_snake_case(&self.name)
    }

    /// Struct tag content for the shared storage struct.
    pub fn struct_tag(&self) -> String {
        match self.ty.gorm_tag() {
            Some(gorm) => format!("json:\"{}\" gorm:\"{gorm}\"", self.json_name()),
            None => format!("json:\"{}\"", self.json_name()),
        }
    }
}

/// A domain entity: name, ordered fields and the operations it supports.
///
/// Read-only during generation. Per-layer struct shapes are derived from it
/// by `generator::project_for_layer` and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub methods: Vec<MethodType>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }

    pub fn with_method(mut self, method: impl Into<MethodType>) -> Self {
        self.methods.push(method.into());
        self
    }

    /// Lower-camel projection (`UserProfile` → `userProfile`).
    pub fn private_name(&self) -> String {
        lower_first(&self.name)
    }

    pub fn snake_name(&self) -> String {
        to_snake_case(&self.name)
    }

    /// `<snake>.go`
    pub fn file_name(&self) -> String {
        format!("{}.go", self.snake_name())
    }

    /// Fully qualified storage type, `models.User`.
    pub fn qualified(&self) -> String {
        format!("models.{}", self.name)
    }

    /// Collection route, `/user_profile`.
    pub fn route(&self) -> String {
        format!("/{}", self.snake_name())
    }

    pub fn has_object_fields(&self) -> bool {
        self.fields.iter().any(|f| f.ty == FieldType::Object)
    }
}
