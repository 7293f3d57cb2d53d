//! Structured model of one generated Go source file.
//!
//! The orchestrator decides *what* each file declares; turning a
//! [`SourceFile`] into text is the job of a `SourceRenderer` adapter.
//! Method bodies are the one place where literal Go text is carried as-is,
//! because they are the output of the body strategies.

use std::collections::BTreeSet;

// ============================================================================
// Imports
// ============================================================================

/// A Go import path.
///
/// Variant order drives rendering order: standard library first, then
/// third-party modules, then packages of the generated module itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GoImport {
    Std(&'static str),
    External(&'static str),
    /// A package inside the generated module, e.g. `models`.
    Project(String),
}

impl GoImport {
    pub const JSON: Self = Self::Std("encoding/json");
    pub const FMT: Self = Self::Std("fmt");
    pub const OS: Self = Self::Std("os");
    pub const STRINGS: Self = Self::Std("strings");
    pub const TIME: Self = Self::Std("time");
    pub const GIN: Self = Self::External("github.com/gin-gonic/gin");
    pub const GORM: Self = Self::External("gorm.io/gorm");
    pub const GORM_POSTGRES: Self = Self::External("gorm.io/driver/postgres");
    pub const TELEBOT: Self = Self::External("github.com/tucnak/telebot");

    pub fn project(package: impl Into<String>) -> Self {
        Self::Project(package.into())
    }

    pub fn models() -> Self {
        Self::project("models")
    }

    pub fn config() -> Self {
        Self::project("config")
    }

    /// Full import path as written in the import block.
    pub fn path(&self, module: &str) -> String {
        match self {
            Self::Std(path) | Self::External(path) => (*path).to_string(),
            Self::Project(package) => format!("{module}/{package}"),
        }
    }
}

/// Ordered, de-duplicated import block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet(BTreeSet<GoImport>);

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, import: GoImport) {
        self.0.insert(import);
    }

    pub fn with(mut self, import: GoImport) -> Self {
        self.insert(import);
        self
    }

    pub fn extend(&mut self, other: &ImportSet) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn contains(&self, import: &GoImport) -> bool {
        self.0.contains(import)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GoImport> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<GoImport> for ImportSet {
    fn from_iter<I: IntoIterator<Item = GoImport>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A method or function signature without receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub params: Vec<Param>,
    pub returns: Vec<String>,
}

impl Signature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push(Param::new(name, ty));
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns.push(ty.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    pub name: String,
    pub ty: String,
    /// Raw struct tag content without backquotes.
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoStruct {
    pub name: String,
    pub fields: Vec<StructField>,
}

impl GoStruct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(StructField {
            name: name.into(),
            ty: ty.into(),
            tag: None,
        });
        self
    }

    pub fn tagged_field(
        mut self,
        name: impl Into<String>,
        ty: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        self.fields.push(StructField {
            name: name.into(),
            ty: ty.into(),
            tag: Some(tag.into()),
        });
        self
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoInterface {
    pub name: String,
    pub methods: Vec<Signature>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receiver {
    pub name: String,
    pub ty: String,
}

/// A function or method with a literal body.
///
/// `body` holds statements without the outer indentation level; nested
/// blocks inside it are indented with tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoFunc {
    pub doc: Vec<String>,
    pub receiver: Option<Receiver>,
    pub signature: Signature,
    pub body: String,
}

impl GoFunc {
    pub fn new(signature: Signature, body: impl Into<String>) -> Self {
        Self {
            doc: Vec::new(),
            receiver: None,
            signature,
            body: body.into(),
        }
    }

    pub fn with_receiver(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.receiver = Some(Receiver {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    pub fn with_doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn name(&self) -> &str {
        &self.signature.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Struct(GoStruct),
    Interface(GoInterface),
    Func(GoFunc),
}

// ============================================================================
// File
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Module path of the generated project, used to expand project imports.
    pub module: String,
    pub package: String,
    pub imports: ImportSet,
    pub items: Vec<Item>,
}

impl SourceFile {
    pub fn new(module: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            package: package.into(),
            imports: ImportSet::new(),
            items: Vec::new(),
        }
    }

    pub fn import(&mut self, import: GoImport) {
        self.imports.insert(import);
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn structs(&self) -> impl Iterator<Item = &GoStruct> {
        self.items.iter().filter_map(|i| match i {
            Item::Struct(s) => Some(s),
            _ => None,
        })
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &GoInterface> {
        self.items.iter().filter_map(|i| match i {
            Item::Interface(s) => Some(s),
            _ => None,
        })
    }

    pub fn funcs(&self) -> impl Iterator<Item = &GoFunc> {
        self.items.iter().filter_map(|i| match i {
            Item::Func(f) => Some(f),
            _ => None,
        })
    }

    pub fn func(&self, name: &str) -> Option<&GoFunc> {
        self.funcs().find(|f| f.name() == name)
    }
}
