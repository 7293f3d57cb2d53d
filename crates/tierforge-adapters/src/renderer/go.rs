//! gofmt-style text emission for Go source units.
//!
//! The renderer has no decision logic: it prints exactly what the planned
//! [`SourceFile`] declares, in declaration order. Import blocks are grouped
//! standard library, third party, then project packages.

use std::fmt::Write as _;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::instrument;

use tierforge_core::{
    application::{ApplicationError, ports::SourceRenderer},
    domain::{
        FileContent, GoFunc, GoImport, GoInterface, GoStruct, ImportSet, Item, Signature,
        SourceFile,
    },
    error::ForgeResult,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct GoRenderer;

impl GoRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_source(&self, file: &SourceFile) -> String {
        let mut out = format!("package {}\n", file.package);

        if !file.imports.is_empty() {
            out.push('\n');
            out.push_str(&import_block(&file.imports, &file.module));
        }

        for item in &file.items {
            out.push('\n');
            match item {
                Item::Struct(s) => out.push_str(&struct_decl(s)),
                Item::Interface(i) => out.push_str(&interface_decl(i)),
                Item::Func(f) => out.push_str(&func_decl(f)),
            }
        }

        out
    }

    pub fn render_json(&self, pairs: &[(String, String)]) -> ForgeResult<String> {
        let mut text = serde_json::to_string_pretty(&OrderedObject(pairs)).map_err(|e| {
            ApplicationError::RenderingFailed {
                artifact: "json document".into(),
                reason: e.to_string(),
            }
        })?;
        text.push('\n');
        Ok(text)
    }
}

impl SourceRenderer for GoRenderer {
    #[instrument(skip_all)]
    fn render(&self, content: &FileContent) -> ForgeResult<String> {
        match content {
            FileContent::Source(file) => Ok(self.render_source(file)),
            FileContent::Json(pairs) => self.render_json(pairs),
            FileContent::Text(text) => Ok(text.clone()),
        }
    }
}

// ── JSON ─────────────────────────────────────────────────────────────────────

/// Object whose keys keep the planned order.
struct OrderedObject<'a>(&'a [(String, String)]);

impl Serialize for OrderedObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ── Declarations ─────────────────────────────────────────────────────────────

fn import_block(imports: &ImportSet, module: &str) -> String {
    let paths: Vec<(u8, String)> = imports
        .iter()
        .map(|import| {
            let group = match import {
                GoImport::Std(_) => 0,
                GoImport::External(_) => 1,
                GoImport::Project(_) => 2,
            };
            (group, import.path(module))
        })
        .collect();

    if let [(_, only)] = paths.as_slice() {
        return format!("import \"{only}\"\n");
    }

    let mut out = String::from("import (\n");
    let mut previous = None;
    for (group, path) in &paths {
        if previous.is_some_and(|p| p != *group) {
            out.push('\n');
        }
        let _ = writeln!(out, "\t\"{path}\"");
        previous = Some(*group);
    }
    out.push_str(")\n");
    out
}

fn struct_decl(s: &GoStruct) -> String {
    let name_width = s.fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    let type_width = s.fields.iter().map(|f| f.ty.len()).max().unwrap_or(0);

    let mut out = format!("type {} struct {{\n", s.name);
    for field in &s.fields {
        let line = match &field.tag {
            Some(tag) => format!(
                "\t{:name_width$} {:type_width$} `{tag}`",
                field.name, field.ty
            ),
            None => format!("\t{:name_width$} {}", field.name, field.ty),
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

fn interface_decl(i: &GoInterface) -> String {
    let mut out = format!("type {} interface {{\n", i.name);
    for method in &i.methods {
        let _ = writeln!(out, "\t{}", signature(method));
    }
    out.push_str("}\n");
    out
}

fn func_decl(f: &GoFunc) -> String {
    let mut out = String::new();
    for line in &f.doc {
        let _ = writeln!(out, "// {line}");
    }

    out.push_str("func ");
    if let Some(recv) = &f.receiver {
        let _ = write!(out, "({} {}) ", recv.name, recv.ty);
    }
    out.push_str(&signature(&f.signature));
    out.push_str(" {\n");
    for line in f.body.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, "\t{line}");
        }
    }
    out.push_str("}\n");
    out
}

/// `Name(a A, b B) (R1, R2)`
fn signature(sig: &Signature) -> String {
    let params = sig
        .params
        .iter()
        .map(|p| format!("{} {}", p.name, p.ty))
        .collect::<Vec<_>>()
        .join(", ");

    let returns = match sig.returns.as_slice() {
        [] => String::new(),
        [one] => format!(" {one}"),
        many => format!(" ({})", many.join(", ")),
    };

    format!("{}({params}){returns}", sig.name)
}
