//! Orchestrator: plans every generated unit from the layer chain.
//!
//! Each submodule computes one family of units as structured
//! [`SourceFile`](crate::domain::SourceFile)s. Nothing here touches the
//! filesystem or produces final text; [`LayerController::plan`] collects the
//! units into a [`ProjectStructure`](crate::domain::ProjectStructure).

mod controller;
mod entrypoint;
mod layer_unit;
mod projection;
mod routers;
mod shared;

pub use controller::{COMPOSE_FILE, ENTRY_FILE, LayerController, MODULE_FILE};
pub use layer_unit::{annotations, interface_unit, model_unit};
pub use projection::{StructShape, project_for_layer};
pub use routers::{BOT_PACKAGE, HTTP_PACKAGE};
pub use shared::{CONFIG_FILE, GO_VERSION};

/// `return &T{...}` with one `key: value` line per pair, values aligned in
/// one column as gofmt lays out composite literals.
fn composite_return<K, V>(type_name: &str, pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let width = pairs
        .iter()
        .map(|(key, _)| key.as_ref().len() + 1)
        .max()
        .unwrap_or(0);
    let lines: String = pairs
        .iter()
        .map(|(key, value)| {
            let key = format!("{}:", key.as_ref());
            format!("\t{key:width$} {},\n", value.as_ref())
        })
        .collect();
    format!("return &{type_name}{{\n{lines}}}")
}
