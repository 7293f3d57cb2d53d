//! Implementation of the `tierforge layers` command.

use serde::Serialize;

use tierforge_core::domain::capabilities::{LAYER_REGISTRY, LayerKindDef};

use crate::{
    cli::{LayersArgs, LayersFormat},
    error::CliResult,
    output::OutputManager,
};

/// Serializable view of one registry entry.
#[derive(Debug, Serialize)]
struct LayerKindView {
    kind: &'static str,
    tags: Vec<&'static str>,
    description: &'static str,
    config: Vec<String>,
}

impl From<&LayerKindDef> for LayerKindView {
    fn from(def: &LayerKindDef) -> Self {
        Self {
            kind: def.kind.as_str(),
            tags: def.tags.iter().copied().filter(|t| !t.is_empty()).collect(),
            description: def.description,
            config: def
                .config
                .iter()
                .map(|opt| format!("{}={}", opt.json_key, opt.default))
                .collect(),
        }
    }
}

pub fn execute(args: LayersArgs, output: OutputManager) -> CliResult<()> {
    let views: Vec<LayerKindView> = LAYER_REGISTRY.iter().map(|def| (*def).into()).collect();

    match args.format {
        LayersFormat::Table => {
            output.header("Layer kinds:")?;
            for view in &views {
                output.print(&format!("  {:<9} {}", view.kind, view.description))?;
                output.print(&format!(
                    "  {:<9} {}",
                    "",
                    output.dim(&format!("tags: {}", view.tags.join(", ")))
                ))?;
                if !view.config.is_empty() {
                    output.print(&format!(
                        "  {:<9} {}",
                        "",
                        output.dim(&format!("config: {}", view.config.join(" ")))
                    ))?;
                }
            }
            output.print("")?;
            output.print("Any other tag is treated as generic (rejected with --strict).")?;
        }

        // Bypasses quiet mode: machine-readable output must always appear.
        LayersFormat::Json => output.json(&views)?,

        LayersFormat::Plain => {
            for view in &views {
                println!("{}", view.kind);
            }
        }
    }

    Ok(())
}
