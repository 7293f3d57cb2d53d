//! `tierforge init`: write an example project description.

use std::fs;

use tracing::info;

use tierforge_adapters::{SpecFormat, example_spec};

use crate::{
    cli::InitArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let path = args.file;

    if path.exists() && !args.force {
        return Err(CliError::FileExists { path });
    }

    let format = SpecFormat::from_path(&path);
    let text = example_spec(format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&path, text)
        .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;

    info!(path = %path.display(), %format, "Example description written");

    output.success(&format!("Example description written to {}", path.display()))?;
    output.print(&format!("  Edit it, then run: tierforge generate {}", path.display()))?;
    Ok(())
}
