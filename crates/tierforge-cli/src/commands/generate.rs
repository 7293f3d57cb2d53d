//! Implementation of the `tierforge generate` command.
//!
//! Responsibility: load the description, apply CLI and config overrides,
//! call the core generate service, and display results. No business logic
//! lives here.

use std::path::Path;

use chrono::Local;
use tracing::{debug, info, instrument};

use tierforge_adapters::{GoRenderer, GoToolchain, LocalFilesystem, NoopToolchain, SpecLoader};
use tierforge_core::{domain::FsEntry, prelude::*};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `tierforge generate` command.
///
/// Dispatch sequence:
/// 1. Load the description file
/// 2. Apply `--output` / `--unsafe` and config overrides
/// 3. Early-exit with the planned tree if `--dry-run`
/// 4. Confirm before overwriting an existing tree unless `--yes`
/// 5. Generate, run tooling, print the report
#[instrument(skip_all, fields(spec = %args.spec.display()))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Load
    let loader = SpecLoader::new(&args.spec);
    let spec = apply_overrides(loader.load()?, &args, &config);
    let options = generate_options(&args, &config);

    debug!(
        format = %loader.format(),
        strict = options.strict,
        run_toolchain = options.run_toolchain,
        "Description loaded"
    );

    let service = build_service(options, &config);

    // 2. Dry run: plan but do not write.
    if args.dry_run {
        let structure = service.plan(spec, options)?;
        return show_plan(&structure, &output);
    }

    // 3. Overwrite guard
    let root = spec.clone().normalized().output_root();
    if root.exists() && !args.yes {
        confirm_overwrite(&root, &global)?;
    }

    // 4. Generate
    let started = Local::now();
    let spinner = output.spinner(&format!("Generating {}...", root.display()));
    let result = service.generate(spec, options);
    spinner.finish_and_clear();
    let report = result?;

    info!(
        id = %report.id,
        files = report.files_written,
        "Generation finished"
    );

    // 5. Report + next steps
    output.report(&report, started)?;

    if output.format() != OutputFormat::Json && !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", report.root.display()))?;
        if report.tooling.is_empty() {
            output.print("  go mod tidy")?;
        }
        output.print("  go run .")?;
    }

    Ok(())
}

// ── Overrides ─────────────────────────────────────────────────────────────────

/// Flags beat config, config beats the description file.
fn apply_overrides(mut spec: ProjectSpec, args: &GenerateArgs, config: &AppConfig) -> ProjectSpec {
    if let Some(path) = args
        .output
        .as_ref()
        .or(config.generation.output_dir.as_ref())
    {
        spec.path = path.clone();
    }
    if args.unsafe_output {
        spec.unsafe_output = true;
    }
    spec
}

fn generate_options(args: &GenerateArgs, config: &AppConfig) -> GenerateOptions {
    GenerateOptions {
        strict: args.strict || config.generation.strict,
        run_toolchain: !(args.skip_tooling || config.generation.skip_tooling),
    }
}

fn build_service(options: GenerateOptions, config: &AppConfig) -> GenerateService {
    let toolchain: Box<dyn Toolchain> = if options.run_toolchain {
        Box::new(GoToolchain::new(config.generation.go_binary.clone()))
    } else {
        Box::new(NoopToolchain)
    };

    GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GoRenderer::new()),
        toolchain,
    )
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(structure: &ProjectStructure, out: &OutputManager) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        let paths: Vec<String> = structure
            .files()
            .map(|f| structure.root().join(&f.path).display().to_string())
            .collect();
        out.json(&paths)?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create {} files in {} directories at {}",
        structure.file_count(),
        structure.directory_count(),
        structure.root().display(),
    ))?;

    for entry in structure.entries() {
        match entry {
            FsEntry::Directory(dir) => out.print(&format!("  {}/", dir.path))?,
            FsEntry::File(file) => out.print(&format!(
                "  {}  {}",
                file.path,
                out.dim(&format!("({})", file.artifact))
            ))?,
        }
    }
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm_overwrite(root: &Path, global: &GlobalArgs) -> CliResult<()> {
    use std::io::IsTerminal as _;

    if global.quiet || !std::io::stdin().is_terminal() {
        return Err(CliError::OverwriteNotConfirmed {
            path: root.to_path_buf(),
        });
    }

    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite?", root.display()))
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })?;

    if confirmed {
        Ok(())
    } else {
        Err(CliError::Cancelled)
    }
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(root: &Path, _global: &GlobalArgs) -> CliResult<()> {
    Err(CliError::OverwriteNotConfirmed {
        path: root.to_path_buf(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
