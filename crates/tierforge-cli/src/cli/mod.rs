//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// File `tierforge init` writes when no path is given.
pub const DEFAULT_SPEC_FILE: &str = "tierforge.yaml";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tierforge",
    bin_name = "tierforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Layered Go CRUD service generator",
    long_about = "tierforge turns a short project description (layers, models, \
                  operations) into a compilable Go service: one package per \
                  layer, shared models, config, routers and an entry point.",
    after_help = "EXAMPLES:\n\
        \x20 tierforge init\n\
        \x20 tierforge generate tierforge.yaml\n\
        \x20 tierforge generate shop.toml --dry-run\n\
        \x20 tierforge layers\n\
        \x20 tierforge completions bash > /usr/share/bash-completion/completions/tierforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a Go project from a description file.
    #[command(
        visible_aliases = ["g", "gen"],
        about = "Generate a project from a description",
        after_help = "EXAMPLES:\n\
            \x20 tierforge generate tierforge.yaml\n\
            \x20 tierforge generate shop.json --output shop-v2\n\
            \x20 tierforge generate shop.yaml --unsafe --output /srv/shop --yes\n\
            \x20 tierforge generate shop.yaml --dry-run"
    )]
    Generate(GenerateArgs),

    /// Write an example description file.
    #[command(
        about = "Write an example description",
        after_help = "EXAMPLES:\n\
            \x20 tierforge init\n\
            \x20 tierforge init shop.toml\n\
            \x20 tierforge init tierforge.yaml --force"
    )]
    Init(InitArgs),

    /// List supported layer kinds.
    #[command(
        visible_alias = "ls",
        about = "List supported layer kinds",
        after_help = "EXAMPLES:\n\
            \x20 tierforge layers\n\
            \x20 tierforge layers --format json"
    )]
    Layers(LayersArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tierforge completions bash > ~/.local/share/bash-completion/completions/tierforge\n\
            \x20 tierforge completions zsh  > ~/.zfunc/_tierforge\n\
            \x20 tierforge completions fish > ~/.config/fish/completions/tierforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the tierforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tierforge config get generation.go_binary\n\
            \x20 tierforge config list\n\
            \x20 tierforge config init"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `tierforge generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Description file (.yaml, .yml, .json or .toml).
    #[arg(value_name = "SPEC", help = "Project description file")]
    pub spec: PathBuf,

    /// Override the description's `path`.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path (below generated/ unless --unsafe)"
    )]
    pub output: Option<String>,

    /// Write to the output path as given instead of below `generated/`.
    #[arg(long = "unsafe", help = "Write outside the generated/ sandbox")]
    pub unsafe_output: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Do not run `go mod tidy` / `go fmt` afterwards.
    #[arg(long = "skip-tooling", help = "Skip go mod tidy and go fmt")]
    pub skip_tooling: bool,

    /// Reject unknown layer tags instead of treating them as generic.
    #[arg(long = "strict", help = "Fail on unknown layer tags")]
    pub strict: bool,

    /// Skip the overwrite confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Overwrite an existing tree without asking"
    )]
    pub yes: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `tierforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the example; the extension picks the format.
    #[arg(value_name = "FILE", default_value = DEFAULT_SPEC_FILE)]
    pub file: PathBuf,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite an existing file")]
    pub force: bool,
}

// ── layers ────────────────────────────────────────────────────────────────────

/// Arguments for `tierforge layers`.
#[derive(Debug, Args)]
pub struct LayersArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: LayersFormat,
}

/// Output format for the `layers` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayersFormat {
    /// Human-readable table.
    Table,
    /// One kind per line.
    Plain,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tierforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tierforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.go_binary`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "tierforge",
            "generate",
            "shop.yaml",
            "--output",
            "shop-v2",
            "--skip-tooling",
            "-y",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.spec, PathBuf::from("shop.yaml"));
        assert_eq!(args.output.as_deref(), Some("shop-v2"));
        assert!(args.skip_tooling && args.yes);
        assert!(!args.unsafe_output && !args.dry_run && !args.strict);
    }

    #[test]
    fn generate_aliases() {
        for alias in ["g", "gen"] {
            let cli = Cli::parse_from(["tierforge", alias, "shop.yaml"]);
            assert!(matches!(cli.command, Commands::Generate(_)));
        }
    }

    #[test]
    fn init_defaults_to_yaml_file() {
        let cli = Cli::parse_from(["tierforge", "init"]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.file, PathBuf::from(DEFAULT_SPEC_FILE));
        assert!(!args.force);
    }

    #[test]
    fn layers_format_parses() {
        let cli = Cli::parse_from(["tierforge", "ls", "--format", "json"]);
        let Commands::Layers(args) = cli.command else {
            panic!("expected Layers command");
        };
        assert_eq!(args.format, LayersFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["tierforge", "--quiet", "--verbose", "layers"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::parse_from(["tierforge", "layers", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }
}
