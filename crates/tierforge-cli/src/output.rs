//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::time::Duration;

use chrono::{DateTime, Local};
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use tierforge_core::prelude::GenerationReport;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            OutputFormat::from_config(&config.output.format)
        } else {
            args.output_format
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Dimmed secondary text, e.g. a path in a listing.
    pub fn dim(&self, text: &str) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.dimmed().to_string()
        }
    }

    /// Pretty JSON on stdout. Printed even in quiet mode so pipes keep working.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Spinner on stderr; hidden when quiet or when stderr is not a terminal.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.quiet || !io::stderr().is_terminal() {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(msg.to_owned());
        bar.enable_steady_tick(Duration::from_millis(80));
        bar
    }

    /// Summary of a finished run.
    pub fn report(&self, report: &GenerationReport, started: DateTime<Local>) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json(report);
        }

        self.success(&format!(
            "Generated '{}' at {}",
            report.module,
            report.root.display()
        ))?;
        for line in summary_lines(report, started, Local::now()) {
            self.print(&format!("  {line}"))?;
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// Human summary lines for a report.
fn summary_lines(
    report: &GenerationReport,
    started: DateTime<Local>,
    finished: DateTime<Local>,
) -> Vec<String> {
    let elapsed = (finished - started).num_milliseconds().max(0) as f64 / 1000.0;
    let tooling = if report.tooling.is_empty() {
        "skipped".to_string()
    } else {
        report.tooling.join(", ")
    };

    vec![
        format!("Layers:      {}", report.layers.join(" -> ")),
        format!(
            "Written:     {} files, {} directories",
            report.files_written, report.directories_created
        ),
        format!("Tooling:     {tooling}"),
        format!(
            "Finished:    {} ({elapsed:.2}s)",
            finished.format("%Y-%m-%d %H:%M:%S")
        ),
        format!("Run id:      {}", report.id),
    ]
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use chrono::TimeDelta;
    use uuid::Uuid;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn report() -> GenerationReport {
        GenerationReport {
            id: Uuid::nil(),
            module: "shop".into(),
            root: PathBuf::from("generated/shop"),
            files_written: 13,
            directories_created: 6,
            layers: vec!["controller".into(), "service".into(), "repository".into()],
            tooling: Vec::new(),
        }
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(out.is_quiet());
    }

    #[test]
    fn color_follows_flag_and_format() {
        assert_ne!(make_manager(false, false, OutputFormat::Human).dim("x"), "x");
        assert_eq!(make_manager(false, true, OutputFormat::Human).dim("x"), "x");
        assert_eq!(make_manager(false, false, OutputFormat::Plain).dim("x"), "x");
    }

    #[test]
    fn explicit_format_wins_over_config() {
        let out = make_manager(false, false, OutputFormat::Json);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn quiet_spinner_is_hidden() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.spinner("working").is_hidden());
    }

    #[test]
    fn summary_names_chain_and_counts() {
        let started = Local::now();
        let finished = started + TimeDelta::milliseconds(1500);
        let lines = summary_lines(&report(), started, finished);

        assert_eq!(lines[0], "Layers:      controller -> service -> repository");
        assert_eq!(lines[1], "Written:     13 files, 6 directories");
        assert_eq!(lines[2], "Tooling:     skipped");
        assert!(lines[3].ends_with("(1.50s)"));
    }

    #[test]
    fn summary_lists_tooling_steps() {
        let mut report = report();
        report.tooling = vec!["go mod tidy".into(), "go fmt ./...".into()];
        let now = Local::now();
        let lines = summary_lines(&report, now, now);
        assert_eq!(lines[2], "Tooling:     go mod tidy, go fmt ./...");
    }
}
