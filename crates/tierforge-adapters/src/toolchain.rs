//! Post-generation Go tooling.

use std::{io, path::Path, process::Command};

use tracing::{debug, info, instrument};

use tierforge_core::{
    application::{ApplicationError, ports::Toolchain},
    error::ForgeResult,
};

pub const DEFAULT_GO_BINARY: &str = "go";

/// Runs `go mod tidy` then `go fmt ./...` in the generated root.
#[derive(Debug, Clone)]
pub struct GoToolchain {
    binary: String,
}

impl GoToolchain {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Argument lists in execution order.
    pub fn steps() -> [&'static [&'static str]; 2] {
        [&["mod", "tidy"], &["fmt", "./..."]]
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!("{} {}", self.binary, args.join(" "))
    }

    fn run_step(&self, root: &Path, args: &[&str]) -> ForgeResult<String> {
        let line = self.command_line(args);
        debug!(command = %line, "running");

        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(root)
            .output()
            .map_err(|e| ApplicationError::ToolchainFailed {
                command: line.clone(),
                reason: match e.kind() {
                    io::ErrorKind::NotFound => format!("`{}` not found on PATH", self.binary),
                    _ => e.to_string(),
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ApplicationError::ToolchainFailed {
                command: line,
                reason: if stderr.is_empty() {
                    output.status.to_string()
                } else {
                    stderr
                },
            }
            .into());
        }

        Ok(line)
    }
}

impl Default for GoToolchain {
    fn default() -> Self {
        Self::new(DEFAULT_GO_BINARY)
    }
}

impl Toolchain for GoToolchain {
    #[instrument(skip_all, fields(root = %root.display(), binary = %self.binary))]
    fn run(&self, root: &Path) -> ForgeResult<Vec<String>> {
        let mut ran = Vec::new();
        for args in Self::steps() {
            ran.push(self.run_step(root, args)?);
        }
        info!(commands = ran.len(), "go tooling finished");
        Ok(ran)
    }
}

/// Skips post-processing entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopToolchain;

impl Toolchain for NoopToolchain {
    fn run(&self, _root: &Path) -> ForgeResult<Vec<String>> {
        Ok(Vec::new())
    }
}
