//! External command execution behind a trait.
//!
//! [`CommandRunner`] is the only way the provisioner reaches `git` and
//! `docker`, so its sequencing can be exercised without spawning processes.
//! [`RealCommandRunner`] delegates to [`std::process::Command`] and blocks until
//! the child exits, there is no timeout.

use anyhow::{Context, Result};
use std::{
    path::{Path, PathBuf},
    process::Command,
};

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Best human readable reason for a failure: stderr, then stdout, then the exit code
    #[must_use]
    pub fn failure_message(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }

        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }

        self.code.map_or_else(
            || "terminated by signal".to_string(),
            |code| format!("exited with status {code}"),
        )
    }
}

/// Options for command execution
#[derive(Debug, Default, Clone)]
pub struct CommandOptions {
    /// Working directory for the command
    pub cwd: Option<PathBuf>,
}

impl CommandOptions {
    #[must_use]
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }

    #[must_use]
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

pub trait CommandRunner {
    /// Run `program` with `args`, wait for it and capture stdout and stderr
    ///
    /// # Errors
    ///
    /// Returns an error only if the process could not be spawned; a non-zero
    /// exit is reported through [`CommandOutput::success`]
    fn run(&self, program: &str, args: &[&str], options: &CommandOptions)
    -> Result<CommandOutput>;
}

pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        options: &CommandOptions,
    ) -> Result<CommandOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(cwd) = options.cwd() {
            cmd.current_dir(cwd);
        }

        tracing::debug!(program, ?args, cwd = ?options.cwd, "running command");

        let output = cmd
            .output()
            .with_context(|| format!("Failed to run '{program}'"))?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
