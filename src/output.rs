//! Terminal output: status lines and the provisioning spinner.
//!
//! Everything goes to stderr so stdout stays clean for `--help` and `--version`.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::{borrow::Cow, time::Duration};

/// Receives a status line before each provisioning step
///
/// Implementations only observe, they never influence control flow.
pub trait Reporter {
    fn step(&self, msg: &str);
}

pub struct Output;

impl Output {
    /// `✓ Database mydb is now running`
    pub fn success(msg: impl AsRef<str>) {
        eprintln!("{} {}", "✓".green().bold(), msg.as_ref());
    }

    /// `✗ Invalid database type ...`, multi-line messages keep their layout
    pub fn error(msg: impl AsRef<str>) {
        eprintln!("{} {}", "✗".red().bold(), msg.as_ref().red());
    }

    /// `ℹ Setting up environment variables`
    pub fn info(msg: impl AsRef<str>) {
        eprintln!("{} {}", "ℹ".blue().bold(), msg.as_ref());
    }

    /// Spinner that animates until one of the `finish_*` methods is called
    #[must_use]
    pub fn spinner(msg: impl Into<Cow<'static, str>>) -> Spinner {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg);
        pb.enable_steady_tick(Duration::from_millis(80));
        Spinner(pb)
    }
}

pub struct Spinner(ProgressBar);

impl Spinner {
    pub fn finish_success(self, msg: impl AsRef<str>) {
        self.0
            .finish_with_message(format!("{} {}", "✓".green().bold(), msg.as_ref()));
        if self.0.is_hidden() {
            Output::success(msg);
        }
    }

    pub fn finish_error(self, msg: impl AsRef<str>) {
        self.0
            .finish_with_message(format!("{} {}", "✗".red().bold(), msg.as_ref()));
        if self.0.is_hidden() {
            Output::error(msg);
        }
    }
}

impl Reporter for Spinner {
    fn step(&self, msg: &str) {
        // printed above the spinner, and still printed when stderr is not a terminal
        self.0.suspend(|| Output::info(msg));
    }
}
