//! Console output formatting.
//!
//! [`Output`] is built once from the global CLI flags and handed to every
//! handler. It supports JSON mode (for scripting), quiet mode, and colored
//! human output, and doubles as the [`Reporter`] the core talks to.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::Result;
use crate::port::Reporter;

/// Output settings taken from the global CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

/// Console renderer shared by the CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    config: OutputConfig,
}

impl Output {
    #[must_use]
    pub const fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.config.json
    }

    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.config.quiet
    }

    #[must_use]
    pub fn verbosity(&self) -> u8 {
        self.config.verbose
    }

    /// Regular human output is off in JSON mode and in quiet mode.
    fn suppressed(&self) -> bool {
        self.config.json || self.config.quiet
    }

    /// Print a section header.
    pub fn section(&self, title: &str) {
        if self.suppressed() {
            return;
        }
        println!();
        println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
    }

    /// Print a labeled value.
    pub fn field(&self, label: &str, value: impl Display) {
        if self.suppressed() {
            return;
        }
        println!(
            "  {:<12} {}",
            label.if_supports_color(Stream::Stdout, |t| t.dimmed()),
            value
        );
    }

    /// Print a success line.
    pub fn success(&self, message: &str) {
        if self.suppressed() {
            return;
        }
        println!(
            "  {} {}",
            "✓".if_supports_color(Stream::Stdout, |t| t.green()),
            message
        );
    }

    /// Print a warning line. Shown in quiet mode too.
    pub fn warning(&self, message: &str) {
        if self.config.json {
            return;
        }
        println!(
            "  {} {}",
            "⚠".if_supports_color(Stream::Stdout, |t| t.yellow()),
            message
        );
    }

    /// Print an error line to stderr.
    pub fn error(&self, message: &str) {
        if self.config.json {
            eprintln!(
                "{}",
                serde_json::json!({ "type": "error", "payload": { "message": message } })
            );
            return;
        }
        eprintln!(
            "  {} {}",
            "×".if_supports_color(Stream::Stderr, |t| t.red()),
            message
        );
    }

    /// Print a dimmed note.
    pub fn note(&self, message: &str) {
        if self.suppressed() {
            return;
        }
        println!("  {}", message.if_supports_color(Stream::Stdout, |t| t.dimmed()));
    }

    /// Print a hint with "hint:" prefix.
    pub fn hint(&self, message: &str) {
        if self.suppressed() {
            return;
        }
        println!(
            "  {}: {}",
            "hint".if_supports_color(Stream::Stdout, |t| t.cyan()),
            message.if_supports_color(Stream::Stdout, |t| t.dimmed())
        );
    }

    /// Print a completed action ("✓ Removed ...").
    pub fn action_done(&self, verb: &str, target: &str) {
        if self.suppressed() {
            return;
        }
        println!(
            "  {} {} {}",
            "✓".if_supports_color(Stream::Stdout, |t| t.green()),
            verb.if_supports_color(Stream::Stdout, |t| t.bold()),
            target
        );
    }

    /// Print multiple lines of content, each indented.
    pub fn lines(&self, content: &str) {
        if self.suppressed() {
            return;
        }
        for line in content.lines() {
            println!("  {line}");
        }
    }

    /// Print one bare line, unindented. Quiet mode keeps these: they are
    /// the data itself, for piping.
    pub fn plain(&self, line: impl Display) {
        if self.config.json {
            return;
        }
        println!("{line}");
    }

    /// Render rows as a table.
    pub fn table<T: Tabled>(&self, rows: impl IntoIterator<Item = T>) {
        if self.config.json {
            return;
        }
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        let rendered = table.to_string();
        if self.config.quiet {
            println!("{rendered}");
        } else {
            self.lines(&rendered);
        }
    }

    /// Emit a JSON document on stdout (JSON mode only).
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        if self.config.json {
            println!("{}", serde_json::to_string(value)?);
        }
        Ok(())
    }

    /// Format a value in cyan.
    pub fn highlight(&self, value: impl Display) -> String {
        let value = value.to_string();
        if self.config.json {
            return value;
        }
        format!("{}", value.if_supports_color(Stream::Stdout, |t| t.cyan()))
    }

    /// Format a positive value in green.
    pub fn positive(&self, value: impl Display) -> String {
        let value = value.to_string();
        if self.config.json {
            return value;
        }
        format!("{}", value.if_supports_color(Stream::Stdout, |t| t.green()))
    }
}

impl Reporter for Output {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
        self.note(message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn error(&self, message: &str) {
        Output::error(self, message);
    }
}
