//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Supported log output formats.
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Level to use after applying `-v` flags on top of the configured one.
    ///
    /// `-v` only ever raises verbosity: the more verbose of the configured
    /// level and the flag level wins. A configured filter directive that is
    /// not a plain level is kept unless `-v` is given.
    #[must_use]
    pub fn effective_level(&self, verbosity: u8) -> String {
        let requested = match verbosity {
            0 => return self.level.clone(),
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        match level_rank(&self.level) {
            Some(configured) if configured >= level_rank(requested).unwrap_or(0) => {
                self.level.clone()
            }
            _ => requested.to_string(),
        }
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
    /// takes precedence over the configured level.
    pub fn init(&self, verbosity: u8) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.effective_level(verbosity)));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

/// Position of a plain level on the quiet-to-verbose scale.
fn level_rank(level: &str) -> Option<u8> {
    let rank = match level.trim().to_ascii_lowercase().as_str() {
        "off" => 0,
        "error" => 1,
        "warn" => 2,
        "info" => 3,
        "debug" => 4,
        "trace" => 5,
        _ => return None,
    };
    Some(rank)
}
