//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Configuration is read from a TOML
//! file; every key has a default, so an absent file means "all defaults".
//! `EDDEP_DATA_DIR` overrides the data directory from the file.
//!
//! # Example
//!
//! ```no_run
//! use eddep::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::logging::{LoggingConfig, LOG_FORMATS};
use super::trading::TradingConfig;
use crate::error::{ConfigError, Result};

/// Environment variable that overrides `data_dir`.
pub const DATA_DIR_ENV: &str = "EDDEP_DATA_DIR";

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the snapshot files.
    ///
    /// Defaults to the current directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Sweep threshold and excluded origins.
    #[serde(default)]
    pub trading: TradingConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            logging: LoggingConfig::default(),
            trading: TradingConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                config.data_dir = PathBuf::from(dir);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from an explicit path, or from `default_path` when it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file yields the defaults.
    pub fn load_or_default(explicit: Option<&Path>, default_path: &Path) -> Result<Self> {
        match explicit {
            Some(path) if !path.exists() => Err(ConfigError::NotFound {
                path: path.display().to_string(),
            }
            .into()),
            Some(path) => Self::load(path),
            None if default_path.exists() => Self::load(default_path),
            None => Self::parse_toml(""),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "data_dir",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if self.trading.lowest_profit < 0 {
            return Err(ConfigError::InvalidValue {
                field: "lowest_profit",
                reason: "must be zero or greater".to_string(),
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging, raising the level by `verbosity` (`-v` count).
    pub fn init_logging(&self, verbosity: u8) {
        self.logging.init(verbosity);
    }
}
