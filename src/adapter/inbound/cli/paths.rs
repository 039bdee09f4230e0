//! Path utilities for eddep.
//!
//! Settings live under `~/.eddep/`:
//! - `~/.eddep/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the eddep home directory (`~/.eddep/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".eddep")
}

/// Returns the default config file path (`~/.eddep/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
