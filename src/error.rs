use thiserror::Error;

use crate::domain::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to remove {file}: {source}")]
    RetentionIo {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} obsolete snapshot(s) could not be removed")]
    RetentionIncomplete { failed: usize },

    #[error("failed to read {file}: {source}")]
    SnapshotRead {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
