//! Error types for the coding-standards installer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading or writing project files.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Composer manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("Failed to parse {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid manifest {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to get user input: {0}")]
    Prompt(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SetupError {
    /// True for the fatal class raised while the manifest is being located or parsed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SetupError::ManifestNotFound(_)
                | SetupError::ManifestParse { .. }
                | SetupError::InvalidManifest { .. }
                | SetupError::ConfigError(_)
        )
    }
}

impl From<config::ConfigError> for SetupError {
    fn from(err: config::ConfigError) -> Self {
        SetupError::ConfigError(err.to_string())
    }
}
