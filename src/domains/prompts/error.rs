//! Prompt-specific error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during prompt operations.
///
/// `UnknownTemplate` is the only variant surfaced to clients; the rest are
/// load-time failures that cause a single category to be skipped.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The requested template was not found in the store.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// A template file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The category's `config.yaml` could not be parsed.
    #[error("Invalid config at {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The parsed configuration failed validation.
    #[error("Invalid template config: {0}")]
    Validation(String),
}

impl PromptError {
    /// Create a new "unknown template" error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownTemplate(name.into())
    }

    /// Create a new read error for the given path.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new config parse error for the given path.
    pub fn config(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
