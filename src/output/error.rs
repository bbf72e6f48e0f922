//! Error types for output formatting.

use thiserror::Error;

/// Error type for formatter construction and rendering.
#[derive(Debug, Error)]
pub enum OutputError {
    /// `--output` named a format that is not supported.
    #[error("Unknown output format '{0}': expected json, table, or yaml")]
    UnknownFormat(String),

    /// JSON serialization failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed.
    #[error("Failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
