//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Both variants carry the path of the file involved so the message is
/// actionable on its own.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the YAML configuration (after environment expansion).
    #[error("Failed to parse config file '{}': {source}", path.display())]
    YamlParse {
        /// Path to the config file
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    /// Returns the path of the config file the error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileRead { path, .. } | Self::YamlParse { path, .. } => path,
        }
    }
}
