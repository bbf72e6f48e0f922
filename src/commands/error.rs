//! Error types for subcommand execution.

use thiserror::Error;

use crate::output::OutputError;

/// Error type for running a subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The result could not be rendered.
    #[error(transparent)]
    Output(#[from] OutputError),

    /// Writing the rendered result failed.
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}
