//! Subcommand handlers.
//!
//! Each handler projects part of the resolved [`Config`] into a small
//! serializable view. [`execute`] renders that view with the session's
//! [`Formatter`] and writes it followed by a single newline.
//!
//! None of the handlers touch the network; the SDK clients they would drive
//! live outside this crate.

mod error;
mod views;


use std::io::Write;

pub use error::CommandError;
pub use views::{ApplicationView, DefaultWebhookView, InteractionView, TokenView};

use crate::config::{Command, Config};
use crate::output::Formatter;

/// Runs `command` against `config`, writing the rendered result to `out`.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn execute<W: Write>(
    command: Command,
    config: &Config,
    formatter: &Formatter,
    out: &mut W,
) -> Result<(), CommandError> {
    tracing::debug!(?command, ?formatter, "Running command");

    let rendered = match command {
        Command::Guild => formatter.format(&views::guild(config))?,
        Command::Webhook => formatter.format(&views::webhook(config))?,
        Command::Message => formatter.format(&views::message(config))?,
        Command::Channel => formatter.format(&views::channel(config))?,
        Command::Interaction => formatter.format(&views::interaction(config))?,
    };

    writeln!(out, "{}", rendered.trim_end_matches('\n'))?;
    out.flush()?;
    Ok(())
}
