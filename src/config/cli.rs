//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::{Path, PathBuf};

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Args, CommandFactory, Parser, Subcommand};

use super::defaults;

/// Discord SDK CLI
///
/// Resolves bot configuration from a YAML file or the environment and
/// prints formatted views of it.
#[derive(Debug, Parser)]
#[command(name = "discord")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Options shared by every subcommand
    #[command(flatten)]
    pub options: GlobalOptions,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options accepted before or after any subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to Discord config (YAML); an empty value means "search"
    #[arg(
        long,
        global = true,
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub config: Option<PathBuf>,

    /// Override bot token
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Override default webhook URL
    #[arg(long, global = true)]
    pub webhook: Option<String>,

    /// Output format (json/table/yaml)
    #[arg(long, global = true, default_value = defaults::OUTPUT_FORMAT)]
    pub output: String,
}

impl GlobalOptions {
    /// Returns the `--config` path, ignoring an empty value.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Returns the `--token` override, ignoring an empty value.
    #[must_use]
    pub fn token_override(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Returns the `--webhook` override, ignoring an empty value.
    #[must_use]
    pub fn webhook_override(&self) -> Option<&str> {
        self.webhook.as_deref().filter(|w| !w.is_empty())
    }
}

/// Subcommands for discord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Query guild metadata
    Guild,
    /// Interact with configured webhooks
    Webhook,
    /// Send or edit messages
    Message,
    /// Manage channels
    Channel,
    /// Respond to interactions
    Interaction,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    ///
    /// # Errors
    ///
    /// Returns the clap error for usage mistakes and for `--help`/`--version`,
    /// leaving the exit code to the caller.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Fallible variant of [`Cli::parse_from_iter`].
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags, missing values, or
    /// `--help`/`--version`.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if a parse error is a real usage error rather than a
    /// `--help` or `--version` request.
    #[must_use]
    pub fn is_usage_error(error: &clap::Error) -> bool {
        error.use_stderr()
    }

    /// Renders the top-level help text.
    #[must_use]
    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}
