//! Configuration layer for the Discord CLI.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`GlobalOptions`], [`Command`])
//! - YAML configuration file parsing ([`FileConfig`])
//! - The resolved configuration model ([`Config`])
//! - File discovery and CLI overrides ([`resolve`])
//! - Environment access and interpolation ([`Environment`], [`expand_vars`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **CLI overrides** - `--token` and `--webhook` (the `"default"` entry)
//! 2. **Config file** - `--config`, or the first of `discord-config.yaml`,
//!    `discord.yaml`, `config/discord.yaml` that exists
//! 3. **Environment** - only when no config file is used at all, except for
//!    the rate-limit strategy, which falls back to
//!    `DISCORD_RATE_LIMIT_STRATEGY` even when a file is loaded
//! 4. **Built-in defaults** - Hardcoded default values
//!
//! Environment references (`${NAME}`, `$NAME`) inside a config file are
//! expanded textually before the YAML is parsed.
//!
//! # Legacy Rate-Limit Field
//!
//! `client.rate_limit_strategy` is accepted in files for compatibility. It is
//! read only when `client.rate_limit.strategy` is empty and is folded into the
//! structured block during [`Config::load`]. The resolved [`ClientSettings`]
//! has no legacy field.

mod cli;
pub mod defaults;
mod duration;
mod env;
mod error;
mod file;
mod resolve;
mod settings;

#[cfg(test)]
mod file_tests;

pub use cli::{Cli, Command, GlobalOptions};
pub use env::{Environment, ProcessEnv, expand_vars};
pub use error::ConfigError;
pub use file::FileConfig;
pub use resolve::{Resolved, apply_overrides, locate_config, resolve, search_paths};
pub use settings::{ClientSettings, Config, DiscordSettings, LoggingSettings, RateLimitSettings};
