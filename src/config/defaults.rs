//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default number of request retries.
pub const RETRIES: u32 = 3;

/// Default rate-limit strategy when neither the file nor the environment names one.
pub const RATE_LIMIT_STRATEGY: &str = "adaptive";

/// Default rate-limit backoff base in seconds.
pub const BACKOFF_BASE_SECS: u64 = 1;

/// Default rate-limit backoff ceiling in seconds.
pub const BACKOFF_MAX_SECS: u64 = 60;

/// Default log level.
pub const LOG_LEVEL: &str = "info";

/// Default log format.
pub const LOG_FORMAT: &str = "json";

/// Default log output for environment-derived configuration.
pub const LOG_OUTPUT: &str = "stderr";

/// Webhook label targeted by `--webhook` and read by most subcommands.
pub const WEBHOOK_KEY: &str = "default";

/// Default output format name for `--output`.
pub const OUTPUT_FORMAT: &str = "json";

/// Config files searched, in order, when `--config` is not given.
pub const SEARCH_PATHS: [&str; 3] = ["discord-config.yaml", "discord.yaml", "config/discord.yaml"];

/// Environment variable names consulted by the loader and the default provider.
pub mod env {
    /// Bot token.
    pub const BOT_TOKEN: &str = "DISCORD_BOT_TOKEN";
    /// Application ID.
    pub const APPLICATION_ID: &str = "DISCORD_APPLICATION_ID";
    /// Default webhook URL.
    pub const WEBHOOK: &str = "DISCORD_WEBHOOK";
    /// Rate-limit strategy fallback.
    pub const RATE_LIMIT_STRATEGY: &str = "DISCORD_RATE_LIMIT_STRATEGY";
    /// Log level.
    pub const LOG_LEVEL: &str = "DISCORD_LOG_LEVEL";
}

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}

/// Default backoff base as Duration.
#[must_use]
pub const fn backoff_base() -> Duration {
    Duration::from_secs(BACKOFF_BASE_SECS)
}

/// Default backoff ceiling as Duration.
#[must_use]
pub const fn backoff_max() -> Duration {
    Duration::from_secs(BACKOFF_MAX_SECS)
}
