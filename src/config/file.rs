//! YAML configuration file schema.
//!
//! Defines the on-disk structure with serde. Every key is optional; defaults
//! are applied when the file is turned into a [`Config`](super::Config).

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use super::duration;

/// Root structure of the YAML config file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    /// Discord credentials and webhooks
    #[serde(default, deserialize_with = "null_as_default")]
    pub discord: DiscordSection,

    /// HTTP client tuning
    #[serde(default, deserialize_with = "null_as_default")]
    pub client: ClientSection,

    /// Logging settings
    #[serde(default, deserialize_with = "null_as_default")]
    pub logging: LoggingSection,
}

/// `discord:` section.
#[derive(Debug, Default, Deserialize)]
pub struct DiscordSection {
    /// Bot token
    pub bot_token: Option<String>,

    /// Application ID
    pub application_id: Option<String>,

    /// Webhook URLs keyed by label; `null` values read as empty strings
    #[serde(default, deserialize_with = "null_as_default")]
    pub webhooks: BTreeMap<String, Option<String>>,
}

/// `client:` section.
#[derive(Debug, Default, Deserialize)]
pub struct ClientSection {
    /// Request timeout
    #[serde(default, deserialize_with = "duration::deserialize_option")]
    pub timeout: Option<Duration>,

    /// Retry count
    pub retries: Option<u32>,

    /// Structured rate-limit block
    #[serde(default, deserialize_with = "null_as_default")]
    pub rate_limit: RateLimitSection,

    /// Deprecated flat strategy, migrated into `rate_limit.strategy` on load
    pub rate_limit_strategy: Option<String>,
}

/// `client.rate_limit:` block.
#[derive(Debug, Default, Deserialize)]
pub struct RateLimitSection {
    /// Strategy name
    pub strategy: Option<String>,

    /// Initial backoff
    #[serde(default, deserialize_with = "duration::deserialize_option")]
    pub backoff_base: Option<Duration>,

    /// Backoff ceiling
    #[serde(default, deserialize_with = "duration::deserialize_option")]
    pub backoff_max: Option<Duration>,
}

/// `logging:` section.
#[derive(Debug, Default, Deserialize)]
pub struct LoggingSection {
    /// Log level
    pub level: Option<String>,

    /// Log format
    pub format: Option<String>,

    /// Log destination
    pub output: Option<String>,
}

impl FileConfig {
    /// Parses configuration from a YAML string.
    ///
    /// An empty or comments-only document yields an all-default config.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a value has the wrong shape.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str::<Option<Self>>(content).map(Option::unwrap_or_default)
    }

    /// Resolves the rate-limit strategy from the structured block or the
    /// deprecated flat field, whichever is set first.
    #[must_use]
    pub fn rate_limit_strategy(&self) -> Option<&str> {
        non_empty(self.client.rate_limit.strategy.as_deref())
            .or_else(|| non_empty(self.client.rate_limit_strategy.as_deref()))
    }
}

/// Returns `value` unless it is absent or empty.
pub(super) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
