//! Resolved configuration model.
//!
//! A [`Config`] is built once per invocation, either from a YAML file
//! ([`Config::load`]) or from the environment ([`Config::from_env`]). Every
//! field with a documented default is populated after construction.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use super::defaults;
use super::env::{Environment, expand_vars};
use super::error::ConfigError;
use super::file::{FileConfig, non_empty};

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Discord credentials and webhooks
    pub discord: DiscordSettings,

    /// HTTP client tuning
    pub client: ClientSettings,

    /// Logging settings
    pub logging: LoggingSettings,
}

/// Discord credentials and webhook targets.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DiscordSettings {
    /// Bot token (secret, may be empty)
    pub bot_token: String,

    /// Application ID
    pub application_id: String,

    /// Webhook URLs keyed by label
    pub webhooks: BTreeMap<String, String>,
}

impl DiscordSettings {
    /// Returns the URL stored under the `"default"` label, if any.
    #[must_use]
    pub fn default_webhook(&self) -> Option<&str> {
        self.webhooks.get(defaults::WEBHOOK_KEY).map(String::as_str)
    }
}

impl fmt::Debug for DiscordSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordSettings")
            .field("bot_token", &redact(&self.bot_token))
            .field("application_id", &self.application_id)
            .field("webhooks", &self.webhooks)
            .finish()
    }
}

/// HTTP client tuning. Stored and displayed only; nothing issues requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Request timeout
    pub timeout: Duration,

    /// Retry count
    pub retries: u32,

    /// Client-side rate limiting
    pub rate_limit: RateLimitSettings,
}

/// Client-side rate-limit settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitSettings {
    /// Strategy name, free-form (`adaptive`, `proactive`, `reactive`, ...)
    pub strategy: String,

    /// Initial backoff
    pub backoff_base: Duration,

    /// Backoff ceiling
    pub backoff_max: Duration,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Level name
    pub level: String,

    /// `json` or text
    pub format: String,

    /// Destination; empty when a config file leaves it unset
    pub output: String,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let webhooks: Vec<&str> = self.discord.webhooks.keys().map(String::as_str).collect();

        write!(
            f,
            "Config {{ application_id: {}, token_set: {}, webhooks: [{}], timeout: {}, \
             retries: {}, rate_limit: {}/{}..{}, logging: {}/{} }}",
            self.discord.application_id,
            !self.discord.bot_token.is_empty(),
            webhooks.join(", "),
            humantime::format_duration(self.client.timeout),
            self.client.retries,
            self.client.rate_limit.strategy,
            humantime::format_duration(self.client.rate_limit.backoff_base),
            humantime::format_duration(self.client.rate_limit.backoff_max),
            self.logging.level,
            self.logging.format,
        )
    }
}

impl Config {
    /// Loads configuration from a YAML file.
    ///
    /// `$VAR` and `${VAR}` references are expanded across the raw text before
    /// parsing, then defaults are applied to every unset field.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path, env: &impl Environment) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let expanded = expand_vars(&content, env);
        let file = FileConfig::parse(&expanded).map_err(|e| ConfigError::YamlParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self::from_file(file, env))
    }

    /// Applies defaults to a parsed config file.
    ///
    /// The deprecated `client.rate_limit_strategy` is folded into
    /// `client.rate_limit.strategy` here and nowhere else.
    #[must_use]
    pub fn from_file(file: FileConfig, env: &impl Environment) -> Self {
        let strategy = file.rate_limit_strategy().map_or_else(
            || env.var_or(defaults::env::RATE_LIMIT_STRATEGY, defaults::RATE_LIMIT_STRATEGY),
            str::to_string,
        );

        let FileConfig {
            discord,
            client,
            logging,
        } = file;

        Self {
            discord: DiscordSettings {
                bot_token: discord.bot_token.unwrap_or_default(),
                application_id: discord.application_id.unwrap_or_default(),
                webhooks: discord
                    .webhooks
                    .into_iter()
                    .map(|(label, url)| (label, url.unwrap_or_default()))
                    .collect(),
            },
            client: ClientSettings {
                timeout: non_zero(client.timeout).unwrap_or(defaults::timeout()),
                retries: client
                    .retries
                    .filter(|&n| n != 0)
                    .unwrap_or(defaults::RETRIES),
                rate_limit: RateLimitSettings {
                    strategy,
                    backoff_base: non_zero(client.rate_limit.backoff_base)
                        .unwrap_or(defaults::backoff_base()),
                    backoff_max: non_zero(client.rate_limit.backoff_max)
                        .unwrap_or(defaults::backoff_max()),
                },
            },
            logging: LoggingSettings {
                level: or_default(logging.level.as_deref(), defaults::LOG_LEVEL),
                format: or_default(logging.format.as_deref(), defaults::LOG_FORMAT),
                output: logging.output.unwrap_or_default(),
            },
        }
    }

    /// Builds a configuration purely from environment variables.
    ///
    /// Used when no config file is found. Never fails; unset credentials are
    /// left empty.
    #[must_use]
    pub fn from_env(env: &impl Environment) -> Self {
        let mut webhooks = BTreeMap::new();
        webhooks.insert(
            defaults::WEBHOOK_KEY.to_string(),
            env.var(defaults::env::WEBHOOK).unwrap_or_default(),
        );

        Self {
            discord: DiscordSettings {
                bot_token: env.var(defaults::env::BOT_TOKEN).unwrap_or_default(),
                application_id: env.var(defaults::env::APPLICATION_ID).unwrap_or_default(),
                webhooks,
            },
            client: ClientSettings {
                timeout: defaults::timeout(),
                retries: defaults::RETRIES,
                rate_limit: RateLimitSettings {
                    strategy: env.var_or(
                        defaults::env::RATE_LIMIT_STRATEGY,
                        defaults::RATE_LIMIT_STRATEGY,
                    ),
                    backoff_base: defaults::backoff_base(),
                    backoff_max: defaults::backoff_max(),
                },
            },
            logging: LoggingSettings {
                level: env.var_or(defaults::env::LOG_LEVEL, defaults::LOG_LEVEL),
                format: defaults::LOG_FORMAT.to_string(),
                output: defaults::LOG_OUTPUT.to_string(),
            },
        }
    }
}

fn non_zero(value: Option<Duration>) -> Option<Duration> {
    value.filter(|d| !d.is_zero())
}

fn or_default(value: Option<&str>, default: &str) -> String {
    non_empty(value).unwrap_or(default).to_string()
}

const fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "<redacted>" }
}
