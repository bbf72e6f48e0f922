//! Display projections of the resolved configuration.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::Config;

/// Output of `guild`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationView<'a> {
    /// Configured application ID
    pub application_id: &'a str,
}

/// Output of `webhook`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultWebhookView<'a> {
    /// URL under the `"default"` label, empty when missing
    pub default_webhook: &'a str,
}

/// Output of `message`. The token itself is never printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenView {
    /// Length of the bot token in bytes
    pub token_length: usize,
}

/// Output of `interaction`. Exactly one field is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionView<'a> {
    /// URL under the `"default"` label, empty when missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<&'a str>,

    /// Set when no webhook is configured at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

const NO_WEBHOOK: &str = "no webhook configured";

pub(super) fn guild(config: &Config) -> ApplicationView<'_> {
    ApplicationView {
        application_id: &config.discord.application_id,
    }
}

pub(super) fn webhook(config: &Config) -> DefaultWebhookView<'_> {
    DefaultWebhookView {
        default_webhook: config.discord.default_webhook().unwrap_or_default(),
    }
}

pub(super) fn message(config: &Config) -> TokenView {
    TokenView {
        token_length: config.discord.bot_token.len(),
    }
}

pub(super) fn channel(config: &Config) -> &BTreeMap<String, String> {
    &config.discord.webhooks
}

pub(super) fn interaction(config: &Config) -> InteractionView<'_> {
    if config.discord.webhooks.is_empty() {
        InteractionView {
            webhook: None,
            error: Some(NO_WEBHOOK),
        }
    } else {
        InteractionView {
            webhook: Some(config.discord.default_webhook().unwrap_or_default()),
            error: None,
        }
    }
}
