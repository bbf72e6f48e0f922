//! Tests for YAML configuration parsing.

use std::time::Duration;

use super::file::FileConfig;

mod parsing {
    use super::*;

    #[test]
    fn parse_discord_section() {
        let yaml = r"
discord:
  bot_token: token-123
  application_id: '987654321'
  webhooks:
    default: https://discord.com/api/webhooks/1/a
    alerts: https://discord.com/api/webhooks/2/b
";

        let config = FileConfig::parse(yaml).unwrap();
        let discord = &config.discord;

        assert_eq!(discord.bot_token.as_deref(), Some("token-123"));
        assert_eq!(discord.application_id.as_deref(), Some("987654321"));
        assert_eq!(discord.webhooks.len(), 2);
        assert_eq!(
            discord.webhooks.get("alerts").cloned().flatten().as_deref(),
            Some("https://discord.com/api/webhooks/2/b")
        );
    }

    #[test]
    fn parse_client_section() {
        let yaml = r"
client:
  timeout: 5s
  retries: 7
  rate_limit:
    strategy: reactive
    backoff_base: 250ms
    backoff_max: 1m30s
";

        let config = FileConfig::parse(yaml).unwrap();
        let client = &config.client;

        assert_eq!(client.timeout, Some(Duration::from_secs(5)));
        assert_eq!(client.retries, Some(7));
        assert_eq!(client.rate_limit.strategy.as_deref(), Some("reactive"));
        assert_eq!(client.rate_limit.backoff_base, Some(Duration::from_millis(250)));
        assert_eq!(client.rate_limit.backoff_max, Some(Duration::from_secs(90)));
    }

    #[test]
    fn parse_logging_section() {
        let yaml = r"
logging:
  level: debug
  format: text
  output: stdout
";

        let config = FileConfig::parse(yaml).unwrap();

        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.format.as_deref(), Some("text"));
        assert_eq!(config.logging.output.as_deref(), Some("stdout"));
    }

    #[test]
    fn parse_comments_only_document() {
        let config = FileConfig::parse("# nothing configured yet\n").unwrap();

        assert!(config.discord.bot_token.is_none());
        assert!(config.client.timeout.is_none());
        assert!(config.discord.webhooks.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let yaml = r"
discord:
  bot_token: t
  shard_count: 4
gateway:
  intents: 513
";

        let config = FileConfig::parse(yaml).unwrap();

        assert_eq!(config.discord.bot_token.as_deref(), Some("t"));
    }
}

mod nulls {
    use super::*;

    #[test]
    fn null_values_read_as_unset() {
        let yaml = r"
discord:
  bot_token:
  application_id: ~
  webhooks:
    default:
client:
  timeout:
logging:
";

        let config = FileConfig::parse(yaml).unwrap();

        assert!(config.discord.bot_token.is_none());
        assert!(config.discord.application_id.is_none());
        assert_eq!(config.discord.webhooks.get("default"), Some(&None));
        assert!(config.client.timeout.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn null_sections_read_as_empty() {
        let yaml = r"
discord:
client:
  rate_limit:
";

        let config = FileConfig::parse(yaml).unwrap();

        assert!(config.discord.webhooks.is_empty());
        assert!(config.client.rate_limit.strategy.is_none());
    }
}

mod durations {
    use super::*;

    #[test]
    fn integer_is_seconds() {
        let config = FileConfig::parse("client:\n  timeout: 45\n").unwrap();

        assert_eq!(config.client.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn empty_string_is_unset() {
        let config = FileConfig::parse("client:\n  timeout: ''\n").unwrap();

        assert!(config.client.timeout.is_none());
    }

    #[test]
    fn invalid_duration_is_parse_error() {
        let err = FileConfig::parse("client:\n  timeout: soon\n").unwrap_err();

        assert!(err.to_string().contains("invalid duration 'soon'"), "{err}");
    }

    #[test]
    fn negative_retries_is_parse_error() {
        assert!(FileConfig::parse("client:\n  retries: -1\n").is_err());
    }
}

mod rate_limit_strategy {
    use super::*;

    #[test]
    fn structured_strategy_wins_over_legacy() {
        let yaml = r"
client:
  rate_limit_strategy: proactive
  rate_limit:
    strategy: reactive
";

        let config = FileConfig::parse(yaml).unwrap();

        assert_eq!(config.rate_limit_strategy(), Some("reactive"));
    }

    #[test]
    fn legacy_strategy_used_when_structured_empty() {
        let yaml = r"
client:
  rate_limit_strategy: proactive
  rate_limit:
    strategy: ''
";

        let config = FileConfig::parse(yaml).unwrap();

        assert_eq!(config.rate_limit_strategy(), Some("proactive"));
    }

    #[test]
    fn no_strategy_in_file() {
        let config = FileConfig::parse("client:\n  retries: 2\n").unwrap();

        assert!(config.rate_limit_strategy().is_none());
    }
}

mod malformed {
    use super::*;

    #[test]
    fn wrong_shape_is_error() {
        assert!(FileConfig::parse("discord: just-a-string\n").is_err());
    }

    #[test]
    fn invalid_yaml_is_error() {
        assert!(FileConfig::parse("discord:\n  bot_token: [unclosed\n").is_err());
    }
}
