//! Serde helpers for duration fields in the config file.

use std::time::Duration;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Seconds(u64),
    Text(String),
}

/// Deserializes an optional duration.
///
/// Accepts humantime strings (`"30s"`, `"1m30s"`, `"500ms"`) or a bare
/// integer number of seconds. `null` and the empty string both mean unset.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDuration>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawDuration::Seconds(secs)) => Ok(Some(Duration::from_secs(secs))),
        Some(RawDuration::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            humantime::parse_duration(text)
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid duration '{text}': {e}")))
        }
    }
}
