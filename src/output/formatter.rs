//! Formatter selection and rendering.

use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use super::OutputError;

/// Gutter between the key and value columns of a table.
const TABLE_PADDING: usize = 2;

/// Renders serializable values in the format chosen by `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    /// Pretty-printed JSON
    Json,
    /// Aligned key/value rows
    Table,
    /// YAML document
    Yaml,
}

impl FromStr for Formatter {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            "yaml" => Ok(Self::Yaml),
            _ => Err(OutputError::UnknownFormat(s.to_string())),
        }
    }
}

impl Formatter {
    /// Builds the formatter named by `kind` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::UnknownFormat`] for anything other than
    /// `json`, `table`, or `yaml`.
    pub fn new(kind: &str) -> Result<Self, OutputError> {
        kind.parse()
    }

    /// Renders `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be serialized.
    pub fn format<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, OutputError> {
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(value)?),
            Self::Yaml => Ok(serde_yaml::to_string(value)?),
            Self::Table => Ok(render_table(&serde_json::to_value(value)?)),
        }
    }
}

fn render_table(value: &Value) -> String {
    let Value::Object(rows) = value else {
        return format!("{}\n", cell(value));
    };

    let width = rows.keys().map(|k| k.chars().count()).max().unwrap_or(0) + TABLE_PADDING;

    rows.iter()
        .map(|(key, val)| format!("{key:<width$}{}\n", cell(val)))
        .collect()
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
