//! Environment access and `$VAR` interpolation.
//!
//! This module provides an [`Environment`] trait so configuration code can be
//! driven by a fixed map in tests while reading the real process environment
//! in production.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches, in priority order: `${NAME}` (anything up to the closing brace),
/// an unclosed `${`, a single-character special (`$$`, `$1`, `$?`, ...), or
/// `$NAME`.
static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]*)\}|\$\{|\$([*#$@!?0-9-])|\$([A-Za-z0-9_]+)")
        .expect("variable pattern is valid")
});

/// Source of environment variables.
pub trait Environment {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns the value of `key`, treating an empty value as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }

    /// Returns the non-empty value of `key`, or `default`.
    fn var_or(&self, key: &str, default: &str) -> String {
        self.non_empty(key).unwrap_or_else(|| default.to_string())
    }
}

/// Production environment backed by [`std::env::var`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Replaces `${NAME}` and `$NAME` references in `input`.
///
/// Unset variables expand to the empty string. Shell specials (`$$`, `$0`-`$9`,
/// `$*`, `$#`, `$@`, `$!`, `$?`, `$-`) are looked up as single-character names,
/// so they normally vanish. An unclosed `${` and an empty `${}` are dropped.
/// A `$` that does not start a reference is kept as-is.
#[must_use]
pub fn expand_vars(input: &str, env: &impl Environment) -> String {
    VAR_PATTERN
        .replace_all(input, |caps: &Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            if name.is_empty() {
                return String::new();
            }
            env.var(name).unwrap_or_default()
        })
        .into_owned()
}
