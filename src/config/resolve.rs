//! Config file discovery and CLI overrides.

use std::path::{Path, PathBuf};

use super::cli::GlobalOptions;
use super::defaults;
use super::env::Environment;
use super::error::ConfigError;
use super::settings::Config;

/// Configuration after file discovery and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The configuration handlers read
    pub config: Config,

    /// The file it came from, `None` when built from the environment
    pub source: Option<PathBuf>,
}

/// Resolves the configuration for one invocation.
///
/// Order: explicit non-empty `--config`, then the first existing file from
/// [`defaults::SEARCH_PATHS`] under `base_dir`, then [`Config::from_env`].
/// `--token` and `--webhook` are applied last.
///
/// # Errors
///
/// Returns an error if the explicit file, or the first discovered file,
/// cannot be read or parsed.
pub fn resolve(
    options: &GlobalOptions,
    env: &impl Environment,
    base_dir: &Path,
) -> Result<Resolved, ConfigError> {
    let source = options
        .config_path()
        .map(Path::to_path_buf)
        .or_else(|| locate_config(base_dir));

    let mut config = match source {
        Some(ref path) => Config::load(path, env)?,
        None => Config::from_env(env),
    };

    apply_overrides(&mut config, options);

    Ok(Resolved { config, source })
}

/// Returns the first search path under `base_dir` that exists.
#[must_use]
pub fn locate_config(base_dir: &Path) -> Option<PathBuf> {
    search_paths(base_dir).find(|path| path.exists())
}

/// Yields the search paths under `base_dir`, in search order.
///
/// An empty `base_dir` is the working directory; the paths stay relative, so
/// `discord.yaml` is reported as `discord.yaml`.
pub fn search_paths(base_dir: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    defaults::SEARCH_PATHS
        .iter()
        .map(move |candidate| base_dir.join(candidate))
}

/// Applies `--token` and `--webhook` to a loaded configuration.
pub fn apply_overrides(config: &mut Config, options: &GlobalOptions) {
    if let Some(token) = options.token_override() {
        config.discord.bot_token = token.to_string();
    }

    if let Some(webhook) = options.webhook_override() {
        config
            .discord
            .webhooks
            .insert(defaults::WEBHOOK_KEY.to_string(), webhook.to_string());
    }
}
