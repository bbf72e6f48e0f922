//! Per-invocation state shared by every subcommand.
//!
//! [`Session::start`] runs before any handler: it resolves the configuration,
//! applies CLI overrides, and builds the output formatter. Handlers receive the
//! session's fields as plain arguments.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{self, Config, ConfigError, Environment, GlobalOptions};
use crate::output::{Formatter, OutputError};

/// Error type for session startup.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The output formatter could not be built.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Resolved configuration and formatter for one invocation.
#[derive(Debug, Clone)]
pub struct Session {
    /// Configuration after file discovery and overrides
    pub config: Config,

    /// Formatter chosen by `--output`
    pub formatter: Formatter,

    /// Config file that was loaded, if any
    pub source: Option<PathBuf>,
}

impl Session {
    /// Resolves configuration and formatter from the global options.
    ///
    /// Config search paths are relative to `base_dir`; an empty `base_dir`
    /// means the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file fails to load or `--output` names an
    /// unknown format.
    pub fn start(
        options: &GlobalOptions,
        env: &impl Environment,
        base_dir: &Path,
    ) -> Result<Self, SessionError> {
        let resolved = config::resolve(options, env, base_dir)?;
        let formatter = Formatter::new(&options.output)?;

        Ok(Self {
            config: resolved.config,
            formatter,
            source: resolved.source,
        })
    }

    /// Writes the `using config <path>` line when a config file was loaded.
    ///
    /// The binary passes stderr so the line never mixes with formatted output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn announce_source<W: Write>(&self, err: &mut W) -> io::Result<()> {
        match &self.source {
            Some(path) => writeln!(err, "using config {}", path.display()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tempfile::tempdir;

    use super::*;

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    fn options(output: &str) -> GlobalOptions {
        GlobalOptions {
            output: output.to_string(),
            ..GlobalOptions::default()
        }
    }

    #[test]
    fn start_builds_formatter_from_output_flag() {
        let dir = tempdir().unwrap();
        let session = Session::start(&options("table"), &no_env(), dir.path()).unwrap();

        assert_eq!(session.formatter, Formatter::Table);
        assert!(session.source.is_none());
    }

    #[test]
    fn start_rejects_unknown_output_format() {
        let dir = tempdir().unwrap();
        let result = Session::start(&options("xml"), &no_env(), dir.path());

        assert!(matches!(
            result,
            Err(SessionError::Output(OutputError::UnknownFormat(ref f))) if f == "xml"
        ));
    }

    #[test]
    fn start_reports_missing_explicit_config() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no/such/file.yaml");
        let opts = GlobalOptions {
            config: Some(missing.clone()),
            ..options("json")
        };

        let err = Session::start(&opts, &no_env(), dir.path()).unwrap_err();

        assert!(matches!(err, SessionError::Config(ConfigError::FileRead { .. })));
        assert!(err.to_string().contains(&missing.display().to_string()));
    }

    #[test]
    fn start_records_discovered_source() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("discord.yaml"), "discord:\n  application_id: app\n")
            .unwrap();

        let session = Session::start(&options("json"), &no_env(), dir.path()).unwrap();

        assert_eq!(session.source, Some(dir.path().join("discord.yaml")));
        assert_eq!(session.config.discord.application_id, "app");
    }

    #[test]
    fn announce_source_names_loaded_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("discord.yaml"), "{}\n").unwrap();
        let session = Session::start(&options("json"), &no_env(), dir.path()).unwrap();

        let mut banner = Vec::new();
        session.announce_source(&mut banner).unwrap();

        let expected = format!("using config {}\n", dir.path().join("discord.yaml").display());
        assert_eq!(String::from_utf8(banner).unwrap(), expected);
    }

    #[test]
    fn announce_source_is_silent_without_file() {
        let dir = tempdir().unwrap();
        let session = Session::start(&options("json"), &no_env(), dir.path()).unwrap();

        let mut banner = Vec::new();
        session.announce_source(&mut banner).unwrap();

        assert!(banner.is_empty());
    }

    #[test]
    fn banner_stays_out_of_command_output() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("discord.yaml"), "discord:\n  application_id: app\n")
            .unwrap();
        let session = Session::start(&options("json"), &no_env(), dir.path()).unwrap();

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        session.announce_source(&mut stderr).unwrap();
        crate::commands::execute(
            crate::config::Command::Guild,
            &session.config,
            &session.formatter,
            &mut stdout,
        )
        .unwrap();

        let stdout = String::from_utf8(stdout).unwrap();
        assert!(!stdout.contains("using config"));
        assert!(String::from_utf8(stderr).unwrap().starts_with("using config "));
    }
}
