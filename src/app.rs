//! Application startup and utilities.
//!
//! This module contains exit codes and tracing setup that support the main
//! entry point.

use discord_cli::config::LoggingSettings;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Any startup or command error (exit code 1).
    pub const FAILURE: ExitCode = ExitCode::FAILURE;
}

/// Maps a configured level name to a tracing level; unknown names are `INFO`.
pub fn parse_level(name: &str) -> Level {
    match name.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Sets up the tracing subscriber from the resolved logging settings.
///
/// `RUST_LOG` still takes precedence over the configured level.
pub fn setup_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::builder()
        .with_default_directive(parse_level(&logging.level).into())
        .from_env_lossy();

    let to_stdout = logging.output.eq_ignore_ascii_case("stdout");
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match (logging.format.eq_ignore_ascii_case("json"), to_stdout) {
        (true, true) => builder.json().with_writer(std::io::stdout).init(),
        (true, false) => builder.json().with_writer(std::io::stderr).init(),
        (false, true) => builder.with_writer(std::io::stdout).init(),
        (false, false) => builder.with_writer(std::io::stderr).init(),
    }
}
