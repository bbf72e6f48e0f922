//! Discord CLI
//!
//! Entry point for the `discord` binary.

use std::path::Path;
use std::process::ExitCode;

use discord_cli::commands;
use discord_cli::config::{Cli, ProcessEnv};
use discord_cli::session::Session;

mod app;

use app::{exit_code, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(&e),
    };

    let Some(command) = cli.command else {
        print!("{}", Cli::help_text());
        return exit_code::SUCCESS;
    };

    let session = match Session::start(&cli.options, &ProcessEnv, Path::new("")) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {e}");
            return exit_code::FAILURE;
        }
    };

    setup_tracing(&session.config.logging);
    if let Err(e) = session.announce_source(&mut std::io::stderr().lock()) {
        tracing::warn!("Failed to report config source: {e}");
    }
    tracing::debug!("{}", session.config);

    let mut stdout = std::io::stdout().lock();
    match commands::execute(command, &session.config, &session.formatter, &mut stdout) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::FAILURE
        }
    }
}

/// Prints a clap error or `--help`/`--version` output and maps it to an exit code.
#[cfg(not(tarpaulin_include))]
fn handle_parse_error(error: &clap::Error) -> ExitCode {
    if error.print().is_err() || Cli::is_usage_error(error) {
        exit_code::FAILURE
    } else {
        exit_code::SUCCESS
    }
}
