use docmap_core::logging;
use std::process::ExitCode;

mod cli;

use crate::cli::CliCommand;

fn main() -> ExitCode {
    // Initialize logging as early as possible; keep going on stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        if logging::init_logging_stderr().is_ok() {
            tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
        }
    }

    // Parse CLI and dispatch.
    match CliCommand::run_from_args() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("docmap error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
