use unidic_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Logging must never stop the CLI from running.
    if let Err(e) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("log file unavailable, logging to stderr: {:#}", e);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("unidic error: {:#}", err);
        std::process::exit(1);
    }
}
