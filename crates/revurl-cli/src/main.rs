use revurl_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the XDG state file when possible, stderr otherwise.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("revurl error: {:#}", err);
        std::process::exit(1);
    }
}
