//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use stowage_cli::CliError;

fn main() -> ExitCode {
    match stowage_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("stowage: {err}");
            ExitCode::FAILURE
        }
    }
}
