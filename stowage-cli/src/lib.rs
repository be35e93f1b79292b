//! Command-line interface for scoring stowage decisions.
//!
//! The `evaluate` command reads a manifest and a decision vector, both as
//! JSON, and prints the score breakdown produced by
//! [`stowage_fitness::FitnessEvaluator`]. Options merge from configuration
//! files, `STOWAGE_` environment variables and flags.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use log::debug;
use tracing_subscriber::EnvFilter;

mod error;
mod evaluate;
mod fs;

pub use error::CliError;
use evaluate::{EvaluateArgs, run_evaluate};

pub(crate) const ARG_MANIFEST: &str = "manifest";
pub(crate) const ARG_DECISION: &str = "decision";
pub(crate) const ARG_MOVEMENT_WEIGHT: &str = "movement-weight";
pub(crate) const ARG_LAYOUT_WEIGHT: &str = "layout-weight";
pub(crate) const ARG_WEIGHT_WEIGHT: &str = "weight-weight";
pub(crate) const USAGE_MANIFEST: &str = "a manifest path as the first argument";
pub(crate) const USAGE_DECISION: &str = "--decision <path>";
pub(crate) const ENV_MANIFEST: &str = "STOWAGE_CMDS_EVALUATE_MANIFEST";
pub(crate) const ENV_DECISION: &str = "STOWAGE_CMDS_EVALUATE_DECISION";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the stowage CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, configuration cannot be
/// merged, inputs cannot be read or the evaluation fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging();
    match cli.command {
        Command::Evaluate(args) => run_evaluate(args),
    }
}

/// Route `log` records to stderr, filtered by `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        debug!("a global logger was already installed");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "stowage",
    about = "Score stowage plans for a multi-stop delivery route",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a decision vector against a manifest.
    Evaluate(EvaluateArgs),
}

#[cfg(test)]
mod tests;
