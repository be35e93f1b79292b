//! Error types emitted by the stowage CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use stowage_fitness::{FitnessError, ScoreWeightsError};
use thiserror::Error;

/// Errors emitted by the stowage CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass {usage} or set {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// How the value is given on the command line.
        usage: &'static str,
        /// Environment variable that may supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Score weights supplied through configuration were rejected.
    #[error("invalid score weights: {0}")]
    InvalidWeights(#[from] ScoreWeightsError),
    /// Opening an input file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        /// Option naming the path.
        field: &'static str,
        /// Path that was opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The manifest JSON could not be decoded or failed validation.
    #[error("failed to parse manifest JSON at {path:?}: {source}")]
    ParseManifest {
        /// Manifest path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The decision vector JSON could not be decoded.
    #[error("failed to parse decision vector JSON at {path:?}: {source}")]
    ParseDecision {
        /// Decision vector path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The evaluator rejected the inputs.
    #[error("evaluation failed: {0}")]
    Evaluate(#[source] FitnessError),
    /// Serialising the evaluation failed.
    #[error("failed to serialise evaluation: {0}")]
    SerialiseEvaluation(#[source] serde_json::Error),
    /// Writing the evaluation failed.
    #[error("failed to write evaluation output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
