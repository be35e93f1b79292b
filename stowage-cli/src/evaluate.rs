//! Evaluate command implementation for the stowage CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use stowage_core::Manifest;
use stowage_fitness::{Evaluation, FitnessEvaluator, ScoreWeights};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_DECISION, ARG_LAYOUT_WEIGHT, ARG_MANIFEST, ARG_MOVEMENT_WEIGHT, ARG_WEIGHT_WEIGHT,
    CliError, ENV_DECISION, ENV_MANIFEST, USAGE_DECISION, USAGE_MANIFEST,
};

/// CLI arguments for the `evaluate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score one decision vector against a manifest. The manifest \
                 is a JSON dataset description and the decision vector a JSON \
                 array holding one value in [0, 1] per item. Paths and score \
                 weights can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Score a decision vector against a manifest"
)]
#[ortho_config(prefix = "STOWAGE")]
pub(crate) struct EvaluateArgs {
    /// Path to the JSON manifest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) manifest: Option<Utf8PathBuf>,
    /// Path to a JSON array with one decision value per item.
    #[arg(long = ARG_DECISION, value_name = "path")]
    #[serde(default)]
    pub(crate) decision: Option<Utf8PathBuf>,
    /// Multiplier for handling movements (default 5).
    #[arg(long = ARG_MOVEMENT_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) movement_weight: Option<f64>,
    /// Multiplier for the layout imbalance (default 3).
    #[arg(long = ARG_LAYOUT_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) layout_weight: Option<f64>,
    /// Multiplier for the square root of the weight imbalance (default 3).
    #[arg(long = ARG_WEIGHT_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_weight: Option<f64>,
    /// Include per-stop summaries in the output.
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) trace: bool,
}

impl EvaluateArgs {
    pub(crate) fn into_config(self) -> Result<EvaluateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        EvaluateConfig::try_from(merged)
    }
}

/// Resolved `evaluate` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EvaluateConfig {
    /// Path to the JSON manifest.
    pub(crate) manifest: Utf8PathBuf,
    /// Path to the JSON decision vector.
    pub(crate) decision: Utf8PathBuf,
    /// Validated score weights.
    pub(crate) weights: ScoreWeights,
    /// Whether per-stop summaries are printed.
    pub(crate) trace: bool,
}

impl EvaluateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.manifest, ARG_MANIFEST)?;
        Self::require_existing(&self.decision, ARG_DECISION)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<EvaluateArgs> for EvaluateConfig {
    type Error = CliError;

    fn try_from(args: EvaluateArgs) -> Result<Self, Self::Error> {
        let manifest = args.manifest.ok_or(CliError::MissingArgument {
            field: ARG_MANIFEST,
            usage: USAGE_MANIFEST,
            env: ENV_MANIFEST,
        })?;
        let decision = args.decision.ok_or(CliError::MissingArgument {
            field: ARG_DECISION,
            usage: USAGE_DECISION,
            env: ENV_DECISION,
        })?;

        let defaults = ScoreWeights::default();
        let weights = ScoreWeights {
            movements: args.movement_weight.unwrap_or(defaults.movements),
            layout: args.layout_weight.unwrap_or(defaults.layout),
            weight: args.weight_weight.unwrap_or(defaults.weight),
        }
        .validate()?;

        Ok(Self {
            manifest,
            decision,
            weights,
            trace: args.trace,
        })
    }
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_evaluate_with(args, &mut stdout)
}

pub(crate) fn run_evaluate_with(
    args: EvaluateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_evaluate_config(args)?;
    let evaluation = execute_evaluate(&config)?;
    write_evaluation(writer, &evaluation)
}

fn resolve_evaluate_config(args: EvaluateArgs) -> Result<EvaluateConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_evaluate(config: &EvaluateConfig) -> Result<Evaluation, CliError> {
    let manifest = load_manifest(&config.manifest)?;
    let decision = load_decision(&config.decision)?;
    info!(
        "evaluating {} items over {} stops on a {}x{} grid",
        manifest.total_items(),
        manifest.total_stops(),
        manifest.dimensions().width(),
        manifest.dimensions().height()
    );

    let evaluator = FitnessEvaluator::new(manifest, config.weights).map_err(CliError::Evaluate)?;
    let mut evaluation = evaluator
        .evaluate_detailed(&decision)
        .map_err(CliError::Evaluate)?;
    if !config.trace {
        evaluation.stops.clear();
    }
    Ok(evaluation)
}

/// Loads a JSON-encoded [`Manifest`] from disk.
pub(crate) fn load_manifest(path: &Utf8Path) -> Result<Manifest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_MANIFEST,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseManifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a JSON array of decision values from disk.
pub(crate) fn load_decision(path: &Utf8Path) -> Result<Vec<f64>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_DECISION,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseDecision {
        path: path.to_path_buf(),
        source,
    })
}

fn write_evaluation(writer: &mut dyn Write, evaluation: &Evaluation) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(evaluation).map_err(CliError::SerialiseEvaluation)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<EvaluateConfig, CliError> {
    let merged = EvaluateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    EvaluateConfig::try_from(merged)
}
