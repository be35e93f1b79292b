//! Shared test harness modules for the stowage CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::evaluate::{
    EvaluateConfig, config_from_layers_for_test, load_decision, load_manifest, run_evaluate_with,
};

mod evaluate_unit;
mod helpers;
