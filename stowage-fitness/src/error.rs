//! Error type raised while scoring a decision vector.

use stowage_core::SimulationError;
use thiserror::Error;

use crate::{DecodeError, ScoreWeightsError};

/// Errors raised by [`FitnessEvaluator`](crate::FitnessEvaluator).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitnessError {
    /// The decision vector could not be decoded.
    #[error("failed to decode decision vector: {0}")]
    Decode(#[from] DecodeError),
    /// Replaying the route failed.
    #[error("failed to simulate route: {0}")]
    Simulation(#[from] SimulationError),
    /// The score weights were rejected.
    #[error("invalid score weights: {0}")]
    Weights(#[from] ScoreWeightsError),
}
