//! Weighting of the score terms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by [`ScoreWeights::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoreWeightsError {
    /// A weight was NaN or infinite.
    #[error("{term} weight must be finite, got {value}")]
    NonFinite {
        /// Name of the offending term.
        term: &'static str,
        /// Supplied weight.
        value: f64,
    },
    /// A weight was zero or negative.
    #[error("{term} weight must be positive, got {value}")]
    NonPositive {
        /// Name of the offending term.
        term: &'static str,
        /// Supplied weight.
        value: f64,
    },
}

/// Multipliers applied to the three score terms.
///
/// The score is `round(movements * movements_weight + layout * layout_weight
/// + sqrt(weight_imbalance) * weight_weight)`. Every multiplier must be
/// finite and positive so the score grows with each term.
///
/// # Examples
/// ```
/// use stowage_fitness::ScoreWeights;
///
/// let weights = ScoreWeights::default();
/// assert_eq!(weights.score(4, 1.0, 30.0), 39);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Multiplier for total handling movements.
    pub movements: f64,
    /// Multiplier for the layout imbalance.
    pub layout: f64,
    /// Multiplier for the square root of the weight imbalance.
    pub weight: f64,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] naming the first weight that is not
    /// finite or not positive.
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        for (term, value) in self.terms() {
            if !value.is_finite() {
                return Err(ScoreWeightsError::NonFinite { term, value });
            }
            if value <= 0.0 {
                return Err(ScoreWeightsError::NonPositive { term, value });
            }
        }
        Ok(self)
    }

    /// Combine the reduced route statistics into an integral score.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the score is a rounded weighted sum of non-negative terms"
    )]
    pub fn score(self, movements: u64, layout_imbalance: f64, weight_imbalance: f64) -> u64 {
        let total = movements as f64 * self.movements
            + layout_imbalance * self.layout
            + weight_imbalance.sqrt() * self.weight;
        total.round() as u64
    }

    const fn terms(self) -> [(&'static str, f64); 3] {
        [
            ("movement", self.movements),
            ("layout", self.layout),
            ("weight", self.weight),
        ]
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            movements: 5.0,
            layout: 3.0,
            weight: 3.0,
        }
    }
}
