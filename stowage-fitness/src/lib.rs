//! Fitness evaluation for stowage plans.
//!
//! A decision vector holds one value in `[0, 1]` per manifest item. The
//! [`FitnessEvaluator`] decodes it into grid columns, replays the route with
//! [`stowage_core::RouteSimulator`] and folds the per-stop summaries into a
//! single integer score:
//!
//! - **Movements** count every load, delivery and re-stow.
//! - **Layout imbalance** sums, over stops, how far each column's item count
//!   strays from the mean.
//! - **Weight imbalance** does the same for column weight and enters the
//!   score through its square root.
//!
//! The evaluator implements [`stowage_core::Objective`], so any optimiser
//! written against that trait can minimise it directly.

#![forbid(unsafe_code)]

mod decode;
mod error;
mod evaluator;
mod imbalance;
mod weights;

pub use decode::{ColumnBins, DecodeError, decode};
pub use error::FitnessError;
pub use evaluator::{Evaluation, FitnessEvaluator};
pub use imbalance::{layout_imbalance, weight_imbalance};
pub use weights::{ScoreWeights, ScoreWeightsError};
