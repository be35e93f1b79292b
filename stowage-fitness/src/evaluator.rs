//! Objective function: score one placement decision for a whole route.

use log::debug;
use serde::Serialize;
use stowage_core::{Loading, Manifest, Objective, RouteSimulator, StopSummary};

use crate::{ColumnBins, FitnessError, ScoreWeights, layout_imbalance, weight_imbalance};

/// Breakdown of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Weighted, rounded score. Lower is better.
    pub score: u64,
    /// Items handled across the route.
    pub movements: u64,
    /// Summed deviation of column occupancy from its per-stop mean.
    pub layout_imbalance: f64,
    /// Summed deviation of column weight from its per-stop mean.
    pub weight_imbalance: f64,
    /// Per-stop summaries, first stop first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stops: Vec<StopSummary>,
}

/// Scores candidate placements for a fixed [`Manifest`].
///
/// The evaluator is immutable once built. Every call decodes the decision
/// into its own column assignment and replays the route on a fresh grid, so
/// one evaluator can serve many threads at once.
///
/// # Examples
/// ```
/// use stowage_core::{GridDimensions, Item, Manifest};
/// use stowage_fitness::{FitnessEvaluator, ScoreWeights};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let items = vec![Item::new(1, 1, 2, 10)?, Item::new(2, 1, 3, 20)?];
/// let manifest = Manifest::new(3, GridDimensions::new(2, 2)?, items)?;
/// let evaluator = FitnessEvaluator::new(manifest, ScoreWeights::default())?;
///
/// assert_eq!(evaluator.evaluate(&[0.1, 0.9])?, 39);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    manifest: Manifest,
    weights: ScoreWeights,
    bins: ColumnBins,
    simulator: RouteSimulator,
    pickups: Vec<Vec<usize>>,
}

impl FitnessEvaluator {
    /// Prepare an evaluator for `manifest`.
    ///
    /// Items are grouped by pickup stop once here rather than on every call.
    ///
    /// # Errors
    /// Returns [`FitnessError::Weights`] when `weights` fail validation.
    pub fn new(manifest: Manifest, weights: ScoreWeights) -> Result<Self, FitnessError> {
        let validated = weights.validate()?;
        let dimensions = manifest.dimensions();
        let bins = ColumnBins::new(dimensions.width())?;
        let simulator = RouteSimulator::new(dimensions, manifest.total_stops());
        let pickups = manifest.pickups_by_stop();
        Ok(Self {
            manifest,
            weights: validated,
            bins,
            simulator,
            pickups,
        })
    }

    /// Manifest being scored.
    #[must_use]
    pub const fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Validated score weights.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Score a decision vector.
    ///
    /// # Errors
    /// See [`FitnessEvaluator::evaluate_detailed`].
    pub fn evaluate(&self, decision: &[f64]) -> Result<u64, FitnessError> {
        self.evaluate_detailed(decision)
            .map(|evaluation| evaluation.score)
    }

    /// Score a decision vector and keep the per-stop breakdown.
    ///
    /// # Errors
    /// Returns [`FitnessError::Decode`] when the vector has the wrong length or
    /// holds a value outside `[0, 1]`, and [`FitnessError::Simulation`] when
    /// the grid overflows.
    pub fn evaluate_detailed(&self, decision: &[f64]) -> Result<Evaluation, FitnessError> {
        let columns = self.bins.decode(decision, self.manifest.total_items())?;
        let schedule = self.schedule(&columns);
        let replay = self.simulator.simulate(&schedule)?;

        let movements = replay.total_movements();
        let layout = layout_imbalance(&replay.stops);
        let weight = weight_imbalance(&replay.stops);
        let score = self.weights.score(movements, layout, weight);
        debug!(
            "score {score}: {movements} movements, layout imbalance {layout}, weight imbalance {weight}"
        );

        Ok(Evaluation {
            score,
            movements,
            layout_imbalance: layout,
            weight_imbalance: weight,
            stops: replay.stops,
        })
    }

    /// Loadings per stop, padded with empty stops to the full route.
    fn schedule<'a>(&'a self, columns: &[usize]) -> Vec<Vec<Loading<'a>>> {
        let items = self.manifest.items();
        let stop_count = usize::try_from(self.simulator.stop_count()).unwrap_or(usize::MAX);
        let mut schedule: Vec<Vec<Loading<'a>>> = self
            .pickups
            .iter()
            .map(|positions| {
                positions
                    .iter()
                    .filter_map(|&index| {
                        Some(Loading {
                            item: items.get(index)?,
                            column: *columns.get(index)?,
                        })
                    })
                    .collect()
            })
            .collect();
        schedule.resize_with(stop_count, Vec::new);
        schedule
    }
}

impl Objective for FitnessEvaluator {
    type Error = FitnessError;

    fn dimension(&self) -> usize {
        self.manifest.total_items()
    }

    fn evaluate(&self, decision: &[f64]) -> Result<u64, Self::Error> {
        Self::evaluate(self, decision)
    }
}
