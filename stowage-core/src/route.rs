//! Replay a whole route stop by stop.

use log::debug;
use thiserror::Error;

use crate::{GridDimensions, GridError, Loading, StopSummary, StowageGrid};

/// Errors returned by [`RouteSimulator::simulate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The schedule does not provide one loading list per stop.
    #[error("schedule covers {actual} stops but the route has {expected}")]
    ScheduleLength {
        /// Stops on the route.
        expected: usize,
        /// Entries in the supplied schedule.
        actual: usize,
    },
    /// The grid rejected a placement.
    #[error("stop {stop} failed: {source}")]
    Stop {
        /// Stop being processed.
        stop: u32,
        /// Underlying grid failure.
        #[source]
        source: GridError,
    },
}

/// Ordered per-stop summaries of one replayed route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteReplay {
    /// One summary per stop, first stop first.
    pub stops: Vec<StopSummary>,
}

impl RouteReplay {
    /// Movements across every stop.
    pub fn total_movements(&self) -> u64 {
        self.stops.iter().map(|summary| summary.movements).sum()
    }

    /// Deliveries across every stop.
    pub fn total_delivered(&self) -> usize {
        self.stops.iter().map(|summary| summary.delivered).sum()
    }
}

/// Drives a fresh [`StowageGrid`] through stops `1..=stop_count`.
///
/// # Examples
/// ```
/// use stowage_core::{GridDimensions, Item, Loading, RouteSimulator};
///
/// let item = Item::new(1, 1, 2, 10).expect("valid item");
/// let dims = GridDimensions::new(1, 1).expect("valid dimensions");
/// let simulator = RouteSimulator::new(dims, 2);
/// let schedule = vec![vec![Loading { item: &item, column: 0 }], Vec::new()];
///
/// let replay = simulator.simulate(&schedule).expect("simulation succeeds");
/// assert_eq!(replay.stops.len(), 2);
/// assert_eq!(replay.total_movements(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSimulator {
    dimensions: GridDimensions,
    stop_count: u32,
}

impl RouteSimulator {
    /// Construct a simulator for a route of `stop_count` stops.
    pub const fn new(dimensions: GridDimensions, stop_count: u32) -> Self {
        Self {
            dimensions,
            stop_count,
        }
    }

    /// Grid dimensions used for every replay.
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Stops on the route.
    pub const fn stop_count(&self) -> u32 {
        self.stop_count
    }

    /// Replay the route.
    ///
    /// `schedule[s - 1]` lists the items picked up at stop `s` in loading
    /// order, each with its requested column. Stops run in increasing order
    /// against a grid that lives only for this call.
    pub fn simulate<'a>(
        &self,
        schedule: &[Vec<Loading<'a>>],
    ) -> Result<RouteReplay, SimulationError> {
        let expected = usize::try_from(self.stop_count).unwrap_or(usize::MAX);
        if schedule.len() != expected {
            return Err(SimulationError::ScheduleLength {
                expected,
                actual: schedule.len(),
            });
        }

        let mut grid = StowageGrid::new(self.dimensions);
        let mut replay = RouteReplay {
            stops: Vec::with_capacity(schedule.len()),
        };
        for (stop, incoming) in (1..=self.stop_count).zip(schedule) {
            let summary = grid
                .run_stop(stop, incoming)
                .map_err(|source| SimulationError::Stop { stop, source })?;
            replay.stops.push(summary);
        }

        debug!(
            "replayed {} stops: {} movements, {} delivered, {} left on board",
            self.stop_count,
            replay.total_movements(),
            replay.total_delivered(),
            grid.total_occupancy()
        );
        Ok(replay)
    }
}
