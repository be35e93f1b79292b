//! Per-stop snapshots produced while replaying a route.

/// State of the grid after the vehicle leaves a stop.
///
/// `occupancy` and `weights` hold one entry per column, in column order.
///
/// # Examples
/// ```
/// use stowage_core::StopSummary;
///
/// let summary = StopSummary {
///     stop: 1,
///     movements: 3,
///     delivered: 0,
///     requeued: 0,
///     occupancy: vec![2, 1],
///     weights: vec![30, 5],
/// };
/// assert_eq!(summary.total_occupancy(), 3);
/// assert_eq!(summary.total_weight(), 35);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopSummary {
    /// 1-based stop index.
    pub stop: u32,
    /// Items handled at the stop: deliveries, lifts and every placement.
    pub movements: u64,
    /// Items taken off the vehicle.
    pub delivered: usize,
    /// Items lifted into the waiting queue and placed back.
    pub requeued: usize,
    /// Items per column.
    pub occupancy: Vec<usize>,
    /// Aggregate weight per column.
    pub weights: Vec<u64>,
}

impl StopSummary {
    /// Items on board when leaving the stop.
    pub fn total_occupancy(&self) -> usize {
        self.occupancy.iter().sum()
    }

    /// Weight on board when leaving the stop.
    pub fn total_weight(&self) -> u64 {
        self.weights.iter().sum()
    }
}
