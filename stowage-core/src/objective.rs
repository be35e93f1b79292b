//! Seam between the simulator and an external optimiser.

/// A scalar objective over a continuous decision space.
///
/// Optimisers draw candidate vectors of length [`Objective::dimension`] with
/// every entry inside [`Objective::bounds`] and minimise the returned score.
/// Implementations must be safe to call from many threads at once.
///
/// # Examples
/// ```
/// use stowage_core::Objective;
///
/// struct Sum;
///
/// impl Objective for Sum {
///     type Error = std::convert::Infallible;
///
///     fn dimension(&self) -> usize {
///         2
///     }
///
///     fn evaluate(&self, decision: &[f64]) -> Result<u64, Self::Error> {
///         Ok(decision.iter().filter(|v| **v > 0.5).count() as u64)
///     }
/// }
///
/// assert_eq!(Sum.bounds(), (0.0, 1.0));
/// assert_eq!(Sum.evaluate(&[0.2, 0.9]), Ok(1));
/// ```
pub trait Objective: Send + Sync {
    /// Failure raised for a malformed decision vector.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Number of entries in a decision vector.
    fn dimension(&self) -> usize;

    /// Inclusive lower and upper bound shared by every entry.
    fn bounds(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    /// Score a decision vector. Lower is better.
    fn evaluate(&self, decision: &[f64]) -> Result<u64, Self::Error>;
}
