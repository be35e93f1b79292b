//! Reductions of per-stop summaries into balance statistics.

use stowage_core::StopSummary;

/// Sum over stops of the absolute deviation of column occupancy from its mean.
///
/// Zero when every stop leaves the same number of items in each column.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "column occupancy is bounded by the grid height"
)]
pub fn layout_imbalance(stops: &[StopSummary]) -> f64 {
    stops
        .iter()
        .map(|summary| {
            let values: Vec<f64> = summary.occupancy.iter().map(|&n| n as f64).collect();
            absolute_deviation(&values)
        })
        .sum()
}

/// Sum over stops of the absolute deviation of column weight from its mean.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "column weights stay far below 2^53"
)]
pub fn weight_imbalance(stops: &[StopSummary]) -> f64 {
    stops
        .iter()
        .map(|summary| {
            let values: Vec<f64> = summary.weights.iter().map(|&w| w as f64).collect();
            absolute_deviation(&values)
        })
        .sum()
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "deviation from the mean is a floating-point reduction"
)]
fn absolute_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|value| (value - mean).abs()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn summary(occupancy: Vec<usize>, weights: Vec<u64>) -> StopSummary {
        StopSummary {
            stop: 1,
            movements: 0,
            delivered: 0,
            requeued: 0,
            occupancy,
            weights,
        }
    }

    #[rstest]
    #[case(&[], 0.0)]
    #[case(&[3.0], 0.0)]
    #[case(&[2.0, 2.0, 2.0], 0.0)]
    #[case(&[0.0, 1.0], 1.0)]
    #[case(&[10.0, 20.0], 10.0)]
    #[case(&[0.0, 0.0, 3.0], 4.0)]
    fn deviation_is_measured_from_the_mean(#[case] values: &[f64], #[case] expected: f64) {
        assert_eq!(absolute_deviation(values), expected);
    }

    #[rstest]
    fn imbalance_sums_over_stops() {
        let stops = [
            summary(vec![1, 1], vec![10, 20]),
            summary(vec![0, 1], vec![0, 20]),
            summary(vec![0, 0], vec![0, 0]),
        ];
        assert_eq!(layout_imbalance(&stops), 1.0);
        assert_eq!(weight_imbalance(&stops), 30.0);
    }

    #[rstest]
    fn single_column_is_always_balanced() {
        let stops = [summary(vec![4], vec![90]), summary(vec![1], vec![3])];
        assert_eq!(layout_imbalance(&stops), 0.0);
        assert_eq!(weight_imbalance(&stops), 0.0);
    }
}
