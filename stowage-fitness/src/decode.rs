//! Decoding continuous decision vectors into column indices.
//!
//! An optimiser proposes one value in `[0, 1]` per item. The interval is cut
//! into `width` equal bins with edges at `k / width`; an item goes to the
//! column whose bin holds its value. The top edge belongs to the last bin, so
//! `1.0` is a valid decision.

use thiserror::Error;

/// Errors raised while decoding a decision vector.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DecodeError {
    /// The vector does not hold one value per item.
    #[error("decision vector has {actual} entries but the manifest lists {expected} items")]
    LengthMismatch {
        /// Items in the manifest.
        expected: usize,
        /// Entries in the decision vector.
        actual: usize,
    },
    /// A value is NaN, infinite or outside `[0, 1]`.
    #[error("decision value {value} at position {index} is outside [0, 1]")]
    InvalidValue {
        /// Position of the offending entry.
        index: usize,
        /// Offending value.
        value: f64,
    },
    /// Bins cannot be built for a grid without columns.
    #[error("grid width must be positive")]
    ZeroWidth,
}

/// Equal-width partition of `[0, 1]`, one bin per grid column.
///
/// # Examples
/// ```
/// use stowage_fitness::ColumnBins;
///
/// let bins = ColumnBins::new(4).expect("non-zero width");
/// assert_eq!(bins.column_for(0.0), Some(0));
/// assert_eq!(bins.column_for(0.25), Some(1));
/// assert_eq!(bins.column_for(1.0), Some(3));
/// assert_eq!(bins.column_for(f64::NAN), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBins {
    width: usize,
    boundaries: Vec<f64>,
}

impl ColumnBins {
    /// Build the bins for a grid `width` columns wide.
    ///
    /// # Errors
    /// Returns [`DecodeError::ZeroWidth`] when `width` is zero.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "bin edges are k / width for grid-sized k"
    )]
    pub fn new(width: usize) -> Result<Self, DecodeError> {
        if width == 0 {
            return Err(DecodeError::ZeroWidth);
        }
        let denominator = width as f64;
        let boundaries = (1..width).map(|k| k as f64 / denominator).collect();
        Ok(Self { width, boundaries })
    }

    /// Number of bins.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Column for a single decision value.
    ///
    /// Counts the inner edges at or below `value`. Returns `None` for values
    /// that are NaN, infinite, negative or above `1.0`; they are never clamped.
    #[must_use]
    pub fn column_for(&self, value: f64) -> Option<usize> {
        (0.0..=1.0)
            .contains(&value)
            .then(|| self.boundaries.partition_point(|edge| *edge <= value))
    }

    /// Decode a whole decision vector.
    ///
    /// # Errors
    /// Returns [`DecodeError::LengthMismatch`] when `decision` does not hold
    /// `item_count` values and [`DecodeError::InvalidValue`] for the first
    /// value rejected by [`ColumnBins::column_for`].
    pub fn decode(&self, decision: &[f64], item_count: usize) -> Result<Vec<usize>, DecodeError> {
        if decision.len() != item_count {
            return Err(DecodeError::LengthMismatch {
                expected: item_count,
                actual: decision.len(),
            });
        }
        decision
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                self.column_for(value)
                    .ok_or(DecodeError::InvalidValue { index, value })
            })
            .collect()
    }
}

/// Decode `decision` for a grid `width` columns wide.
///
/// # Examples
/// ```
/// use stowage_fitness::decode;
///
/// let columns = decode(&[0.1, 0.9], 2, 2).expect("valid decision");
/// assert_eq!(columns, vec![0, 1]);
/// ```
///
/// # Errors
/// Propagates the errors of [`ColumnBins::new`] and [`ColumnBins::decode`].
pub fn decode(
    decision: &[f64],
    item_count: usize,
    width: usize,
) -> Result<Vec<usize>, DecodeError> {
    ColumnBins::new(width)?.decode(decision, item_count)
}
