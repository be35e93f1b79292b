//! The stowage grid: a row of slots driven through load/unload cycles.
//!
//! Every stop runs three phases in a fixed order. Columns are unloaded from
//! left to right, new arrivals are placed in their requested columns, then
//! the waiting queue is placed back. Whenever a column is full the item goes
//! to the least occupied column instead, with the lowest index winning ties.

use log::trace;
use thiserror::Error;

use crate::{Item, Slot, SlotError, StopSummary};

/// Width and height of a stowage grid.
///
/// # Examples
/// ```
/// use stowage_core::GridDimensions;
///
/// let dims = GridDimensions::new(3, 4).expect("non-zero dimensions");
/// assert_eq!(dims.capacity(), 12);
/// assert!(GridDimensions::new(0, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    width: usize,
    height: usize,
}

impl GridDimensions {
    /// Validate and construct grid dimensions.
    pub const fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 {
            return Err(GridError::ZeroWidth);
        }
        if height == 0 {
            return Err(GridError::ZeroHeight);
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Items per column.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Items the whole grid can hold.
    pub const fn capacity(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

/// Errors raised while building or operating a [`StowageGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid needs at least one column.
    #[error("grid width must be positive")]
    ZeroWidth,
    /// Columns need room for at least one item.
    #[error("grid height must be positive")]
    ZeroHeight,
    /// A loading named a column the grid does not have.
    #[error("column {column} is outside a grid of width {width}")]
    ColumnOutOfRange {
        /// Requested column.
        column: usize,
        /// Number of columns in the grid.
        width: usize,
    },
    /// Every column is full so the item cannot be placed anywhere.
    #[error("grid is full at stop {stop}; no column can take item {item_id}")]
    Full {
        /// Stop at which placement failed.
        stop: u32,
        /// Identifier of the item left without a column.
        item_id: u64,
    },
    /// A slot refused an item despite the capacity check.
    #[error(transparent)]
    Slot(#[from] SlotError),
}

/// An item scheduled for loading together with its requested column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loading<'a> {
    /// Item to load.
    pub item: &'a Item,
    /// Column requested for the item.
    pub column: usize,
}

/// Fixed-width collection of [`Slot`]s.
///
/// # Examples
/// ```
/// use stowage_core::{GridDimensions, Item, Loading, StowageGrid};
///
/// let item = Item::new(1, 1, 2, 10).expect("valid item");
/// let dims = GridDimensions::new(2, 2).expect("valid dimensions");
/// let mut grid = StowageGrid::new(dims);
///
/// let summary = grid
///     .run_stop(1, &[Loading { item: &item, column: 1 }])
///     .expect("room in grid");
/// assert_eq!(summary.movements, 1);
/// assert_eq!(summary.occupancy, vec![0, 1]);
/// assert_eq!(summary.weights, vec![0, 10]);
/// ```
#[derive(Debug, Clone)]
pub struct StowageGrid<'a> {
    dimensions: GridDimensions,
    slots: Vec<Slot<'a>>,
}

impl<'a> StowageGrid<'a> {
    /// Construct an empty grid.
    pub fn new(dimensions: GridDimensions) -> Self {
        let slots = (0..dimensions.width())
            .map(|_| Slot::new(dimensions.height()))
            .collect();
        Self { dimensions, slots }
    }

    /// Dimensions fixed at construction.
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Columns in index order.
    pub fn slots(&self) -> &[Slot<'a>] {
        &self.slots
    }

    /// Items per column.
    pub fn occupancy(&self) -> Vec<usize> {
        self.slots.iter().map(Slot::occupancy).collect()
    }

    /// Aggregate weight per column.
    pub fn weights(&self) -> Vec<u64> {
        self.slots.iter().map(Slot::weight).collect()
    }

    /// Items on board across all columns.
    pub fn total_occupancy(&self) -> usize {
        self.slots.iter().map(Slot::occupancy).sum()
    }

    /// Index of the column holding the fewest items.
    ///
    /// Scans columns left to right and keeps the first minimum, so ties go to
    /// the lowest index.
    pub fn least_occupied_column(&self) -> usize {
        let mut best = 0;
        let mut best_occupancy = usize::MAX;
        for (index, slot) in self.slots.iter().enumerate() {
            if slot.occupancy() < best_occupancy {
                best = index;
                best_occupancy = slot.occupancy();
            }
        }
        best
    }

    /// Run the unload and load cycle for one stop.
    ///
    /// `incoming` lists the items picked up at `stop` in loading order.
    pub fn run_stop(
        &mut self,
        stop: u32,
        incoming: &[Loading<'a>],
    ) -> Result<StopSummary, GridError> {
        let mut movements = 0_u64;
        let mut delivered = 0_usize;
        let mut waiting = Vec::new();

        for slot in &mut self.slots {
            let unload = slot.unload_for_stop(stop);
            movements += unload.movements;
            delivered += usize::from(unload.delivered.is_some());
            waiting.extend(unload.requeued);
        }

        for loading in incoming {
            self.place_requested(stop, loading)?;
            movements += 1;
        }

        let requeued = waiting.len();
        for item in waiting {
            let column = self.least_occupied_column();
            self.place(stop, item, column)?;
            movements += 1;
        }

        trace!(
            "stop {stop}: {movements} movements, {delivered} delivered, {requeued} requeued, {} on board",
            self.total_occupancy()
        );

        Ok(StopSummary {
            stop,
            movements,
            delivered,
            requeued,
            occupancy: self.occupancy(),
            weights: self.weights(),
        })
    }

    fn place_requested(&mut self, stop: u32, loading: &Loading<'a>) -> Result<(), GridError> {
        let requested = self
            .slots
            .get(loading.column)
            .ok_or(GridError::ColumnOutOfRange {
                column: loading.column,
                width: self.dimensions.width(),
            })?;
        let column = if requested.is_full() {
            let fallback = self.least_occupied_column();
            trace!(
                "stop {stop}: column {} full, item {} moved to column {fallback}",
                loading.column, loading.item.id
            );
            fallback
        } else {
            loading.column
        };
        self.place(stop, loading.item, column)
    }

    fn place(&mut self, stop: u32, item: &'a Item, column: usize) -> Result<(), GridError> {
        let width = self.dimensions.width();
        let slot = self
            .slots
            .get_mut(column)
            .ok_or(GridError::ColumnOutOfRange { column, width })?;
        if slot.is_full() {
            return Err(GridError::Full {
                stop,
                item_id: item.id,
            });
        }
        slot.add(item)?;
        Ok(())
    }
}
