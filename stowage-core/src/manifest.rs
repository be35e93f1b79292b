//! Dataset descriptions: the route, the grid and the items to carry.
//!
//! A [`Manifest`] is built once and shared by every evaluation. Its item
//! order fixes the order of entries in a decision vector.

use log::warn;
use thiserror::Error;

use crate::{GridDimensions, GridError, Item, ItemError};

/// Errors returned when a manifest fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    /// Grid dimensions were invalid.
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
    /// The declared item count disagrees with the item list.
    #[error("manifest declares {declared} items but lists {actual}")]
    ItemCount {
        /// Count stated in the description.
        declared: usize,
        /// Length of the item list.
        actual: usize,
    },
    /// An item broke the stop ordering invariant.
    #[error("item at position {index} is invalid: {source}")]
    InvalidItem {
        /// Position of the item in the manifest.
        index: usize,
        /// Validation failure.
        #[source]
        source: ItemError,
    },
}

/// Validated dataset description.
///
/// # Examples
/// ```
/// use stowage_core::{GridDimensions, Item, Manifest};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let items = vec![Item::new(1, 1, 2, 10)?, Item::new(2, 1, 3, 20)?];
/// let manifest = Manifest::new(3, GridDimensions::new(2, 2)?, items)?;
/// assert_eq!(manifest.total_items(), 2);
/// assert_eq!(manifest.pickups_by_stop(), vec![vec![0, 1]]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ManifestDocument", into = "ManifestDocument")
)]
pub struct Manifest {
    title: Option<String>,
    total_stops: u32,
    dimensions: GridDimensions,
    items: Vec<Item>,
}

impl Manifest {
    /// Validate and construct a manifest.
    pub fn new(
        total_stops: u32,
        dimensions: GridDimensions,
        items: Vec<Item>,
    ) -> Result<Self, ManifestError> {
        for (index, item) in items.iter().enumerate() {
            item.validate()
                .map_err(|source| ManifestError::InvalidItem { index, source })?;
        }
        Ok(Self {
            title: None,
            total_stops,
            dimensions,
            items,
        })
    }

    /// Attach a human-readable title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title, when one was supplied.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Stops on the route.
    pub const fn total_stops(&self) -> u32 {
        self.total_stops
    }

    /// Grid the items are stowed in.
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Items in decision-vector order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items, which is also the decision-vector length.
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Item positions grouped by pickup stop.
    ///
    /// Entry `s - 1` lists, in manifest order, the positions of the items
    /// loaded at stop `s`. The list ends at the last stop where an item
    /// boards, so quiet stops at the end of the route take no space. Items
    /// picked up after the last stop never board and are left out.
    pub fn pickups_by_stop(&self) -> Vec<Vec<usize>> {
        let last_boarding = self
            .items
            .iter()
            .map(|item| item.pickup_stop)
            .filter(|&stop| stop <= self.total_stops)
            .max()
            .unwrap_or(0);
        let stops = usize::try_from(last_boarding).unwrap_or(usize::MAX);
        let mut grouped = vec![Vec::new(); stops];
        for (index, item) in self.items.iter().enumerate() {
            let slot = usize::try_from(item.pickup_stop)
                .ok()
                .and_then(|stop| stop.checked_sub(1))
                .and_then(|stop| grouped.get_mut(stop));
            match slot {
                Some(positions) => positions.push(index),
                None => warn!(
                    "item {} is picked up at stop {} on a {}-stop route and never boards",
                    item.id, item.pickup_stop, self.total_stops
                ),
            }
        }
        grouped
    }
}

/// Serialised shape of a [`Manifest`].
///
/// Mirrors the dataset description exchanged with callers:
/// `{ title?, total_items, total_stops, grid_width, grid_height, items }`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManifestDocument {
    /// Optional dataset title.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub title: Option<String>,
    /// Declared number of items.
    pub total_items: usize,
    /// Stops on the route.
    pub total_stops: u32,
    /// Columns in the grid.
    pub grid_width: usize,
    /// Items per column.
    pub grid_height: usize,
    /// Items in decision-vector order.
    pub items: Vec<Item>,
}

impl TryFrom<ManifestDocument> for Manifest {
    type Error = ManifestError;

    fn try_from(document: ManifestDocument) -> Result<Self, Self::Error> {
        if document.total_items != document.items.len() {
            return Err(ManifestError::ItemCount {
                declared: document.total_items,
                actual: document.items.len(),
            });
        }
        let dimensions = GridDimensions::new(document.grid_width, document.grid_height)?;
        let manifest = Self::new(document.total_stops, dimensions, document.items)?;
        Ok(Self {
            title: document.title,
            ..manifest
        })
    }
}

impl From<Manifest> for ManifestDocument {
    fn from(manifest: Manifest) -> Self {
        Self {
            title: manifest.title,
            total_items: manifest.items.len(),
            total_stops: manifest.total_stops,
            grid_width: manifest.dimensions.width(),
            grid_height: manifest.dimensions.height(),
            items: manifest.items,
        }
    }
}
