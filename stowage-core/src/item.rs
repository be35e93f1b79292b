//! Cargo items carried between a pickup stop and a drop-off stop.

use thiserror::Error;

/// One unit of cargo.
///
/// Stops are 1-based and the drop-off stop always lies strictly after the
/// pickup stop. Items are immutable once built and are shared by reference
/// across every evaluation of a manifest.
///
/// # Examples
/// ```
/// use stowage_core::Item;
///
/// let item = Item::new(7, 1, 3, 25).expect("valid item");
/// assert_eq!(item.id, 7);
/// assert_eq!(item.stops_on_board(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Caller-assigned identifier.
    pub id: u64,
    /// Stop at which the item is loaded.
    pub pickup_stop: u32,
    /// Stop at which the item leaves the vehicle.
    pub drop_off_stop: u32,
    /// Gross weight.
    pub weight: u32,
}

/// Errors returned by [`Item::new`] and [`Item::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    /// Stops are numbered from 1.
    #[error("item {id} has pickup stop 0; stops are numbered from 1")]
    ZeroPickupStop {
        /// Identifier of the offending item.
        id: u64,
    },
    /// The drop-off stop does not follow the pickup stop.
    #[error("item {id} is dropped off at stop {drop_off_stop}, not after pickup stop {pickup_stop}")]
    DropOffNotAfterPickup {
        /// Identifier of the offending item.
        id: u64,
        /// Requested pickup stop.
        pickup_stop: u32,
        /// Requested drop-off stop.
        drop_off_stop: u32,
    },
}

impl Item {
    /// Validate and construct an [`Item`].
    pub fn new(
        id: u64,
        pickup_stop: u32,
        drop_off_stop: u32,
        weight: u32,
    ) -> Result<Self, ItemError> {
        let item = Self {
            id,
            pickup_stop,
            drop_off_stop,
            weight,
        };
        item.validate()?;
        Ok(item)
    }

    /// Check the stop ordering invariant.
    ///
    /// Deserialised items bypass [`Item::new`], so manifests call this for
    /// every entry before simulation begins.
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.pickup_stop == 0 {
            return Err(ItemError::ZeroPickupStop { id: self.id });
        }
        if self.drop_off_stop <= self.pickup_stop {
            return Err(ItemError::DropOffNotAfterPickup {
                id: self.id,
                pickup_stop: self.pickup_stop,
                drop_off_stop: self.drop_off_stop,
            });
        }
        Ok(())
    }

    /// Number of stops the item stays on board.
    pub const fn stops_on_board(&self) -> u32 {
        self.drop_off_stop.saturating_sub(self.pickup_stop)
    }
}
