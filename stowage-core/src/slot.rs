//! Fixed-capacity stacking columns.
//!
//! A [`Slot`] holds borrowed [`Item`]s bottom to top. Only the top of the
//! stack is reachable, so retrieving an item buried under others means lifting
//! everything above it first.

use thiserror::Error;

use crate::Item;

/// Capacity violation raised by [`Slot::add`].
///
/// The grid checks capacity before every placement, so this error signals a
/// bug in column resolution rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// The slot already holds `capacity` items.
    #[error("slot is full ({capacity} items); cannot add item {item_id}")]
    Full {
        /// Height of the slot.
        capacity: usize,
        /// Identifier of the rejected item.
        item_id: u64,
    },
}

/// Outcome of [`Slot::unload_for_stop`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Unload<'a> {
    /// Item taken off the vehicle at this stop, if any.
    pub delivered: Option<&'a Item>,
    /// Items lifted off the delivered one, bottom to top, awaiting reload.
    pub requeued: Vec<&'a Item>,
    /// Items handled: the delivered item plus every requeued item.
    pub movements: u64,
}

/// A single stacking column of fixed height.
///
/// # Examples
/// ```
/// use stowage_core::{Item, Slot};
///
/// let bottom = Item::new(1, 1, 3, 10).expect("valid item");
/// let top = Item::new(2, 1, 2, 5).expect("valid item");
/// let mut slot = Slot::new(2);
/// slot.add(&bottom).expect("room for bottom");
/// slot.add(&top).expect("room for top");
/// assert!(slot.is_full());
///
/// let unload = slot.unload_for_stop(2);
/// assert_eq!(unload.delivered, Some(&top));
/// assert_eq!(unload.movements, 1);
/// assert_eq!(slot.occupancy(), 1);
/// assert_eq!(slot.weight(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<'a> {
    capacity: usize,
    items: Vec<&'a Item>,
    weight: u64,
}

impl<'a> Slot<'a> {
    /// Construct an empty slot holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
            weight: 0,
        }
    }

    /// Maximum number of items.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently stacked.
    pub fn occupancy(&self) -> usize {
        self.items.len()
    }

    /// Sum of the weights of the stacked items.
    pub const fn weight(&self) -> u64 {
        self.weight
    }

    /// Report whether no further item fits.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Stacked items, bottom first.
    pub fn items(&self) -> &[&'a Item] {
        &self.items
    }

    /// Place `item` on top of the stack.
    pub fn add(&mut self, item: &'a Item) -> Result<(), SlotError> {
        if self.is_full() {
            return Err(SlotError::Full {
                capacity: self.capacity,
                item_id: item.id,
            });
        }
        self.items.push(item);
        self.weight += u64::from(item.weight);
        Ok(())
    }

    /// Unstack the slot far enough to take off the item bound for `stop`.
    ///
    /// Only the lowest item whose drop-off is `stop` is delivered. Everything
    /// above it is lifted into the waiting queue, including further items that
    /// are also bound for `stop`. Items below the delivered one are left in
    /// place and a slot without a match is not touched at all.
    pub fn unload_for_stop(&mut self, stop: u32) -> Unload<'a> {
        let Some(position) = self
            .items
            .iter()
            .position(|item| item.drop_off_stop == stop)
        else {
            return Unload::default();
        };

        let lifted = self.items.split_off(position);
        let lifted_weight: u64 = lifted.iter().map(|item| u64::from(item.weight)).sum();
        self.weight = self.weight.saturating_sub(lifted_weight);

        let movements = lifted.len() as u64;
        let mut lifted = lifted.into_iter();
        let delivered = lifted.next();
        Unload {
            delivered,
            requeued: lifted.collect(),
            movements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn item(id: u64, drop_off_stop: u32, weight: u32) -> Item {
        Item::new(id, 1, drop_off_stop, weight).expect("valid item")
    }

    #[fixture]
    fn stack() -> [Item; 4] {
        [item(1, 5, 40), item(2, 2, 10), item(3, 3, 20), item(4, 2, 30)]
    }

    #[rstest]
    fn add_tracks_occupancy_and_weight(stack: [Item; 4]) {
        let mut slot = Slot::new(4);
        for entry in &stack {
            slot.add(entry).expect("room in slot");
        }
        assert_eq!(slot.occupancy(), 4);
        assert_eq!(slot.weight(), 100);
        assert!(slot.is_full());
    }

    #[rstest]
    fn add_rejects_full_slot(stack: [Item; 4]) {
        let mut slot = Slot::new(1);
        let [first, second, ..] = &stack;
        slot.add(first).expect("room for first");
        let err = slot.add(second).expect_err("slot is full");
        assert_eq!(
            err,
            SlotError::Full {
                capacity: 1,
                item_id: 2
            }
        );
        assert_eq!(slot.occupancy(), 1);
        assert_eq!(slot.weight(), 40);
    }

    #[rstest]
    fn unload_delivers_first_match_and_lifts_items_above(stack: [Item; 4]) {
        let mut slot = Slot::new(4);
        for entry in &stack {
            slot.add(entry).expect("room in slot");
        }

        let unload = slot.unload_for_stop(2);

        assert_eq!(unload.delivered.map(|i| i.id), Some(2));
        let requeued: Vec<u64> = unload.requeued.iter().map(|i| i.id).collect();
        // Item 4 is also bound for stop 2 but only the first match leaves.
        assert_eq!(requeued, vec![3, 4]);
        assert_eq!(unload.movements, 3);
        assert_eq!(slot.occupancy(), 1);
        assert_eq!(slot.weight(), 40);
        assert_eq!(slot.items().first().map(|i| i.id), Some(1));
    }

    #[rstest]
    fn unload_without_match_leaves_slot_untouched(stack: [Item; 4]) {
        let mut slot = Slot::new(4);
        for entry in &stack {
            slot.add(entry).expect("room in slot");
        }

        let unload = slot.unload_for_stop(9);

        assert_eq!(unload, Unload::default());
        assert_eq!(slot.occupancy(), 4);
        assert_eq!(slot.weight(), 100);
    }

    #[rstest]
    fn unload_of_bottom_item_empties_slot(stack: [Item; 4]) {
        let mut slot = Slot::new(4);
        for entry in &stack {
            slot.add(entry).expect("room in slot");
        }

        let unload = slot.unload_for_stop(5);

        assert_eq!(unload.delivered.map(|i| i.id), Some(1));
        assert_eq!(unload.requeued.len(), 3);
        assert_eq!(unload.movements, 4);
        assert_eq!(slot.occupancy(), 0);
        assert_eq!(slot.weight(), 0);
    }

    #[rstest]
    fn unload_of_top_item_moves_only_that_item(stack: [Item; 4]) {
        let mut slot = Slot::new(4);
        let [first, _, third, _] = &stack;
        slot.add(first).expect("room in slot");
        slot.add(third).expect("room in slot");

        let unload = slot.unload_for_stop(3);

        assert_eq!(unload.delivered.map(|i| i.id), Some(3));
        assert!(unload.requeued.is_empty());
        assert_eq!(unload.movements, 1);
        assert_eq!(slot.weight(), 40);
    }

    #[rstest]
    fn empty_slot_unloads_nothing() {
        let mut slot = Slot::new(3);
        assert_eq!(slot.unload_for_stop(1), Unload::default());
    }
}
