//! Manifest builders shared by unit, behaviour and property tests.

use crate::{GridDimensions, Item, Manifest};

fn item(id: u64, pickup_stop: u32, drop_off_stop: u32, weight: u32) -> Item {
    Item {
        id,
        pickup_stop,
        drop_off_stop,
        weight,
    }
}

/// Three-stop, two-by-two manifest with two items boarding at stop 1.
///
/// The first item leaves at stop 2, the second at stop 3. Decision
/// `[0.1, 0.9]` stows them in different columns.
///
/// # Panics
///
/// Never in practice; the fixture is valid by construction.
pub fn two_item_manifest() -> Manifest {
    let dimensions = GridDimensions::new(2, 2).expect("two-by-two grid");
    let items = vec![item(1, 1, 2, 10), item(2, 1, 3, 20)];
    Manifest::new(3, dimensions, items)
        .expect("fixture items are valid")
        .with_title("two items")
}

/// Manifest where item `i` boards at stop `i` and leaves at the next one.
///
/// The route has `count + 1` stops and every column is `count` items tall, so
/// any placement fits.
///
/// # Panics
///
/// Panics when `width` is zero or `count` does not fit a stop number.
pub fn single_hop_manifest(count: usize, width: usize) -> Manifest {
    let stops = u32::try_from(count).expect("item count fits a stop number");
    let dimensions = GridDimensions::new(width, count.max(1)).expect("grid width must be positive");
    let items = (1..=stops)
        .map(|stop| item(u64::from(stop), stop, stop + 1, stop * 7))
        .collect();
    Manifest::new(stops + 1, dimensions, items).expect("single-hop items are valid")
}
