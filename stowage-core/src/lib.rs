//! Core domain types for the stowage engine.
//!
//! Items travel between stops in a grid of fixed-height stacking columns. The
//! [`RouteSimulator`] replays a route against a placement, enforcing that only
//! the top of a column is reachable, and reports one [`StopSummary`] per stop.
//! Constructors return `Result` so invalid datasets surface before any replay.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod grid;
mod item;
mod manifest;
mod objective;
mod route;
mod slot;
mod summary;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use grid::{GridDimensions, GridError, Loading, StowageGrid};
pub use item::{Item, ItemError};
pub use manifest::{Manifest, ManifestDocument, ManifestError};
pub use objective::Objective;
pub use route::{RouteReplay, RouteSimulator, SimulationError};
pub use slot::{Slot, SlotError, Unload};
pub use summary::StopSummary;
