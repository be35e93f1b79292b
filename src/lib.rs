//! Facade crate for the stowage engine.
//!
//! This crate re-exports the core simulation types and the fitness evaluator
//! that scores placement decisions for an external optimiser.

#![forbid(unsafe_code)]

pub use stowage_core::{
    GridDimensions, GridError, Item, ItemError, Loading, Manifest, ManifestDocument,
    ManifestError, Objective, RouteReplay, RouteSimulator, SimulationError, Slot, SlotError,
    StopSummary, StowageGrid, Unload,
};

pub use stowage_fitness::{
    ColumnBins, DecodeError, Evaluation, FitnessError, FitnessEvaluator, ScoreWeights,
    ScoreWeightsError, decode,
};
