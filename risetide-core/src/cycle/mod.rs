//! Cycle execution
//!
//! Tracks the current phase of a run, its start time and the number of
//! completed cycles, and decides when to move to the next phase.

pub mod runtime;

pub use runtime::{CycleRuntime, INVALID_DISTANCE};
