//! Cycle phases and the events they produce
//!
//! The phase set is explicit, finite, and deterministic. Which phase
//! follows which is fixed; when a transition fires is decided by the
//! cycle runtime from distance readings and elapsed time.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{ActuatorCommand, Phase};
