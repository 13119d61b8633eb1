//! Presentation backends
//!
//! The board has no character display fitted; screen rows are printed
//! over defmt instead and cues go to the buzzer task.

pub mod console;

pub use console::{BuzzerCues, ConsoleDisplay};
