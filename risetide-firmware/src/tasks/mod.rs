//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod buzzer;
pub mod control;

pub use buzzer::buzzer_task;
pub use control::{control_task, Buttons};
