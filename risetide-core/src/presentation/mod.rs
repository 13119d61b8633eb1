//! Presentation data
//!
//! Plain views and cue descriptions handed to the presentation layer.
//! Formatting them into text is the presenter's job.

pub mod cue;
pub mod view;

pub use cue::Cue;
pub use view::{IdleView, RunningView};
