//! Presentation traits
//!
//! The controller talks to [`Presentation`], which receives whole views
//! and events. [`LineDisplay`] and [`CueSink`] are the narrower pieces a
//! text presenter is built from.

use crate::presentation::{Cue, IdleView, RunningView};
use crate::state::Event;

/// Errors that can occur while presenting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PresentationError {
    /// Display did not accept the write in time
    Timeout,
    /// Display link is down
    LinkLost,
    /// Text did not fit the output buffer
    BufferOverflow,
}

/// Renders controller state and plays audible cues
pub trait Presentation {
    /// Blank the display
    fn clear(&mut self) -> Result<(), PresentationError>;

    /// Show the settings menu, or the completed view when the view says so
    fn show_idle(&mut self, view: &IdleView) -> Result<(), PresentationError>;

    /// Show progress of the run in progress
    fn show_running(&mut self, view: &RunningView) -> Result<(), PresentationError>;

    /// Announce a start/stop or phase change
    fn announce(&mut self, event: &Event) -> Result<(), PresentationError>;

    /// Play an audible cue
    fn cue(&mut self, cue: Cue) -> Result<(), PresentationError>;
}

/// Character display made of fixed-width rows
pub trait LineDisplay {
    /// Number of rows
    const ROWS: u8;
    /// Characters per row
    const COLS: u8;

    /// Blank every row
    fn clear(&mut self) -> Result<(), PresentationError>;

    /// Replace the content of `row` with `text`
    fn write_line(&mut self, row: u8, text: &str) -> Result<(), PresentationError>;
}

/// Audible cue output
pub trait CueSink {
    /// Queue `cue` for playback
    fn play(&mut self, cue: Cue) -> Result<(), PresentationError>;
}
