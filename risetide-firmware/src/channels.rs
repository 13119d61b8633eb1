//! Inter-task communication channels
//!
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use risetide_core::presentation::Cue;

/// Cue to play next (updated by the control task)
///
/// A cue signalled while another is still pending replaces it.
pub static CUE: Signal<CriticalSectionRawMutex, Cue> = Signal::new();
