//! Diagnostic log trait

use crate::state::Event;

/// Line-oriented, timestamped event sink
///
/// Used for offline behavior verification only; nothing reads it back
/// for control decisions.
pub trait DiagnosticLog {
    /// Record `event` at `elapsed_s` seconds since power-up
    fn record(&mut self, elapsed_s: u32, event: &Event);
}
