//! Diagnostic event log over defmt

use defmt::*;

use risetide_core::state::Event;
use risetide_core::traits::DiagnosticLog;

/// Prints one `[<secs>s] <event>` line per event
pub struct DefmtLog;

impl DiagnosticLog for DefmtLog {
    fn record(&mut self, elapsed_s: u32, event: &Event) {
        info!("[{}s] {}", elapsed_s, event.label());
        debug!("{:?}", event);
    }
}
