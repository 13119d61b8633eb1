//! Time sources for blocking drivers

use embassy_time::Instant;
use risetide_drivers::sensor::MicrosClock;

/// Microsecond clock backed by the embassy time driver
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl MicrosClock for EmbassyClock {
    fn now_us(&self) -> u32 {
        // Truncation wraps every ~71 minutes; the driver only uses differences
        Instant::now().as_micros() as u32
    }
}
