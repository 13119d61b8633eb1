//! Input and refresh timing

/// Timing constants for button handling and display refresh
///
/// All values are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerTiming {
    /// Continuous hold before an adjustment button starts repeating
    pub long_press_ms: u32,
    /// Interval between auto-repeat events
    pub repeat_ms: u32,
    /// Settle window after an adjustment event
    pub edge_settle_ms: u32,
    /// Settle window after a menu or start/stop press
    pub single_shot_settle_ms: u32,
    /// Running view refresh cadence
    pub refresh_ms: u32,
    /// How long a phase-change announcement stays up before the running
    /// view replaces it
    pub announce_ms: u32,
}

impl Default for ControllerTiming {
    fn default() -> Self {
        Self {
            long_press_ms: 500,
            repeat_ms: 100,
            edge_settle_ms: 20,
            single_shot_settle_ms: 200,
            refresh_ms: 200,
            announce_ms: 1_000,
        }
    }
}
