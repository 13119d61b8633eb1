//! Views handed to the presentation layer

use crate::config::SettingsPage;
use crate::state::Phase;

/// Menu view while no run is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdleView {
    /// Selected settings page
    pub page: SettingsPage,
    /// Value of the selected setting
    pub value: u16,
    /// Last run finished; show the completed view instead of the page
    pub finished: bool,
    /// Cycles completed by the last run
    pub completed: u16,
}

/// Progress view while running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunningView {
    pub phase: Phase,
    /// Last measured distance (cm), 0 when invalid
    pub distance_cm: u16,
    /// Time spent in the current phase
    pub elapsed_ms: u32,
    /// Hold duration (ms) for hold phases, `None` for pumping phases
    pub phase_duration_ms: Option<u32>,
    pub completed: u16,
    pub target: u16,
}

impl RunningView {
    /// Seconds left in a hold phase
    pub fn remaining_s(&self) -> Option<u32> {
        self.phase_duration_ms
            .map(|total| total.saturating_sub(self.elapsed_ms) / 1000)
    }

    /// One-based number of the cycle in progress, capped at the target
    pub fn current_cycle(&self) -> u16 {
        self.completed.saturating_add(1).min(self.target)
    }
}
