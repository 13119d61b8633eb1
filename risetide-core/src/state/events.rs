//! Events reported by the controller
//!
//! Every start/stop and every phase transition produces one event. The
//! presentation and diagnostic log turn them into text at their own
//! boundary.

use super::machine::Phase;

/// Controller events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Operator started a run
    Started,
    /// Operator stopped a run in progress
    StoppedByUser {
        /// Phase at the moment of the stop
        phase: Phase,
        /// Cycles completed before the stop
        completed: u16,
    },
    /// Operator cleared the finished view, returning to the menu
    FinishAcknowledged,
    /// The machine moved to a new phase
    PhaseChanged {
        from: Phase,
        to: Phase,
        /// Cycles completed so far
        completed: u16,
    },
    /// Target cycle count reached; the run is over
    AllCyclesDone {
        completed: u16,
    },
}

impl Event {
    /// Fixed log/display text for the event kind
    pub fn label(&self) -> &'static str {
        match self {
            Event::Started => "STARTED",
            Event::StoppedByUser { .. } => "STOPPED BY USER",
            Event::FinishAcknowledged => "RESET",
            Event::PhaseChanged { .. } => "PHASE CHANGED",
            Event::AllCyclesDone { .. } => "ALL CYCLES DONE",
        }
    }

    /// The run ended (stopped or finished)
    pub fn ends_run(&self) -> bool {
        matches!(self, Event::StoppedByUser { .. } | Event::AllCyclesDone { .. })
    }
}
