//! Audible cues

use crate::state::Event;

/// A beep pattern: `count` pulses of `pulse_ms` each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cue {
    pub pulse_ms: u16,
    pub count: u8,
}

impl Cue {
    /// Start/stop acknowledgement
    pub const CONFIRM: Cue = Cue::new(80, 1);
    /// Setting changed or page advanced
    pub const KEY_CLICK: Cue = Cue::new(15, 1);
    /// Phase transition during a run
    pub const PHASE_CHANGE: Cue = Cue::new(150, 2);
    /// All cycles completed
    pub const FINISHED: Cue = Cue::new(400, 3);

    pub const fn new(pulse_ms: u16, count: u8) -> Self {
        Self { pulse_ms, count }
    }

    /// Cue announcing `event`
    pub fn for_event(event: &Event) -> Self {
        match event {
            Event::Started | Event::StoppedByUser { .. } | Event::FinishAcknowledged => {
                Cue::CONFIRM
            }
            Event::PhaseChanged { .. } => Cue::PHASE_CHANGE,
            Event::AllCyclesDone { .. } => Cue::FINISHED,
        }
    }
}
