//! Cycle runtime state
//!
//! Filling and Draining end on a measured distance; the two hold phases
//! end on elapsed time. A sensor that never reports a qualifying distance
//! keeps the machine in its pumping phase indefinitely, with the actuator
//! left as last commanded. There is no timeout on purpose.

use crate::config::ProcessSettings;
use crate::state::{ActuatorCommand, Event, Phase};

/// Distance value meaning "no valid reading"
pub const INVALID_DISTANCE: u16 = 0;

/// State of the current (or last) run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleRuntime {
    /// Current phase
    phase: Phase,
    /// Timestamp of the last phase entry (ms)
    phase_started_ms: u32,
    /// Cycles finished in this run
    completed_cycles: u16,
    /// A run is in progress
    running: bool,
    /// The last run reached its target; cleared by acknowledgement or start
    finished: bool,
    /// Most recent sensor reading (cm)
    last_distance_cm: u16,
}

impl Default for CycleRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleRuntime {
    /// Idle runtime, nothing started yet
    pub const fn new() -> Self {
        Self {
            phase: Phase::Filling,
            phase_started_ms: 0,
            completed_cycles: 0,
            running: false,
            finished: false,
            last_distance_cm: INVALID_DISTANCE,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn completed_cycles(&self) -> u16 {
        self.completed_cycles
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn last_distance_cm(&self) -> u16 {
        self.last_distance_cm
    }

    /// Milliseconds spent in the current phase
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.phase_started_ms)
    }

    /// Logical actuator outputs; both off unless a run is in progress
    pub fn actuator_command(&self) -> ActuatorCommand {
        if self.running {
            self.phase.outputs()
        } else {
            ActuatorCommand::off()
        }
    }

    /// Begin a new run from Filling
    pub fn start(&mut self, now_ms: u32) {
        self.phase = Phase::Filling;
        self.phase_started_ms = now_ms;
        self.completed_cycles = 0;
        self.running = true;
        self.finished = false;
        self.last_distance_cm = INVALID_DISTANCE;
    }

    /// Abandon the run in progress
    pub fn stop(&mut self) {
        self.running = false;
        self.finished = false;
    }

    /// Clear the finished flag after the operator has seen it
    pub fn acknowledge_finish(&mut self) {
        self.finished = false;
    }

    /// Advance the machine with a fresh distance reading
    ///
    /// Does nothing unless a run is in progress. Returns the event for a
    /// transition, if one happened. At most one transition per call.
    pub fn advance(
        &mut self,
        settings: &ProcessSettings,
        now_ms: u32,
        distance_cm: u16,
    ) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.last_distance_cm = distance_cm;

        let done = match self.phase {
            Phase::Filling => {
                distance_cm != INVALID_DISTANCE && distance_cm <= settings.high_threshold_cm()
            }
            Phase::Draining => distance_cm >= settings.low_threshold_cm(),
            Phase::HoldHigh | Phase::HoldLow => {
                self.elapsed_ms(now_ms) >= settings.hold_duration_ms()
            }
        };
        if !done {
            return None;
        }

        let from = self.phase;
        if from == Phase::HoldLow {
            self.completed_cycles = self.completed_cycles.saturating_add(1);
            if self.completed_cycles >= settings.target_cycles() {
                self.running = false;
                self.finished = true;
                return Some(Event::AllCyclesDone {
                    completed: self.completed_cycles,
                });
            }
        }

        self.phase = from.next();
        self.phase_started_ms = now_ms;
        Some(Event::PhaseChanged {
            from,
            to: self.phase,
            completed: self.completed_cycles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(hold: u16, high: u16, low: u16, cycles: u16) -> ProcessSettings {
        ProcessSettings::new(hold, high, low, cycles).unwrap()
    }

    #[test]
    fn test_start_resets_run() {
        let mut rt = CycleRuntime::new();
        rt.start(100);
        assert!(rt.is_running());
        assert!(!rt.is_finished());
        assert_eq!(rt.phase(), Phase::Filling);
        assert_eq!(rt.completed_cycles(), 0);
        assert_eq!(rt.actuator_command(), Phase::Filling.outputs());
    }

    #[test]
    fn test_idle_does_not_advance() {
        let s = settings(1, 10, 50, 1);
        let mut rt = CycleRuntime::new();
        assert_eq!(rt.advance(&s, 0, 5), None);
        assert!(rt.actuator_command().is_off());
    }

    #[test]
    fn test_fill_ignores_invalid_reading() {
        let s = settings(1, 10, 50, 1);
        let mut rt = CycleRuntime::new();
        rt.start(0);
        assert_eq!(rt.advance(&s, 10, INVALID_DISTANCE), None);
        assert_eq!(rt.phase(), Phase::Filling);
    }

    #[test]
    fn test_fill_exits_at_threshold_once() {
        let s = settings(1, 10, 50, 1);
        let mut rt = CycleRuntime::new();
        rt.start(0);

        assert_eq!(rt.advance(&s, 100, 40), None);
        assert_eq!(rt.advance(&s, 200, 11), None);
        assert_eq!(
            rt.advance(&s, 300, 10),
            Some(Event::PhaseChanged {
                from: Phase::Filling,
                to: Phase::HoldHigh,
                completed: 0
            })
        );
        // Still full: no further transitions until the hold elapses
        for now in (400..60_000).step_by(1000) {
            assert_eq!(rt.advance(&s, now, 8), None);
        }
        assert_eq!(rt.phase(), Phase::HoldHigh);
        assert!(rt.actuator_command().is_off());
    }

    #[test]
    fn test_hold_measured_from_phase_entry() {
        let s = settings(1, 10, 50, 1);
        let mut rt = CycleRuntime::new();
        rt.start(0);
        rt.advance(&s, 5_000, 10);

        assert_eq!(rt.advance(&s, 64_999, 10), None);
        assert_eq!(
            rt.advance(&s, 65_000, 10),
            Some(Event::PhaseChanged {
                from: Phase::HoldHigh,
                to: Phase::Draining,
                completed: 0
            })
        );
        assert!(rt.actuator_command().drain);
    }

    #[test]
    fn test_stalled_sensor_keeps_draining() {
        let s = settings(1, 10, 50, 1);
        let mut rt = CycleRuntime::new();
        rt.start(0);
        rt.advance(&s, 0, 10);
        rt.advance(&s, 60_000, 10);
        assert_eq!(rt.phase(), Phase::Draining);

        for now in (60_000..600_000).step_by(10_000) {
            assert_eq!(rt.advance(&s, now, 20), None);
        }
        assert_eq!(rt.phase(), Phase::Draining);
        assert!(rt.actuator_command().drain);
    }

    #[test]
    fn test_cycle_counting_and_loop_back() {
        let s = settings(1, 10, 50, 2);
        let mut rt = CycleRuntime::new();
        rt.start(0);
        rt.advance(&s, 0, 10); // -> HoldHigh
        rt.advance(&s, 60_000, 10); // -> Draining
        rt.advance(&s, 61_000, 50); // -> HoldLow
        assert_eq!(
            rt.advance(&s, 121_000, 50),
            Some(Event::PhaseChanged {
                from: Phase::HoldLow,
                to: Phase::Filling,
                completed: 1
            })
        );
        assert!(rt.is_running());
        assert!(rt.actuator_command().fill);
    }

    #[test]
    fn test_finishes_after_target_cycles() {
        let s = settings(1, 10, 50, 1);
        let mut rt = CycleRuntime::new();
        rt.start(0);
        rt.advance(&s, 0, 10);
        rt.advance(&s, 60_000, 10);
        rt.advance(&s, 61_000, 50);
        assert_eq!(
            rt.advance(&s, 121_000, 50),
            Some(Event::AllCyclesDone { completed: 1 })
        );
        assert!(!rt.is_running());
        assert!(rt.is_finished());
        assert!(rt.actuator_command().is_off());

        // Frozen until acknowledged
        assert_eq!(rt.advance(&s, 500_000, 5), None);
        rt.acknowledge_finish();
        assert!(!rt.is_finished());
    }

    #[test]
    fn test_stop_clears_running() {
        let s = settings(1, 10, 50, 1);
        let mut rt = CycleRuntime::new();
        rt.start(0);
        rt.advance(&s, 0, 10);
        rt.advance(&s, 60_000, 10);
        rt.stop();
        assert!(!rt.is_running());
        assert!(!rt.is_finished());
        assert!(rt.actuator_command().is_off());
    }
}
