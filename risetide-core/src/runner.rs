//! Cooperative control loop
//!
//! One call to [`ControlLoop::run_iteration`] is one pass of the main
//! loop: poll the buttons, advance the cycle machine while running, drive
//! the actuators, and keep the presentation up to date. Nothing in here
//! blocks; the caller decides how often to iterate.
//!
//! A phase-change announcement stays on screen for `announce_ms` before
//! the running view takes over again.
//!
//! Presentation failures are counted and otherwise ignored. Control
//! decisions never depend on the display or the log.

use crate::config::{ControllerTiming, ProcessSettings};
use crate::controller::{Controller, InputResponse};
use crate::input::{ButtonLevels, ButtonPad};
use crate::presentation::Cue;
use crate::state::Event;
use crate::traits::{
    ActuatorOutput, DiagnosticLog, DistanceSensor, Presentation, PresentationError,
};

/// Main loop state and its collaborators
pub struct ControlLoop<S, F, D, P, L> {
    controller: Controller,
    pad: ButtonPad,
    timing: ControllerTiming,
    sensor: S,
    fill: F,
    drain: D,
    presenter: P,
    log: L,
    /// First iteration timestamp, origin of log timestamps
    boot_ms: Option<u32>,
    /// Last running-view redraw
    last_refresh_ms: u32,
    /// Idle view must be redrawn on the next pass
    idle_dirty: bool,
    /// Phase-change announcement on screen since this time
    announced_ms: Option<u32>,
    presentation_faults: u32,
}

impl<S, F, D, P, L> ControlLoop<S, F, D, P, L>
where
    S: DistanceSensor,
    F: ActuatorOutput,
    D: ActuatorOutput,
    P: Presentation,
    L: DiagnosticLog,
{
    /// Create a loop; both actuators are forced off immediately
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settings: ProcessSettings,
        timing: ControllerTiming,
        sensor: S,
        mut fill: F,
        mut drain: D,
        presenter: P,
        log: L,
    ) -> Self {
        fill.set_on(false);
        drain.set_on(false);
        Self {
            controller: Controller::new(settings),
            pad: ButtonPad::new(),
            timing,
            sensor,
            fill,
            drain,
            presenter,
            log,
            boot_ms: None,
            last_refresh_ms: 0,
            idle_dirty: true,
            announced_ms: None,
            presentation_faults: 0,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn fill(&self) -> &F {
        &self.fill
    }

    pub fn drain(&self) -> &D {
        &self.drain
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Presentation calls that returned an error so far
    pub fn presentation_faults(&self) -> u32 {
        self.presentation_faults
    }

    /// One pass of the main loop
    pub fn run_iteration(&mut self, now_ms: u32, levels: ButtonLevels) {
        let boot_ms = *self.boot_ms.get_or_insert(now_ms);

        for input in self.pad.poll(levels, now_ms, &self.timing) {
            match self.controller.handle_input(input, now_ms) {
                InputResponse::Ignored => {}
                InputResponse::Redraw => {
                    self.idle_dirty = true;
                    let result = self.presenter.cue(Cue::KEY_CLICK);
                    self.note(result);
                }
                InputResponse::Event(event) => self.on_user_event(event, now_ms, boot_ms),
            }
        }

        if self.controller.is_running() {
            let distance_cm = self.sensor.measure_or_invalid();
            if let Some(event) = self.controller.tick(now_ms, distance_cm) {
                self.on_cycle_event(event, now_ms, boot_ms);
            }
        }

        let command = self.controller.actuator_command();
        self.fill.set_on(command.fill);
        self.drain.set_on(command.drain);

        self.refresh(now_ms);
    }

    fn on_user_event(&mut self, event: Event, now_ms: u32, boot_ms: u32) {
        // Known-off baseline on both edges of a run; Filling turns the
        // fill output back on at the end of this iteration.
        self.fill.set_on(false);
        self.drain.set_on(false);

        self.record(event, now_ms, boot_ms);
        let result = self.presenter.clear();
        self.note(result);
        let result = self.presenter.cue(Cue::for_event(&event));
        self.note(result);

        self.announced_ms = None;
        self.force_redraw(now_ms);
    }

    fn on_cycle_event(&mut self, event: Event, now_ms: u32, boot_ms: u32) {
        if event.ends_run() {
            self.fill.set_on(false);
            self.drain.set_on(false);
        }

        self.record(event, now_ms, boot_ms);
        let result = self.presenter.announce(&event);
        self.note(result);
        let result = self.presenter.cue(Cue::for_event(&event));
        self.note(result);

        self.force_redraw(now_ms);
        // The finished view replaces the final announcement right away
        self.announced_ms = if event.ends_run() { None } else { Some(now_ms) };
    }

    fn force_redraw(&mut self, now_ms: u32) {
        self.idle_dirty = true;
        // Makes the running view due on this very pass
        self.last_refresh_ms = now_ms.wrapping_sub(self.timing.refresh_ms);
    }

    fn refresh(&mut self, now_ms: u32) {
        if self.controller.is_running() {
            if let Some(announced_ms) = self.announced_ms {
                if now_ms.wrapping_sub(announced_ms) < self.timing.announce_ms {
                    return;
                }
                self.announced_ms = None;
                self.force_redraw(now_ms);
            }
            if now_ms.wrapping_sub(self.last_refresh_ms) >= self.timing.refresh_ms {
                self.last_refresh_ms = now_ms;
                let view = self.controller.running_view(now_ms);
                let result = self.presenter.show_running(&view);
                self.note(result);
            }
        } else if self.idle_dirty {
            self.idle_dirty = false;
            let view = self.controller.idle_view();
            let result = self.presenter.show_idle(&view);
            self.note(result);
        }
    }

    fn record(&mut self, event: Event, now_ms: u32, boot_ms: u32) {
        let elapsed_s = now_ms.wrapping_sub(boot_ms) / 1000;
        self.log.record(elapsed_s, &event);
    }

    fn note(&mut self, result: Result<(), PresentationError>) {
        if result.is_err() {
            self.presentation_faults = self.presentation_faults.saturating_add(1);
        }
    }
}
