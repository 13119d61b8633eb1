//! Controller coordinating settings, menu and cycle runtime
//!
//! The controller is the central brain that:
//! - Routes button events to the menu or the start/stop toggle
//! - Refuses every menu and adjustment input while a run is in progress
//! - Advances the cycle runtime with fresh distance readings
//! - Builds the views the presentation layer renders

use crate::config::{ProcessSettings, SettingsPage};
use crate::cycle::CycleRuntime;
use crate::input::{Button, InputEvent};
use crate::menu::MenuNavigator;
use crate::presentation::{IdleView, RunningView};
use crate::state::{ActuatorCommand, Event, Phase};

/// Outcome of handling one input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputResponse {
    /// Input not applicable in the current state
    Ignored,
    /// Menu page or setting changed; redraw the idle view
    Redraw,
    /// Start/stop produced an event
    Event(Event),
}

/// Controller state for one vessel
#[derive(Debug, Clone)]
pub struct Controller {
    settings: ProcessSettings,
    menu: MenuNavigator,
    runtime: CycleRuntime,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ProcessSettings::default())
    }
}

impl Controller {
    /// Create an idle controller with the given settings
    pub fn new(settings: ProcessSettings) -> Self {
        Self {
            settings,
            menu: MenuNavigator::new(),
            runtime: CycleRuntime::new(),
        }
    }

    pub fn settings(&self) -> &ProcessSettings {
        &self.settings
    }

    pub fn runtime(&self) -> &CycleRuntime {
        &self.runtime
    }

    pub fn page(&self) -> SettingsPage {
        self.menu.page()
    }

    pub fn is_running(&self) -> bool {
        self.runtime.is_running()
    }

    pub fn is_finished(&self) -> bool {
        self.runtime.is_finished()
    }

    /// Outputs the actuators should be driven to
    pub fn actuator_command(&self) -> ActuatorCommand {
        self.runtime.actuator_command()
    }

    /// Process one classified button event
    pub fn handle_input(&mut self, input: InputEvent, now_ms: u32) -> InputResponse {
        match input.button {
            Button::StartStop => InputResponse::Event(self.toggle(now_ms)),
            _ if self.is_running() => InputResponse::Ignored,
            Button::Menu => {
                self.menu.advance();
                InputResponse::Redraw
            }
            Button::Up | Button::Down => {
                self.settings.adjust(self.menu.page(), input.button.direction());
                InputResponse::Redraw
            }
        }
    }

    /// Start/stop toggle
    ///
    /// While the finished view is up, the press only acknowledges it and
    /// returns to the first menu page; the next press starts a new run.
    fn toggle(&mut self, now_ms: u32) -> Event {
        if self.runtime.is_running() {
            let phase = self.runtime.phase();
            let completed = self.runtime.completed_cycles();
            self.runtime.stop();
            Event::StoppedByUser { phase, completed }
        } else if self.runtime.is_finished() {
            self.runtime.acknowledge_finish();
            self.menu.reset();
            Event::FinishAcknowledged
        } else {
            self.runtime.start(now_ms);
            Event::Started
        }
    }

    /// Periodic update with the latest distance reading
    ///
    /// Returns an event if the phase changed or the run finished.
    pub fn tick(&mut self, now_ms: u32, distance_cm: u16) -> Option<Event> {
        self.runtime.advance(&self.settings, now_ms, distance_cm)
    }

    /// Menu view for the current page
    pub fn idle_view(&self) -> IdleView {
        let page = self.menu.page();
        IdleView {
            page,
            value: self.settings.value(page),
            finished: self.runtime.is_finished(),
            completed: self.runtime.completed_cycles(),
        }
    }

    /// Progress view of the current run
    pub fn running_view(&self, now_ms: u32) -> RunningView {
        let phase = self.runtime.phase();
        RunningView {
            phase,
            distance_cm: self.runtime.last_distance_cm(),
            elapsed_ms: self.runtime.elapsed_ms(now_ms),
            phase_duration_ms: match phase {
                Phase::HoldHigh | Phase::HoldLow => Some(self.settings.hold_duration_ms()),
                Phase::Filling | Phase::Draining => None,
            },
            completed: self.runtime.completed_cycles(),
            target: self.settings.target_cycles(),
        }
    }
}
