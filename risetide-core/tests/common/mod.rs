//! Host-side collaborators for driving the control loop in tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use risetide_core::config::{ControllerTiming, ProcessSettings};
use risetide_core::input::{Button, ButtonLevels};
use risetide_core::presentation::{Cue, IdleView, RunningView};
use risetide_core::state::Event;
use risetide_core::traits::{
    ActuatorOutput, DiagnosticLog, DistanceSensor, Presentation, PresentationError, SensorError,
};
use risetide_core::ControlLoop;

/// Distance the test sets from outside; `None` reads as a timeout
#[derive(Clone, Default)]
pub struct Surface(Rc<Cell<Option<u16>>>);

impl Surface {
    pub fn set(&self, cm: u16) {
        self.0.set(Some(cm));
    }

    pub fn lose_echo(&self) {
        self.0.set(None);
    }
}

pub struct FakeSensor {
    surface: Surface,
    pub reads: u32,
}

impl DistanceSensor for FakeSensor {
    fn measure_cm(&mut self) -> Result<u16, SensorError> {
        self.reads += 1;
        self.surface.0.get().ok_or(SensorError::Timeout)
    }
}

/// Every actuator write, in order, across both outputs
pub type WriteLog = Rc<RefCell<Vec<(&'static str, bool)>>>;

pub struct FakeActuator {
    name: &'static str,
    on: bool,
    writes: WriteLog,
}

impl ActuatorOutput for FakeActuator {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.writes.borrow_mut().push((self.name, on));
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Clear,
    Idle(IdleView),
    Running(RunningView),
    Announce(Event),
    Cue(Cue),
}

#[derive(Default)]
pub struct FakePresenter {
    pub shown: Vec<Shown>,
    pub broken: bool,
}

impl FakePresenter {
    fn push(&mut self, item: Shown) -> Result<(), PresentationError> {
        self.shown.push(item);
        if self.broken {
            Err(PresentationError::LinkLost)
        } else {
            Ok(())
        }
    }

    pub fn running_views(&self) -> usize {
        self.shown
            .iter()
            .filter(|s| matches!(s, Shown::Running(_)))
            .count()
    }

    pub fn last_idle(&self) -> Option<IdleView> {
        self.shown.iter().rev().find_map(|s| match s {
            Shown::Idle(view) => Some(*view),
            _ => None,
        })
    }

    pub fn cues(&self) -> Vec<Cue> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Cue(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }
}

impl Presentation for FakePresenter {
    fn clear(&mut self) -> Result<(), PresentationError> {
        self.push(Shown::Clear)
    }

    fn show_idle(&mut self, view: &IdleView) -> Result<(), PresentationError> {
        self.push(Shown::Idle(*view))
    }

    fn show_running(&mut self, view: &RunningView) -> Result<(), PresentationError> {
        self.push(Shown::Running(*view))
    }

    fn announce(&mut self, event: &Event) -> Result<(), PresentationError> {
        self.push(Shown::Announce(*event))
    }

    fn cue(&mut self, cue: Cue) -> Result<(), PresentationError> {
        self.push(Shown::Cue(cue))
    }
}

#[derive(Default)]
pub struct VecLog {
    pub entries: Vec<(u32, Event)>,
}

impl DiagnosticLog for VecLog {
    fn record(&mut self, elapsed_s: u32, event: &Event) {
        self.entries.push((elapsed_s, *event));
    }
}

pub type TestLoop = ControlLoop<FakeSensor, FakeActuator, FakeActuator, FakePresenter, VecLog>;

pub struct Rig {
    pub control: TestLoop,
    pub surface: Surface,
    pub writes: WriteLog,
    pub now_ms: u32,
}

impl Rig {
    pub fn new(settings: ProcessSettings) -> Self {
        let surface = Surface::default();
        let writes: WriteLog = Rc::default();
        let control = ControlLoop::new(
            settings,
            ControllerTiming::default(),
            FakeSensor {
                surface: surface.clone(),
                reads: 0,
            },
            FakeActuator {
                name: "fill",
                on: false,
                writes: writes.clone(),
            },
            FakeActuator {
                name: "drain",
                on: false,
                writes: writes.clone(),
            },
            FakePresenter::default(),
            VecLog::default(),
        );
        Self {
            control,
            surface,
            writes,
            now_ms: 0,
        }
    }

    /// One iteration at the current time with nothing pressed
    pub fn idle_step(&mut self) {
        self.control.run_iteration(self.now_ms, ButtonLevels::released());
    }

    /// Hold `button` for one iteration, then release it for 250 ms so the
    /// settle window closes
    pub fn click(&mut self, button: Button) {
        self.control.run_iteration(self.now_ms, ButtonLevels::pressed(button));
        self.advance_by(250);
    }

    /// Iterate every 10 ms until `ms` has passed
    pub fn advance_by(&mut self, ms: u32) {
        let end = self.now_ms + ms;
        while self.now_ms < end {
            self.now_ms += 10;
            self.idle_step();
        }
    }

    /// Iterate every 10 ms up to (and including) absolute time `t_ms`
    pub fn run_until(&mut self, t_ms: u32) {
        self.advance_by(t_ms.saturating_sub(self.now_ms));
    }

    pub fn fill_on(&self) -> bool {
        self.control.fill().is_on()
    }

    pub fn drain_on(&self) -> bool {
        self.control.drain().is_on()
    }
}
