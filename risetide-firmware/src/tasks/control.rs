//! Control task
//!
//! Drives the cooperative control loop from a fixed-period ticker. The
//! sensor measurement blocks the executor for at most two echo timeouts.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Delay, Duration, Instant, Ticker};

use risetide_core::input::ButtonLevels;
use risetide_core::ControlLoop;
use risetide_drivers::actuator::GpioActuator;
use risetide_drivers::display::TextPresenter;
use risetide_drivers::sensor::Hcsr04;

use crate::clock::EmbassyClock;
use crate::diagnostics::DefmtLog;
use crate::display::{BuzzerCues, ConsoleDisplay};

/// Ultrasonic ranger on the board pins
pub type Ranger = Hcsr04<Output<'static>, Input<'static>, Delay, EmbassyClock>;

/// Relay output for the fill pump or drain valve
pub type Relay = GpioActuator<Output<'static>>;

/// Console display plus buzzer
pub type Panel = TextPresenter<ConsoleDisplay, BuzzerCues>;

/// The control loop with the board's collaborators
pub type Controls = ControlLoop<Ranger, Relay, Relay, Panel, DefmtLog>;

/// The four push buttons, wired active-low with pull-ups
pub struct Buttons {
    pub menu: Input<'static>,
    pub up: Input<'static>,
    pub down: Input<'static>,
    pub start_stop: Input<'static>,
}

impl Buttons {
    /// Snapshot of the raw pin levels
    fn levels(&self) -> ButtonLevels {
        ButtonLevels {
            menu: self.menu.is_high(),
            up: self.up.is_high(),
            down: self.down.is_high(),
            start_stop: self.start_stop.is_high(),
        }
    }
}

/// Control task - one loop iteration per tick
#[embassy_executor::task]
pub async fn control_task(mut controls: Controls, buttons: Buttons, period_ms: u32) {
    info!("Control task started ({}ms period)", period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(period_ms as u64));
    let start = Instant::now();
    let mut reported_faults = 0;

    loop {
        ticker.next().await;

        // Wraps after ~49 days; the loop only uses differences
        let now_ms = start.elapsed().as_millis() as u32;
        controls.run_iteration(now_ms, buttons.levels());

        let faults = controls.presentation_faults();
        if faults != reported_faults {
            warn!("Presentation faults: {}", faults);
            reported_faults = faults;
        }
    }
}
