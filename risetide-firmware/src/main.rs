//! Rise-Tide - Fill/Drain Cycle Controller Firmware
//!
//! Main firmware binary for RP2040-based boards. A fill pump raises the
//! liquid until an ultrasonic ranger sees it reach the high mark, the
//! controller holds, a drain valve lowers it to the low mark, holds
//! again, and the cycle repeats.
//!
//! Pin map:
//! - GP2 / GP3: ranger trigger / echo
//! - GP10 / GP11: fill pump relay / drain valve relay
//! - GP15: buzzer
//! - GP18-GP21: Menu, Up, Down, Start/Stop buttons (to ground)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use risetide_core::ControlLoop;
use risetide_drivers::actuator::{GpioActuator, Polarity};
use risetide_drivers::display::TextPresenter;
use risetide_drivers::sensor::Hcsr04;

use crate::clock::EmbassyClock;
use crate::config::defaults;
use crate::diagnostics::DefmtLog;
use crate::display::{BuzzerCues, ConsoleDisplay};
use crate::tasks::Buttons;

mod channels;
mod clock;
mod config;
mod diagnostics;
mod display;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Rise-Tide firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Relays first so the pump and valve are released as early as possible
    let fill_polarity = Polarity::from_active_low(defaults::FILL_ACTIVE_LOW);
    let drain_polarity = Polarity::from_active_low(defaults::DRAIN_ACTIVE_LOW);
    let fill_pin = Output::new(p.PIN_10, Level::from(fill_polarity.released_high()));
    let drain_pin = Output::new(p.PIN_11, Level::from(drain_polarity.released_high()));
    let fill = GpioActuator::new(fill_pin, fill_polarity);
    let drain = GpioActuator::new(drain_pin, drain_polarity);
    info!("Relays initialized (released)");

    let ranger = Hcsr04::new(
        Output::new(p.PIN_2, Level::Low),
        Input::new(p.PIN_3, Pull::Down),
        Delay,
        EmbassyClock,
        defaults::ECHO_TIMEOUT_US,
    );

    let buttons = Buttons {
        menu: Input::new(p.PIN_18, Pull::Up),
        up: Input::new(p.PIN_19, Pull::Up),
        down: Input::new(p.PIN_20, Pull::Up),
        start_stop: Input::new(p.PIN_21, Pull::Up),
    };

    let buzzer = Output::new(p.PIN_15, Level::Low);

    let settings = config::load_settings();
    let controls = ControlLoop::new(
        settings,
        config::controller_timing(),
        ranger,
        fill,
        drain,
        TextPresenter::new(ConsoleDisplay::new(), BuzzerCues),
        DefmtLog,
    );

    spawner.spawn(tasks::buzzer_task(buzzer)).unwrap();
    spawner
        .spawn(tasks::control_task(controls, buttons, defaults::LOOP_PERIOD_MS))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
