//! Control loop behavior around start/stop, menu locking and refresh

mod common;

use common::{Rig, Shown};
use risetide_core::config::{ControllerTiming, ProcessSettings, SettingsPage};
use risetide_core::input::{Button, ButtonLevels};
use risetide_core::presentation::Cue;
use risetide_core::state::{Event, Phase};

#[test]
fn actuators_start_off() {
    let rig = Rig::new(ProcessSettings::default());
    assert_eq!(
        rig.writes.borrow().as_slice(),
        &[("fill", false), ("drain", false)]
    );
}

#[test]
fn start_commands_off_baseline_before_filling() {
    let mut rig = Rig::new(ProcessSettings::default());
    rig.surface.set(40);
    rig.idle_step();
    rig.writes.borrow_mut().clear();

    rig.control
        .run_iteration(0, ButtonLevels::pressed(Button::StartStop));

    assert_eq!(
        rig.writes.borrow().as_slice(),
        &[
            ("fill", false),
            ("drain", false),
            ("fill", true),
            ("drain", false)
        ]
    );
    let shown = &rig.control.presenter().shown;
    assert!(shown.contains(&Shown::Clear));
    assert!(shown.contains(&Shown::Cue(Cue::CONFIRM)));
}

#[test]
fn stop_cuts_actuators_in_every_phase() {
    for (phase, surface_script) in [
        (Phase::Filling, &[40u16][..]),
        (Phase::HoldHigh, &[10][..]),
        (Phase::Draining, &[10, 20][..]),
        (Phase::HoldLow, &[10, 60][..]),
    ] {
        let mut rig = Rig::new(ProcessSettings::default());
        rig.surface.set(surface_script[0]);
        rig.click(Button::StartStop);
        if let Some(cm) = surface_script.get(1) {
            rig.advance_by(60_000);
            rig.surface.set(*cm);
            rig.advance_by(100);
        }
        assert_eq!(rig.control.controller().runtime().phase(), phase);

        rig.writes.borrow_mut().clear();
        rig.control
            .run_iteration(rig.now_ms, ButtonLevels::pressed(Button::StartStop));

        assert!(!rig.fill_on(), "fill left on after stop in {:?}", phase);
        assert!(!rig.drain_on(), "drain left on after stop in {:?}", phase);
        assert!(rig.writes.borrow().iter().all(|(_, on)| !on));
        assert!(matches!(
            rig.control.log().entries.last(),
            Some((_, Event::StoppedByUser { phase: p, .. })) if *p == phase
        ));
    }
}

#[test]
fn menu_and_adjustments_ignored_while_running() {
    let mut rig = Rig::new(ProcessSettings::default());
    rig.surface.set(40);
    rig.click(Button::StartStop);

    let before = *rig.control.controller().settings();
    rig.click(Button::Menu);
    rig.click(Button::Up);
    rig.click(Button::Down);

    assert_eq!(*rig.control.controller().settings(), before);
    assert_eq!(rig.control.controller().page(), SettingsPage::HoldDuration);
    assert!(rig.control.controller().is_running());
}

#[test]
fn menu_navigation_and_long_press_adjust() {
    let mut rig = Rig::new(ProcessSettings::default());
    rig.idle_step();

    rig.click(Button::Menu);
    assert_eq!(rig.control.controller().page(), SettingsPage::HighThreshold);

    // Hold Up for 1 s: one press, repeats at 510, 610, ... 910 ms
    let start = rig.now_ms;
    for t in (0..=1000).step_by(10) {
        rig.control
            .run_iteration(start + t, ButtonLevels::pressed(Button::Up));
    }
    rig.now_ms = start + 1000;
    rig.advance_by(250);

    let settings = rig.control.controller().settings();
    assert_eq!(settings.high_threshold_cm(), 10 + 1 + 5);
    // Gap pushed the low threshold only if needed
    assert_eq!(settings.low_threshold_cm(), 50);

    let view = rig.control.presenter().last_idle().unwrap();
    assert_eq!(view.page, SettingsPage::HighThreshold);
    assert_eq!(view.value, 16);
}

#[test]
fn running_view_refreshes_on_cadence() {
    let mut rig = Rig::new(ProcessSettings::default());
    rig.surface.set(40);
    rig.idle_step();
    rig.control
        .run_iteration(0, ButtonLevels::pressed(Button::StartStop));
    rig.run_until(1_000);

    // Redraw on start, then every 200 ms
    assert_eq!(rig.control.presenter().running_views(), 6);
}

#[test]
fn phase_announcement_holds_off_running_view() {
    let announce_ms = ControllerTiming::default().announce_ms;
    let mut rig = Rig::new(ProcessSettings::default());
    rig.surface.set(40);
    rig.click(Button::StartStop);

    rig.surface.set(9);
    rig.now_ms += 10;
    let changed_at = rig.now_ms;
    rig.idle_step();
    assert_eq!(rig.control.controller().runtime().phase(), Phase::HoldHigh);

    let announced = rig
        .control
        .presenter()
        .shown
        .iter()
        .rposition(|s| matches!(s, Shown::Announce(Event::PhaseChanged { .. })))
        .unwrap();
    let since = |rig: &Rig| rig.control.presenter().shown[announced..].to_vec();

    // Announcement and cue only, nothing drawn over them yet
    assert_eq!(since(&rig)[1..], [Shown::Cue(Cue::PHASE_CHANGE)]);

    rig.run_until(changed_at + announce_ms - 10);
    assert!(!since(&rig).iter().any(|s| matches!(s, Shown::Running(_))));

    rig.run_until(changed_at + announce_ms);
    let running: Vec<_> = since(&rig)
        .into_iter()
        .filter_map(|s| match s {
            Shown::Running(view) => Some(view),
            _ => None,
        })
        .collect();
    assert_eq!(running.len(), 1);
    assert_eq!(running[0].phase, Phase::HoldHigh);

    // Regular cadence afterwards
    rig.advance_by(400);
    assert_eq!(
        since(&rig)
            .iter()
            .filter(|s| matches!(s, Shown::Running(_)))
            .count(),
        3
    );
}

#[test]
fn sensor_not_read_while_idle() {
    let mut rig = Rig::new(ProcessSettings::default());
    rig.surface.set(5);
    rig.advance_by(2_000);
    assert_eq!(rig.control.sensor().reads, 0);
    assert!(!rig.control.controller().is_running());
    assert!(!rig.fill_on());
}

#[test]
fn lost_echo_keeps_filling() {
    let mut rig = Rig::new(ProcessSettings::default());
    rig.surface.lose_echo();
    rig.click(Button::StartStop);
    rig.advance_by(30_000);

    assert_eq!(rig.control.controller().runtime().phase(), Phase::Filling);
    assert!(rig.fill_on());
    assert_eq!(rig.control.controller().runtime().last_distance_cm(), 0);
}

#[test]
fn broken_display_does_not_affect_control() {
    let mut rig = Rig::new(ProcessSettings::default());
    rig.surface.set(40);
    rig.control.presenter_mut().broken = true;

    rig.click(Button::StartStop);
    rig.surface.set(9);
    rig.advance_by(100);

    assert_eq!(rig.control.controller().runtime().phase(), Phase::HoldHigh);
    assert!(rig.control.presentation_faults() > 0);
    assert_eq!(rig.control.log().entries.len(), 2);
}
