//! Edge detection with settle windows and long-press auto-repeat
//!
//! After any fired event a button is ignored for a fixed settle window
//! (short after an adjustment, long after a single-shot press). Polls that
//! land inside the window are skipped outright, level history included, so
//! contact bounce right after an edge can never register as a second press.

use heapless::Vec;

use super::button::{Button, ButtonLevels, InputEvent, PressKind};
use crate::config::ControllerTiming;

/// `now_ms` is at or past `deadline_ms` on a wrapping millisecond clock
fn reached(now_ms: u32, deadline_ms: u32) -> bool {
    (now_ms.wrapping_sub(deadline_ms) as i32) >= 0
}

/// Per-button edge detector
#[derive(Debug, Clone)]
pub struct ButtonInput {
    button: Button,
    /// Pressed state seen on the last considered poll
    was_pressed: bool,
    /// When the current press began (adjustment buttons only)
    press_start_ms: u32,
    /// When the last auto-repeat fired (adjustment buttons only)
    last_repeat_ms: u32,
    /// Polls before this instant are ignored
    ignore_until_ms: Option<u32>,
}

impl ButtonInput {
    /// Create a detector for `button`, assumed released
    pub const fn new(button: Button) -> Self {
        Self {
            button,
            was_pressed: false,
            press_start_ms: 0,
            last_repeat_ms: 0,
            ignore_until_ms: None,
        }
    }

    pub fn button(&self) -> Button {
        self.button
    }

    /// Classify one raw sample
    ///
    /// `raw_high` is the electrical level; the button is pressed when low.
    pub fn poll(
        &mut self,
        raw_high: bool,
        now_ms: u32,
        timing: &ControllerTiming,
    ) -> Option<PressKind> {
        if let Some(until) = self.ignore_until_ms {
            if !reached(now_ms, until) {
                return None;
            }
            self.ignore_until_ms = None;
        }

        let pressed = !raw_high;
        let was_pressed = self.was_pressed;
        self.was_pressed = pressed;

        let kind = match (was_pressed, pressed) {
            (false, true) => {
                self.press_start_ms = now_ms;
                self.last_repeat_ms = now_ms;
                Some(PressKind::Press)
            }
            (true, true) if self.button.is_adjustment() => {
                let held_ms = now_ms.wrapping_sub(self.press_start_ms);
                let since_repeat_ms = now_ms.wrapping_sub(self.last_repeat_ms);
                if held_ms > timing.long_press_ms && since_repeat_ms >= timing.repeat_ms {
                    self.last_repeat_ms = now_ms;
                    Some(PressKind::Repeat)
                } else {
                    None
                }
            }
            _ => None,
        };

        if kind.is_some() {
            let settle_ms = if self.button.is_adjustment() {
                timing.edge_settle_ms
            } else {
                timing.single_shot_settle_ms
            };
            self.ignore_until_ms = Some(now_ms.wrapping_add(settle_ms));
        }

        kind
    }
}

/// Detectors for all four buttons
#[derive(Debug, Clone)]
pub struct ButtonPad {
    inputs: [ButtonInput; 4],
}

impl Default for ButtonPad {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonPad {
    pub const fn new() -> Self {
        Self {
            inputs: [
                ButtonInput::new(Button::Menu),
                ButtonInput::new(Button::Up),
                ButtonInput::new(Button::Down),
                ButtonInput::new(Button::StartStop),
            ],
        }
    }

    /// Poll every button in fixed order and collect the fired events
    pub fn poll(
        &mut self,
        levels: ButtonLevels,
        now_ms: u32,
        timing: &ControllerTiming,
    ) -> Vec<InputEvent, 4> {
        let mut events = Vec::new();
        for input in self.inputs.iter_mut() {
            let button = input.button();
            if let Some(kind) = input.poll(levels.level(button), now_ms, timing) {
                // Capacity matches the button count
                let _ = events.push(InputEvent { button, kind });
            }
        }
        events
    }
}
