//! Button identities and input events

/// The four front-panel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Advance to the next settings page
    Menu,
    /// Increase the current setting
    Up,
    /// Decrease the current setting
    Down,
    /// Start or stop the cycle
    StartStop,
}

impl Button {
    /// Adjustment buttons fire on press and auto-repeat while held
    pub fn is_adjustment(self) -> bool {
        matches!(self, Button::Up | Button::Down)
    }

    /// Direction applied to the current setting, or 0 for non-adjustment buttons
    pub fn direction(self) -> i8 {
        match self {
            Button::Up => 1,
            Button::Down => -1,
            _ => 0,
        }
    }
}

/// How an input event was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    /// Released-to-pressed edge
    Press,
    /// Auto-repeat while an adjustment button is held
    Repeat,
}

/// A classified button event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub button: Button,
    pub kind: PressKind,
}

impl InputEvent {
    pub const fn press(button: Button) -> Self {
        Self {
            button,
            kind: PressKind::Press,
        }
    }

    pub const fn repeat(button: Button) -> Self {
        Self {
            button,
            kind: PressKind::Repeat,
        }
    }
}

/// Raw electrical levels of the four buttons for one poll
///
/// `true` means the line reads high. Buttons are active-low, so a pressed
/// button reads `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLevels {
    pub menu: bool,
    pub up: bool,
    pub down: bool,
    pub start_stop: bool,
}

impl ButtonLevels {
    /// All buttons released
    pub const fn released() -> Self {
        Self {
            menu: true,
            up: true,
            down: true,
            start_stop: true,
        }
    }

    /// Only `button` held down
    pub fn pressed(button: Button) -> Self {
        let mut levels = Self::released();
        levels.set(button, false);
        levels
    }

    /// Raw level of `button`
    pub fn level(&self, button: Button) -> bool {
        match button {
            Button::Menu => self.menu,
            Button::Up => self.up,
            Button::Down => self.down,
            Button::StartStop => self.start_stop,
        }
    }

    /// Set the raw level of `button`
    pub fn set(&mut self, button: Button, high: bool) {
        match button {
            Button::Menu => self.menu = high,
            Button::Up => self.up = high,
            Button::Down => self.down = high,
            Button::StartStop => self.start_stop = high,
        }
    }
}

impl Default for ButtonLevels {
    fn default() -> Self {
        Self::released()
    }
}
