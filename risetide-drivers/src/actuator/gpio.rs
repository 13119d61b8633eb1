//! Relay outputs on a GPIO pin
//!
//! The fill pump and the drain valve each hang off a relay module or a
//! MOSFET gate. Which electrical level energizes the load depends on the
//! module, so the driver carries a [`Polarity`].

use embedded_hal::digital::{OutputPin, PinState};
use risetide_core::traits::ActuatorOutput;

/// Pin level that energizes the load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Load energized while the pin is high (MOSFET gate, most SSRs)
    ActiveHigh,
    /// Load energized while the pin is low (opto-isolated relay boards)
    ActiveLow,
}

impl Polarity {
    pub fn from_active_low(active_low: bool) -> Self {
        if active_low {
            Polarity::ActiveLow
        } else {
            Polarity::ActiveHigh
        }
    }

    /// Pin state for the logical `on` state
    pub fn pin_state(self, on: bool) -> PinState {
        match self {
            Polarity::ActiveHigh => PinState::from(on),
            Polarity::ActiveLow => PinState::from(!on),
        }
    }

    /// Whether the pin idles high while the load is released
    ///
    /// Board bring-up configures the pin at this level so the load never
    /// twitches before the driver takes over.
    pub fn released_high(self) -> bool {
        self.pin_state(false) == PinState::High
    }
}

/// Pump or valve switched by one GPIO
pub struct GpioActuator<P> {
    pin: P,
    polarity: Polarity,
    on: bool,
}

impl<P: OutputPin> GpioActuator<P> {
    /// Take over `pin` and drive it to the released level
    pub fn new(pin: P, polarity: Polarity) -> Self {
        let mut actuator = Self {
            pin,
            polarity,
            on: false,
        };
        actuator.set_on(false);
        actuator
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> ActuatorOutput for GpioActuator<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        // Every call reaches the pin, even when the state is unchanged.
        // Pin errors are infallible on the supported targets.
        let _ = self.pin.set_state(self.polarity.pin_state(on));
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
