//! HC-SR04 ultrasonic ranger
//!
//! The sensor sits above the tank and measures the distance down to the
//! liquid surface. A 10 us trigger pulse starts a measurement; the width
//! of the echo pulse is the round-trip time of the sound.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use risetide_core::traits::{DistanceSensor, SensorError};

/// Longest wait for either echo edge
///
/// 30 ms covers the ranger's 4 m maximum with margin.
pub const DEFAULT_ECHO_TIMEOUT_US: u32 = 30_000;

/// Free-running microsecond counter
///
/// The counter may wrap; only differences are used.
pub trait MicrosClock {
    fn now_us(&self) -> u32;
}

/// Convert an echo pulse width to centimeters
///
/// Speed of sound is 0.034 cm/us and the pulse covers the distance twice,
/// so `cm = us * 0.034 / 2 = us * 17 / 1000`.
pub fn echo_us_to_cm(echo_us: u32) -> u16 {
    let cm = echo_us.saturating_mul(17) / 1000;
    cm.min(u16::MAX as u32) as u16
}

/// HC-SR04 driver
pub struct Hcsr04<T, E, D, C> {
    trigger: T,
    echo: E,
    delay: D,
    clock: C,
    timeout_us: u32,
}

impl<T, E, D, C> Hcsr04<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
    C: MicrosClock,
{
    /// Create a driver waiting at most `timeout_us` for each echo edge
    pub fn new(trigger: T, echo: E, delay: D, clock: C, timeout_us: u32) -> Self {
        Self {
            trigger,
            echo,
            delay,
            clock,
            timeout_us,
        }
    }

    /// Width of the next echo pulse in microseconds
    pub fn echo_width_us(&mut self) -> Result<u32, SensorError> {
        self.trigger.set_low().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(2);
        self.trigger.set_high().map_err(|_| SensorError::Pin)?;
        self.delay.delay_us(10);
        self.trigger.set_low().map_err(|_| SensorError::Pin)?;

        let rise = self.wait_for_level(true)?;
        let fall = self.wait_for_level(false)?;
        Ok(fall.wrapping_sub(rise))
    }

    /// Spin until the echo pin reads `high`, returning the time it did
    fn wait_for_level(&mut self, high: bool) -> Result<u32, SensorError> {
        let start = self.clock.now_us();
        loop {
            let level = self.echo.is_high().map_err(|_| SensorError::Pin)?;
            let now = self.clock.now_us();
            if level == high {
                return Ok(now);
            }
            if now.wrapping_sub(start) > self.timeout_us {
                return Err(SensorError::Timeout);
            }
        }
    }

    /// Give the pins and timing sources back
    pub fn release(self) -> (T, E, D, C) {
        (self.trigger, self.echo, self.delay, self.clock)
    }
}

impl<T, E, D, C> DistanceSensor for Hcsr04<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
    C: MicrosClock,
{
    fn measure_cm(&mut self) -> Result<u16, SensorError> {
        match echo_us_to_cm(self.echo_width_us()?) {
            0 => Err(SensorError::NoEcho),
            cm => Ok(cm),
        }
    }
}
