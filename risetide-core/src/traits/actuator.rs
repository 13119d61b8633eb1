//! Actuator output trait

/// Binary output driving a pump or valve
///
/// `on` is the logical state; electrical polarity is the implementation's
/// concern.
pub trait ActuatorOutput {
    /// Energize or release the actuator
    fn set_on(&mut self, on: bool);

    /// Check if the actuator is currently energized
    fn is_on(&self) -> bool;
}
