//! Distance sensor trait

use crate::cycle::INVALID_DISTANCE;

/// Errors that can occur while measuring distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Echo did not arrive (or did not end) within the timeout
    Timeout,
    /// Echo arrived but converts to no usable distance
    NoEcho,
    /// Pin access failed
    Pin,
}

/// Trait for sensors measuring the distance to the liquid surface
///
/// Takes `&mut self` because a measurement drives pins and waits on them.
pub trait DistanceSensor {
    /// Measure the distance in whole centimeters
    fn measure_cm(&mut self) -> Result<u16, SensorError>;

    /// Measure, folding any failure into [`INVALID_DISTANCE`]
    fn measure_or_invalid(&mut self) -> u16 {
        self.measure_cm().unwrap_or(INVALID_DISTANCE)
    }
}
