//! Actuator output implementations

pub mod gpio;

pub use gpio::{GpioActuator, Polarity};
