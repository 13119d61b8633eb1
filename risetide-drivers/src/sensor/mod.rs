//! Distance sensor implementations

pub mod ultrasonic;

pub use ultrasonic::{echo_us_to_cm, Hcsr04, MicrosClock, DEFAULT_ECHO_TIMEOUT_US};
