//! Collaborator traits
//!
//! These traits define the interface between the control logic and the
//! hardware-specific implementations of the sensor, actuators, display,
//! buzzer and diagnostic log.

pub mod actuator;
pub mod diagnostics;
pub mod presentation;
pub mod sensor;

pub use actuator::ActuatorOutput;
pub use diagnostics::DiagnosticLog;
pub use presentation::{CueSink, LineDisplay, Presentation, PresentationError};
pub use sensor::{DistanceSensor, SensorError};
