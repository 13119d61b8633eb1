//! Phase definitions
//!
//! Actuator outputs are a pure function of the current phase.

/// Logical actuator outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorCommand {
    /// Fill valve/pump energized
    pub fill: bool,
    /// Drain valve/pump energized
    pub drain: bool,
}

impl ActuatorCommand {
    /// Both actuators off
    pub const fn off() -> Self {
        Self {
            fill: false,
            drain: false,
        }
    }

    pub fn is_off(&self) -> bool {
        !self.fill && !self.drain
    }
}

/// Cycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Pumping in until the surface reaches the high threshold
    Filling,
    /// Dwelling full for the hold duration
    HoldHigh,
    /// Pumping out until the surface reaches the low threshold
    Draining,
    /// Dwelling empty for the hold duration
    HoldLow,
}

impl Phase {
    /// Actuator outputs while in this phase
    pub fn outputs(self) -> ActuatorCommand {
        match self {
            Phase::Filling => ActuatorCommand {
                fill: true,
                drain: false,
            },
            Phase::Draining => ActuatorCommand {
                fill: false,
                drain: true,
            },
            Phase::HoldHigh | Phase::HoldLow => ActuatorCommand::off(),
        }
    }

    /// Phase that follows this one within a cycle
    pub fn next(self) -> Self {
        match self {
            Phase::Filling => Phase::HoldHigh,
            Phase::HoldHigh => Phase::Draining,
            Phase::Draining => Phase::HoldLow,
            Phase::HoldLow => Phase::Filling,
        }
    }

    /// Timed phase (exit on elapsed time rather than level)
    pub fn is_hold(self) -> bool {
        matches!(self, Phase::HoldHigh | Phase::HoldLow)
    }

    /// Short display label
    pub fn label(self) -> &'static str {
        match self {
            Phase::Filling => "FILL",
            Phase::HoldHigh => "HOLD HI",
            Phase::Draining => "DRAIN",
            Phase::HoldLow => "HOLD LO",
        }
    }
}
