//! Button input handling
//!
//! Four active-low momentary buttons are sampled once per loop iteration.
//! Each sample is classified into no event, a press edge, or (for the two
//! adjustment buttons) an auto-repeat while held.

pub mod button;
pub mod debounce;

pub use button::{Button, ButtonLevels, InputEvent, PressKind};
pub use debounce::{ButtonInput, ButtonPad};
