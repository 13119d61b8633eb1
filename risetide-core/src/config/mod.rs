//! Configuration types
//!
//! Process settings adjusted from the menu, and the timing constants
//! that shape input handling and display refresh. Nothing here is
//! persisted; every power-up starts from compiled-in defaults.

pub mod settings;
pub mod timing;

pub use settings::*;
pub use timing::*;
