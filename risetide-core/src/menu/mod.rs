//! Settings menu

pub mod navigator;

pub use navigator::MenuNavigator;
