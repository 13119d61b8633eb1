//! Presentation implementations

pub mod text;

pub use text::TextPresenter;
