//! Board-agnostic core logic for the Rise-Tide cycle controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Process settings with their clamping rules
//! - Button debouncing, edge detection and long-press auto-repeat
//! - Settings menu navigation
//! - The fill / hold / drain / hold cycle state machine
//! - Collaborator traits (distance sensor, actuators, presentation, log)
//! - The cooperative control loop tying everything together

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod cycle;
pub mod input;
pub mod menu;
pub mod presentation;
pub mod runner;
pub mod state;
pub mod traits;

pub use controller::{Controller, InputResponse};
pub use runner::ControlLoop;
