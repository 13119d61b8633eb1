//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in risetide-core:
//!
//! - Actuator outputs (GPIO, active-high or active-low)
//! - Distance sensors (HC-SR04 style ultrasonic ranger)
//! - Text presentation on a small character display

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod display;
pub mod sensor;
