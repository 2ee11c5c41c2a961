//! Configuration
//!
//! Calibration constants and the user-adjustable load settings.

pub mod calibration;
pub mod types;

pub use types::*;
