//! Board-agnostic core logic for the electronic load firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (ADC, drive, fan, buttons, display, serial)
//! - Sampling, unit conversion and charge counting
//! - Operating mode state machine
//! - Current regulation
//! - Safety monitoring (low-voltage cutoff, fan)
//! - Telemetry encoding and display readout
//! - Configuration types and calibration constants

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod readout;
pub mod regulation;
pub mod safety;
pub mod sense;
pub mod state;
pub mod telemetry;
pub mod traits;

pub use controller::{Controller, Hardware, StepReport};
