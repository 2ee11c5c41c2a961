//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in ebd-core on top of `embedded-hal` and `embedded-io`:
//!
//! - Multiplexed four-digit seven-segment display
//! - Active-low start/mode buttons
//! - GPIO fan output
//! - Serial telemetry sink

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod display;
pub mod fan;
pub mod serial;
