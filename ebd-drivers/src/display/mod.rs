//! Seven-segment display

pub mod multiplexed;
pub mod segments;

pub use multiplexed::{MultiplexedDisplay, DEFAULT_STROBE_US};
