//! Sensing pipeline
//!
//! Sampling with moving-average smoothing, conversion to physical units
//! with automatic range selection, and charge counting.

pub mod charge;
pub mod measurement;
pub mod sampler;

pub use charge::ChargeCounter;
pub use measurement::Measurement;
pub use sampler::{ChannelMeans, SampleWindow, Sampler};
