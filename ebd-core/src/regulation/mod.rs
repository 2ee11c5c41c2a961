//! Closed-loop current regulation

pub mod regulator;

pub use regulator::{adjust, RegulationState};
