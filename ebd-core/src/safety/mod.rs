//! Safety monitoring
//!
//! Detects the under-voltage cutoff condition and decides the fan state.

pub mod monitor;
pub mod thermal;

pub use monitor::{SafetyMonitor, SafetyStatus};
pub use thermal::ThermalGuard;
