//! Thermal guard
//!
//! Runs the cooling fan while dissipation exceeds a fixed threshold. Pure
//! threshold with no hysteresis: readings hovering at the threshold toggle
//! the fan every iteration.

use crate::config::Thresholds;

/// Fan decision over the live thresholds
#[derive(Debug, Clone, Copy)]
pub struct ThermalGuard<'a> {
    thresholds: &'a Thresholds,
}

impl<'a> ThermalGuard<'a> {
    pub fn new(thresholds: &'a Thresholds) -> Self {
        Self { thresholds }
    }

    /// Fan state for the given dissipation (strictly above the threshold)
    pub fn evaluate(&self, watts: u16) -> bool {
        watts > self.thresholds.fan_power_threshold_mw
    }
}
