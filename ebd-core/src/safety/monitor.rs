//! Safety monitor implementation
//!
//! Watches the measured source voltage against the low-voltage cutoff.

use crate::config::Thresholds;
use crate::sense::Measurement;
use crate::state::{ModeEvent, OperatingMode};

/// Safety condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// All conditions normal
    Ok,
    /// Source voltage below the cutoff while the load is on
    UnderVoltage,
}

impl SafetyStatus {
    /// Event to feed the state machine, if any
    pub fn event(&self) -> Option<ModeEvent> {
        match self {
            SafetyStatus::Ok => None,
            SafetyStatus::UnderVoltage => Some(ModeEvent::UnderVoltage),
        }
    }
}

/// Safety monitor for the automatic cutoff
///
/// Borrows the thresholds it enforces, so a changed cutoff takes effect on
/// the next check.
#[derive(Debug, Clone, Copy)]
pub struct SafetyMonitor<'a> {
    thresholds: &'a Thresholds,
}

impl<'a> SafetyMonitor<'a> {
    /// Create a monitor over the live thresholds
    pub fn new(thresholds: &'a Thresholds) -> Self {
        Self { thresholds }
    }

    /// Check the latest measurement
    ///
    /// Only a running load can cut off; in every other mode the status is Ok.
    pub fn check(&self, mode: OperatingMode, measurement: &Measurement) -> SafetyStatus {
        if mode.load_allowed() && measurement.volts < self.thresholds.low_voltage_cutoff_mv {
            SafetyStatus::UnderVoltage
        } else {
            SafetyStatus::Ok
        }
    }
}
