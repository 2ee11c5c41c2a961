//! Load current regulator
//!
//! Rate-limited integrator on the drive duty: one step per loop iteration
//! toward the target, clamped to the regulating range. The drive stage is
//! inverting, so a lower duty sinks more current.

use crate::config::calibration::{DUTY_DISABLED, DUTY_INITIAL, DUTY_MAX, DUTY_MIN};
use crate::state::OperatingMode;

/// Regulator setpoint and output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegulationState {
    /// Target sink current (mA)
    target_ma: u16,
    /// Current drive duty, or [`DUTY_DISABLED`]
    drive_duty: u16,
}

impl RegulationState {
    /// Create a regulator tracking `target_ma`, starting from the initial duty
    pub const fn new(target_ma: u16) -> Self {
        Self {
            target_ma,
            drive_duty: DUTY_INITIAL,
        }
    }

    /// Target sink current (mA)
    pub fn target_ma(&self) -> u16 {
        self.target_ma
    }

    /// Current drive duty
    pub fn drive_duty(&self) -> u16 {
        self.drive_duty
    }

    /// Check if the drive is held fully off
    pub fn is_disabled(&self) -> bool {
        self.drive_duty == DUTY_DISABLED
    }

    /// Run one regulation step
    ///
    /// Does nothing outside [`OperatingMode::On`]. Returns true if the duty
    /// changed and must be written to the drive.
    pub fn update(&mut self, mode: OperatingMode, measured_ma: u16) -> bool {
        let duty = adjust(mode, measured_ma, self.target_ma, self.drive_duty);
        let changed = duty != self.drive_duty;
        self.drive_duty = duty;
        changed
    }

    /// Force the drive fully off
    ///
    /// Only the mode state machine calls this, when the load leaves `On`.
    pub(crate) fn disable(&mut self) {
        self.drive_duty = DUTY_DISABLED;
    }
}

/// One step of the bang-bang integrator
///
/// - below target and above the floor: step down (more current)
/// - above target and below the ceiling: step up (less current)
/// - otherwise hold
pub fn adjust(mode: OperatingMode, measured_ma: u16, target_ma: u16, duty: u16) -> u16 {
    if !mode.load_allowed() {
        return duty;
    }

    if measured_ma < target_ma {
        if duty > DUTY_MIN {
            return duty - 1;
        }
    } else if measured_ma > target_ma && duty < DUTY_MAX {
        return duty + 1;
    }

    duty
}
