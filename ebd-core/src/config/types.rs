//! Configuration type definitions
//!
//! User-adjustable load parameters. Nothing here is persisted: the values
//! start from their defaults at every power-up.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::calibration::{
    DEFAULT_LOW_VOLTAGE_CUTOFF_MV, DEFAULT_TARGET_MA, FAN_POWER_THRESHOLD_MW,
};

/// Protection thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Thresholds {
    /// Source voltage below which a running load cuts off (mV)
    pub low_voltage_cutoff_mv: u16,
    /// Dissipation above which the fan runs (mW)
    pub fan_power_threshold_mw: u16,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low_voltage_cutoff_mv: DEFAULT_LOW_VOLTAGE_CUTOFF_MV,
            fan_power_threshold_mw: FAN_POWER_THRESHOLD_MW,
        }
    }
}

/// Load configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadSettings {
    /// Current the regulator tracks while the load is on (mA)
    pub target_ma: u16,
    /// Protection thresholds
    pub thresholds: Thresholds,
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self {
            target_ma: DEFAULT_TARGET_MA,
            thresholds: Thresholds::default(),
        }
    }
}

impl LoadSettings {
    /// Settings with a custom target and cutoff, keeping the fan threshold
    pub const fn new(target_ma: u16, low_voltage_cutoff_mv: u16) -> Self {
        Self {
            target_ma,
            thresholds: Thresholds {
                low_voltage_cutoff_mv,
                fan_power_threshold_mw: FAN_POWER_THRESHOLD_MW,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = LoadSettings::default();
        assert_eq!(settings.target_ma, 1000);
        assert_eq!(settings.thresholds.low_voltage_cutoff_mv, 2000);
        assert_eq!(settings.thresholds.fan_power_threshold_mw, 2500);
    }

    #[test]
    fn test_new_keeps_fan_threshold() {
        let settings = LoadSettings::new(500, 3300);
        assert_eq!(settings.target_ma, 500);
        assert_eq!(settings.thresholds.low_voltage_cutoff_mv, 3300);
        assert_eq!(
            settings.thresholds.fan_power_threshold_mw,
            FAN_POWER_THRESHOLD_MW
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_roundtrip() {
        let settings = LoadSettings::new(1500, 2800);
        let mut buf = [0u8; 16];
        let bytes = postcard::to_slice(&settings, &mut buf).unwrap();
        let decoded: LoadSettings = postcard::from_bytes(bytes).unwrap();
        assert_eq!(decoded, settings);
    }
}
