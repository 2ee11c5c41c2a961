//! Measurement engine
//!
//! Converts smoothed channel codes into current, voltage and power. The
//! source voltage is sensed through two parallel paths; the low-gain
//! reading always decides which one is reported.

use crate::config::calibration::{
    GAIN_SWITCH_MV, HIGH_GAIN_OFFSET_MV, HIGH_GAIN_TENTH_MV_PER_STEP, LOW_GAIN_MV_PER_STEP,
    SHUNT_MILLIOHMS, SHUNT_UV_PER_STEP,
};

use super::sampler::ChannelMeans;

/// One iteration's physical readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Source voltage (mV)
    pub volts: u16,
    /// Sink current (mA)
    pub amps: u16,
    /// Dissipated power (mW)
    pub watts: u16,
    /// The high-gain voltage path is being reported
    pub high_gain_active: bool,
}

impl Measurement {
    /// Compute a full measurement from smoothed channel codes
    pub fn compute(means: ChannelMeans) -> Self {
        let amps = shunt_to_milliamps(means.shunt);
        let low_gain_mv = low_gain_to_millivolts(means.low_gain);
        let high_gain_mv = high_gain_to_millivolts(means.high_gain);

        let high_gain_active = high_gain_selected(low_gain_mv);
        let volts = if high_gain_active {
            high_gain_mv
        } else {
            low_gain_mv
        };

        Self {
            volts,
            amps,
            watts: power_milliwatts(amps, volts),
            high_gain_active,
        }
    }
}

/// Shunt code to milliamps: µV per step over mΩ
pub fn shunt_to_milliamps(code: u16) -> u16 {
    narrow(code as u32 * SHUNT_UV_PER_STEP / SHUNT_MILLIOHMS)
}

/// Low-gain code to millivolts
pub fn low_gain_to_millivolts(code: u16) -> u16 {
    narrow(code as u32 * LOW_GAIN_MV_PER_STEP)
}

/// High-gain code to millivolts, offset removed
///
/// The offset saturates at zero for codes that scale below it.
pub fn high_gain_to_millivolts(code: u16) -> u16 {
    let tenths = code as u32 * HIGH_GAIN_TENTH_MV_PER_STEP;
    narrow((tenths / 10).saturating_sub(HIGH_GAIN_OFFSET_MV))
}

/// Range selection on the low-gain reading (inclusive at the switch point)
pub fn high_gain_selected(low_gain_mv: u16) -> bool {
    low_gain_mv <= GAIN_SWITCH_MV
}

/// Power in milliwatts, computed wide and saturated to `u16`
pub fn power_milliwatts(amps: u16, volts: u16) -> u16 {
    narrow(amps as u32 * volts as u32 / 1000)
}

fn narrow(value: u32) -> u16 {
    value.min(u16::MAX as u32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn means(shunt: u16, low_gain: u16, high_gain: u16) -> ChannelMeans {
        ChannelMeans {
            shunt,
            low_gain,
            high_gain,
        }
    }

    #[test]
    fn test_current_conversion() {
        // 68 µV / step across 20 mΩ
        assert_eq!(shunt_to_milliamps(0), 0);
        assert_eq!(shunt_to_milliamps(1), 3);
        assert_eq!(shunt_to_milliamps(300), 1020);
        assert_eq!(shunt_to_milliamps(1023), 3478);
    }

    #[test]
    fn test_gain_boundary_is_inclusive() {
        assert!(high_gain_selected(6000));
        assert!(!high_gain_selected(6001));
        assert!(high_gain_selected(0));
    }

    #[test]
    fn test_high_gain_reported_at_switch_point() {
        // 300 * 20 = 6000 mV on the low path selects high gain
        let m = Measurement::compute(means(0, 300, 900));
        assert!(m.high_gain_active);
        assert_eq!(m.volts, 900 * 65 / 10 - 20);
    }

    #[test]
    fn test_low_gain_reported_above_switch_point() {
        let m = Measurement::compute(means(0, 301, 900));
        assert!(!m.high_gain_active);
        assert_eq!(m.volts, 6020);
    }

    #[test]
    fn test_selector_ignores_high_gain_value() {
        // High path saturated while the low path is still in range
        let m = Measurement::compute(means(0, 250, 1023));
        assert!(m.high_gain_active);
        assert_eq!(m.volts, 6629);
    }

    #[test]
    fn test_high_gain_offset_saturates() {
        assert_eq!(high_gain_to_millivolts(0), 0);
        assert_eq!(high_gain_to_millivolts(3), 0);
        assert_eq!(high_gain_to_millivolts(4), 6);
    }

    #[test]
    fn test_power() {
        let m = Measurement::compute(means(300, 600, 0));
        // 1020 mA at 12000 mV
        assert_eq!(m.amps, 1020);
        assert_eq!(m.volts, 12000);
        assert_eq!(m.watts, 12240);
    }

    #[test]
    fn test_power_truncates() {
        assert_eq!(power_milliwatts(999, 1), 0);
        assert_eq!(power_milliwatts(1000, 2501), 2501);
    }

    #[test]
    fn test_power_saturates() {
        // 3478 mA at 20460 mV is ~71 W, beyond u16 milliwatts
        let m = Measurement::compute(means(1023, 1023, 0));
        assert_eq!(m.watts, u16::MAX);
    }
}
