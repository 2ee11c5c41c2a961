//! Telemetry line encoder
//!
//! One comma-separated line per control iteration:
//!
//! ```text
//! <mode>,<volts>,<amps>,<watts>,<target>,<cutoff>,<duty>\r\n
//! ```
//!
//! Every number is zero-padded to six digits.

use core::fmt::{self, Write};

use heapless::String;

use crate::regulation::RegulationState;
use crate::sense::Measurement;
use crate::state::{LoadState, OperatingMode};

/// Longest possible line: "lvc" + 6 six-digit fields + separators + CRLF
pub const LINE_CAPACITY: usize = 48;

/// Encoded telemetry line
pub type TelemetryLine = String<LINE_CAPACITY>;

/// Snapshot of the values reported on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryRecord {
    pub mode: OperatingMode,
    pub measurement: Measurement,
    pub regulation: RegulationState,
    pub low_voltage_cutoff_mv: u16,
}

impl TelemetryRecord {
    /// Capture the current state
    pub fn capture(state: &LoadState) -> Self {
        Self {
            mode: state.mode(),
            measurement: *state.measurement(),
            regulation: *state.regulation(),
            low_voltage_cutoff_mv: state.thresholds().low_voltage_cutoff_mv,
        }
    }

    /// Write the line into any formatter
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            "{},{:06},{:06},{:06},{:06},{:06},{:06}\r\n",
            self.mode.as_str(),
            self.measurement.volts,
            self.measurement.amps,
            self.measurement.watts,
            self.regulation.target_ma(),
            self.low_voltage_cutoff_mv,
            self.regulation.drive_duty(),
        )
    }

    /// Encode into a fixed-capacity line buffer
    pub fn encode(&self) -> Result<TelemetryLine, fmt::Error> {
        let mut line = TelemetryLine::new();
        self.write_to(&mut line)?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoadSettings;

    #[test]
    fn test_power_on_line() {
        let record = TelemetryRecord::capture(&LoadState::default());
        let line = record.encode().unwrap();
        assert_eq!(
            line.as_str(),
            "off,000000,000000,000000,001000,002000,000800\r\n"
        );
    }

    #[test]
    fn test_running_line() {
        let mut state = LoadState::new(LoadSettings::default());
        state.change_mode(OperatingMode::On).unwrap();
        state.update_measurement(
            Measurement {
                volts: 12000,
                amps: 1000,
                watts: 12000,
                high_gain_active: false,
            },
            0,
        );

        let line = TelemetryRecord::capture(&state).encode().unwrap();
        assert_eq!(
            line.as_str(),
            "on,012000,001000,012000,001000,002000,000800\r\n"
        );
    }

    #[test]
    fn test_mode_names() {
        let mut record = TelemetryRecord::capture(&LoadState::default());
        for (mode, prefix) in [
            (OperatingMode::Set, "set,"),
            (OperatingMode::Lvc, "lvc,"),
        ] {
            record.mode = mode;
            let line = record.encode().unwrap();
            assert!(line.starts_with(prefix));
        }
    }

    #[test]
    fn test_widest_line_fits() {
        let mut state = LoadState::default();
        state.change_mode(OperatingMode::On).unwrap();
        state.change_mode(OperatingMode::Lvc).unwrap();
        state.update_measurement(
            Measurement {
                volts: u16::MAX,
                amps: u16::MAX,
                watts: u16::MAX,
                high_gain_active: true,
            },
            0,
        );

        let line = TelemetryRecord::capture(&state).encode().unwrap();
        assert_eq!(
            line.as_str(),
            "lvc,065535,065535,065535,001000,002000,001025\r\n"
        );
        assert!(line.len() <= LINE_CAPACITY);
    }
}
