//! Board configuration
//!
//! Pin assignments for the reference RP2040 board:
//!
//! | Function              | Pin            |
//! |-----------------------|----------------|
//! | Telemetry TX / RX     | GPIO0 / GPIO1  |
//! | Segments a..g, dp     | GPIO2..GPIO9   |
//! | Digit selects 0..3    | GPIO10..GPIO13 |
//! | Start / mode buttons  | GPIO14 / GPIO15|
//! | Load PWM (slice 0 A)  | GPIO16         |
//! | Fan                   | GPIO17         |
//! | Status LED            | GPIO25         |
//! | Shunt / low / high    | ADC0..ADC2 (GPIO26..GPIO28) |

use ebd_core::config::calibration::PWM_PERIOD;
use ebd_core::config::LoadSettings;
use ebd_drivers::display::DEFAULT_STROBE_US;

/// Runtime parameters for the board peripherals
#[derive(Debug, Clone, Copy)]
pub struct BoardConfig {
    /// Telemetry baud rate
    pub uart_baud: u32,
    /// PWM counter top; the drive sentinel sits one above this
    pub pwm_top: u16,
    /// Right shift taking raw ADC codes to the 10-bit calibration scale
    pub adc_shift: u8,
    /// Display on/off time per cell (µs)
    pub strobe_us: u32,
    /// Fan transistor runs when its pin is low
    pub fan_inverted: bool,
    /// Setpoint and cutoff thresholds
    pub settings: LoadSettings,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            uart_baud: 115_200,
            pwm_top: PWM_PERIOD,
            // RP2040 ADC is 12-bit
            adc_shift: 2,
            strobe_us: DEFAULT_STROBE_US,
            fan_inverted: false,
            settings: LoadSettings::default(),
        }
    }
}
