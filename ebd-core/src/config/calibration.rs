//! Fixed calibration constants
//!
//! Conversion factors from raw 10-bit ADC codes to physical units for the
//! EBD-MINI analog front end, plus the PWM drive limits. These are board
//! properties, not runtime state.

/// Samples kept per analog channel for smoothing
pub const SAMPLE_WINDOW: usize = 12;

/// Full-scale value of the 10-bit acquisition codes
pub const ADC_MAX_CODE: u16 = 1023;

/// Shunt sense amplifier chain, microvolts per code step
pub const SHUNT_UV_PER_STEP: u32 = 68;

/// Shunt resistance in milliohms
pub const SHUNT_MILLIOHMS: u32 = 20;

/// Low-gain voltage path, millivolts per code step
pub const LOW_GAIN_MV_PER_STEP: u32 = 20;

/// High-gain voltage path, tenths of a millivolt per code step
pub const HIGH_GAIN_TENTH_MV_PER_STEP: u32 = 65;

/// Fixed offset subtracted from the high-gain reading (mV)
pub const HIGH_GAIN_OFFSET_MV: u32 = 20;

/// Highest low-gain reading (mV) at which the high-gain path is reported.
///
/// Inclusive: a low-gain reading of exactly this value selects high gain.
pub const GAIN_SWITCH_MV: u16 = 6000;

/// PWM reload value of the load drive timer
pub const PWM_PERIOD: u16 = 1024;

/// Duty value that holds the drive fully off (strictly above the period)
pub const DUTY_DISABLED: u16 = PWM_PERIOD + 1;

/// Lowest duty the regulator will step down to
pub const DUTY_MIN: u16 = 300;

/// Highest duty the regulator will step up to
pub const DUTY_MAX: u16 = 1000;

/// Duty the regulator starts from after power-up
pub const DUTY_INITIAL: u16 = 800;

/// Power above which the cooling fan runs (mW)
pub const FAN_POWER_THRESHOLD_MW: u16 = 2500;

/// Default low-voltage cutoff (mV)
pub const DEFAULT_LOW_VOLTAGE_CUTOFF_MV: u16 = 2000;

/// Default regulation target (mA)
pub const DEFAULT_TARGET_MA: u16 = 1000;
