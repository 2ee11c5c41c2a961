//! RP2040 adapters for the analog inputs and the load drive

use defmt::*;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};

use ebd_core::traits::{AnalogChannel, AnalogInput, LoadDrive};

/// Blocking ADC with the three sense channels
pub struct BoardAdc<'d> {
    adc: Adc<'d, Blocking>,
    shunt: Channel<'d>,
    low_gain: Channel<'d>,
    high_gain: Channel<'d>,
    shift: u8,
}

impl<'d> BoardAdc<'d> {
    pub fn new(
        adc: Adc<'d, Blocking>,
        shunt: Channel<'d>,
        low_gain: Channel<'d>,
        high_gain: Channel<'d>,
        shift: u8,
    ) -> Self {
        Self {
            adc,
            shunt,
            low_gain,
            high_gain,
            shift,
        }
    }
}

impl AnalogInput for BoardAdc<'_> {
    /// Blocks until a conversion succeeds
    fn read(&mut self, channel: AnalogChannel) -> u16 {
        let ch = match channel {
            AnalogChannel::Shunt => &mut self.shunt,
            AnalogChannel::VoltageLowGain => &mut self.low_gain,
            AnalogChannel::VoltageHighGain => &mut self.high_gain,
        };

        loop {
            match self.adc.blocking_read(ch) {
                Ok(code) => return code >> self.shift,
                Err(e) => warn!("ADC read failed on {}: {}, retrying", channel, e),
            }
        }
    }
}

/// PWM slice channel A driving the load's op-amp stage
pub struct BoardDrive<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
}

impl<'d> BoardDrive<'d> {
    /// Take over a configured PWM slice
    ///
    /// `config.compare_a` is the duty in force until the first write.
    pub fn new(pwm: Pwm<'d>, config: PwmConfig) -> Self {
        Self { pwm, config }
    }
}

impl LoadDrive for BoardDrive<'_> {
    fn set_duty(&mut self, duty: u16) {
        // Compare above top holds the output high for the whole period
        self.config.compare_a = duty;
        self.pwm.set_config(&self.config);
    }
}
