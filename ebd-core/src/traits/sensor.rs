//! Analog acquisition traits

/// Logical analog channels sampled every loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogChannel {
    /// Differential voltage across the current shunt
    Shunt,
    /// Source voltage through the low-gain divider (full range)
    VoltageLowGain,
    /// Source voltage through the high-gain path (up to ~6 V)
    VoltageHighGain,
}

impl AnalogChannel {
    /// Acquisition order within one iteration
    pub const ALL: [AnalogChannel; 3] = [
        AnalogChannel::Shunt,
        AnalogChannel::VoltageLowGain,
        AnalogChannel::VoltageHighGain,
    ];
}

/// Trait for the analog-to-digital converter
///
/// A read selects the channel, starts a conversion and waits for it to
/// complete. There is no timeout: if the converter never finishes, the
/// caller stalls.
pub trait AnalogInput {
    /// Read one raw 10-bit code (0-1023) from `channel`
    ///
    /// Takes `&mut self` because ADC reads require mutable access.
    fn read(&mut self, channel: AnalogChannel) -> u16;
}
