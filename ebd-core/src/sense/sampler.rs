//! Moving-average sampler
//!
//! Keeps the last [`SAMPLE_WINDOW`] raw codes of every analog channel and
//! reports the truncating integer mean of each window.

use crate::config::calibration::SAMPLE_WINDOW;
use crate::traits::{AnalogChannel, AnalogInput};

/// Circular history of raw codes for one channel
///
/// Always holds exactly [`SAMPLE_WINDOW`] valid slots; slots that have not
/// been written yet read as zero.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    slots: [u16; SAMPLE_WINDOW],
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleWindow {
    /// Create a zero-filled window
    pub const fn new() -> Self {
        Self {
            slots: [0; SAMPLE_WINDOW],
        }
    }

    /// Overwrite the slot at `cursor`
    fn write(&mut self, cursor: usize, code: u16) {
        self.slots[cursor] = code;
    }

    /// Sum of all slots
    pub fn sum(&self) -> u32 {
        self.slots.iter().map(|&s| s as u32).sum()
    }

    /// Integer mean of all slots (truncating)
    pub fn mean(&self) -> u16 {
        (self.sum() / SAMPLE_WINDOW as u32) as u16
    }

    /// Raw slot contents
    pub fn slots(&self) -> &[u16; SAMPLE_WINDOW] {
        &self.slots
    }
}

/// Smoothed readings of the three channels for one iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelMeans {
    /// Shunt differential mean code
    pub shunt: u16,
    /// Low-gain voltage mean code
    pub low_gain: u16,
    /// High-gain voltage mean code
    pub high_gain: u16,
}

/// Sampler owning one window per channel and a shared write cursor
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    shunt: SampleWindow,
    low_gain: SampleWindow,
    high_gain: SampleWindow,
    cursor: usize,
}

impl Sampler {
    /// Create a sampler with empty (zeroed) windows
    pub const fn new() -> Self {
        Self {
            shunt: SampleWindow::new(),
            low_gain: SampleWindow::new(),
            high_gain: SampleWindow::new(),
            cursor: 0,
        }
    }

    /// Acquire one code per channel and return the smoothed readings
    ///
    /// Channels are read in [`AnalogChannel::ALL`] order. Each read blocks
    /// until the converter is ready.
    pub fn sample<A: AnalogInput>(&mut self, adc: &mut A) -> ChannelMeans {
        let cursor = self.cursor;
        for channel in AnalogChannel::ALL {
            let code = adc.read(channel);
            self.window_mut(channel).write(cursor, code);
        }
        self.cursor = (self.cursor + 1) % SAMPLE_WINDOW;

        self.means()
    }

    /// Current smoothed readings without acquiring
    pub fn means(&self) -> ChannelMeans {
        ChannelMeans {
            shunt: self.shunt.mean(),
            low_gain: self.low_gain.mean(),
            high_gain: self.high_gain.mean(),
        }
    }

    /// Window of a single channel
    pub fn window(&self, channel: AnalogChannel) -> &SampleWindow {
        match channel {
            AnalogChannel::Shunt => &self.shunt,
            AnalogChannel::VoltageLowGain => &self.low_gain,
            AnalogChannel::VoltageHighGain => &self.high_gain,
        }
    }

    /// Slot the next sample will overwrite
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn window_mut(&mut self, channel: AnalogChannel) -> &mut SampleWindow {
        match channel {
            AnalogChannel::Shunt => &mut self.shunt,
            AnalogChannel::VoltageLowGain => &mut self.low_gain,
            AnalogChannel::VoltageHighGain => &mut self.high_gain,
        }
    }
}
