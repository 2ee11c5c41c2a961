//! Multiplexed four-digit display driver
//!
//! All digits share the segment lines. Each render call latches one cell:
//! the segments are set, the cell's select line is pulled low for one
//! strobe period, then released and held off for another.

use ebd_core::traits::{Glyph, SegmentDisplay, DISPLAY_CELLS};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::segments::{encode, SEGMENT_LINES};

/// Default on/off time per cell (µs)
pub const DEFAULT_STROBE_US: u32 = 100;

/// Four-digit common-select segment display
pub struct MultiplexedDisplay<P, D> {
    /// Segment lines a..g then dp, active high
    segments: [P; SEGMENT_LINES],
    /// Cell select lines left to right, active low
    selects: [P; DISPLAY_CELLS as usize],
    delay: D,
    strobe_us: u32,
}

impl<P: OutputPin, D: DelayNs> MultiplexedDisplay<P, D> {
    /// Create a display with all cells deselected and segments dark
    pub fn new(
        segments: [P; SEGMENT_LINES],
        selects: [P; DISPLAY_CELLS as usize],
        delay: D,
        strobe_us: u32,
    ) -> Self {
        let mut display = Self {
            segments,
            selects,
            delay,
            strobe_us,
        };
        display.set_segments(0);
        for select in display.selects.iter_mut() {
            let _ = select.set_high();
        }
        display
    }

    fn set_segments(&mut self, bits: u8) {
        for (line, pin) in self.segments.iter_mut().enumerate() {
            let _ = if bits & (1 << line) != 0 {
                pin.set_high()
            } else {
                pin.set_low()
            };
        }
    }
}

impl<P: OutputPin, D: DelayNs> SegmentDisplay for MultiplexedDisplay<P, D> {
    fn render(&mut self, position: u8, glyph: Glyph, decimal_point: bool) {
        if position >= DISPLAY_CELLS {
            return;
        }

        // Pin errors are ignored; MCU GPIO is infallible
        self.set_segments(encode(glyph, decimal_point));

        let select = &mut self.selects[position as usize];
        let _ = select.set_low();
        self.delay.delay_us(self.strobe_us);
        let _ = select.set_high();
        self.delay.delay_us(self.strobe_us);
    }
}
