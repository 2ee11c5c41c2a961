//! Seven-segment display trait

/// Number of character cells on the display
pub const DISPLAY_CELLS: u8 = 4;

/// Characters the four-digit segment display can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// Decimal digit 0-9
    Digit(u8),
    /// Capital A (amps)
    A,
    /// Capital V (volts, low-gain range)
    V,
    /// Lowercase v (volts, high-gain range)
    LittleV,
    /// Blank cell
    Space,
}

impl Glyph {
    /// Glyph for the least significant decimal digit of `value`
    pub const fn digit(value: u16) -> Self {
        Glyph::Digit((value % 10) as u8)
    }
}

/// Trait for the multiplexed segment display
///
/// The display is a dumb output: the core decides what every cell shows,
/// implementations only light the segments and handle strobe timing.
pub trait SegmentDisplay {
    /// Show `glyph` at `position` (0 = leftmost, 3 = rightmost)
    ///
    /// - `decimal_point`: light the cell's decimal point
    fn render(&mut self, position: u8, glyph: Glyph, decimal_point: bool);
}
