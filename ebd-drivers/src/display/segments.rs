//! Seven-segment glyph table
//!
//! ```text
//!  aaa
//! f   b
//!  ggg
//! e   c
//!  ddd  .dp
//! ```
//!
//! Bit 0 is segment a through bit 6 for g; bit 7 is the decimal point.

use ebd_core::traits::Glyph;

pub const SEG_A: u8 = 1 << 0;
pub const SEG_B: u8 = 1 << 1;
pub const SEG_C: u8 = 1 << 2;
pub const SEG_D: u8 = 1 << 3;
pub const SEG_E: u8 = 1 << 4;
pub const SEG_F: u8 = 1 << 5;
pub const SEG_G: u8 = 1 << 6;
pub const SEG_DP: u8 = 1 << 7;

/// Number of segment lines, decimal point included
pub const SEGMENT_LINES: usize = 8;

const DIGITS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,         // 0
    SEG_E | SEG_F,                                         // 1, left-hand segments
    SEG_A | SEG_B | SEG_D | SEG_E | SEG_G,                 // 2
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,                 // 3
    SEG_B | SEG_C | SEG_F | SEG_G,                         // 4
    SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,                 // 5
    SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,         // 6
    SEG_A | SEG_B | SEG_C,                                 // 7
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G, // 8
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,         // 9
];

/// Segment pattern for a glyph, without the decimal point
pub fn pattern(glyph: Glyph) -> u8 {
    match glyph {
        Glyph::Digit(d) => DIGITS.get(d as usize).copied().unwrap_or(0),
        Glyph::A => SEG_A | SEG_B | SEG_C | SEG_E | SEG_F | SEG_G,
        Glyph::V => SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
        Glyph::LittleV => SEG_C | SEG_D | SEG_E,
        Glyph::Space => 0,
    }
}

/// Segment pattern with the decimal point flag applied
pub fn encode(glyph: Glyph, decimal_point: bool) -> u8 {
    let bits = pattern(glyph);
    if decimal_point {
        bits | SEG_DP
    } else {
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_lights_everything_but_the_point() {
        assert_eq!(pattern(Glyph::Digit(8)), 0x7F);
        assert_eq!(encode(Glyph::Digit(8), true), 0xFF);
    }

    #[test]
    fn test_space_is_dark() {
        assert_eq!(pattern(Glyph::Space), 0);
        assert_eq!(encode(Glyph::Space, true), SEG_DP);
    }

    #[test]
    fn test_no_digit_uses_the_point() {
        for d in 0..10 {
            assert_eq!(pattern(Glyph::Digit(d)) & SEG_DP, 0);
        }
    }

    #[test]
    fn test_units() {
        assert_eq!(pattern(Glyph::A), 0b0111_0111);
        assert_eq!(pattern(Glyph::V), 0b0011_1110);
        assert_eq!(pattern(Glyph::LittleV), 0b0001_1100);
    }

    #[test]
    fn test_out_of_range_digit_is_blank() {
        assert_eq!(pattern(Glyph::Digit(12)), 0);
    }
}
