//! Display readout layout
//!
//! Lays a milli-unit value out over the four display cells: integer part
//! with the decimal point on its last digit, as many fraction digits as fit
//! before the unit cell, then the unit.

use crate::state::{DisplayMode, LoadState};
use crate::traits::{Glyph, SegmentDisplay, DISPLAY_CELLS};

/// One display cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    pub glyph: Glyph,
    pub decimal_point: bool,
}

impl Cell {
    const BLANK: Cell = Cell::plain(Glyph::Space);

    const fn plain(glyph: Glyph) -> Self {
        Self {
            glyph,
            decimal_point: false,
        }
    }
}

/// Contents of the whole display, leftmost cell first
pub type Readout = [Cell; DISPLAY_CELLS as usize];

/// Cell holding the unit glyph
const UNIT_POSITION: usize = DISPLAY_CELLS as usize - 1;

/// Lay out `value` (milli-units) followed by `unit`
pub fn layout(value: u16, unit: Glyph) -> Readout {
    let mut cells = [Cell::BLANK; DISPLAY_CELLS as usize];
    let units = value / 1000;
    let millis = value % 1000;

    let mut position = 0;
    if units >= 10 {
        cells[position] = Cell::plain(Glyph::digit(units / 10));
        position += 1;
    }
    cells[position] = Cell {
        glyph: Glyph::digit(units),
        decimal_point: true,
    };
    position += 1;

    for divisor in [100, 10, 1] {
        if position >= UNIT_POSITION {
            break;
        }
        cells[position] = Cell::plain(Glyph::digit(millis / divisor));
        position += 1;
    }

    cells[UNIT_POSITION] = Cell::plain(unit);
    cells
}

/// Readout for the current display mode
pub fn readout(state: &LoadState) -> Readout {
    let measurement = state.measurement();
    let (value, unit) = match state.display_mode() {
        DisplayMode::Volts if measurement.high_gain_active => (measurement.volts, Glyph::LittleV),
        DisplayMode::Volts => (measurement.volts, Glyph::V),
        DisplayMode::Amps => (measurement.amps, Glyph::A),
        DisplayMode::AmpHours => (state.amp_hours(), Glyph::Space),
        DisplayMode::Watts => (measurement.watts, Glyph::Space),
    };
    layout(value, unit)
}

/// Push a readout to the display, left to right
pub fn render<S: SegmentDisplay>(display: &mut S, cells: &Readout) {
    for (position, cell) in (0u8..).zip(cells.iter()) {
        display.render(position, cell.glyph, cell.decimal_point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sense::Measurement;
    use crate::state::ModeEvent;

    fn glyphs(cells: &Readout) -> [Glyph; 4] {
        cells.map(|c| c.glyph)
    }

    fn points(cells: &Readout) -> [bool; 4] {
        cells.map(|c| c.decimal_point)
    }

    #[test]
    fn test_single_integer_digit() {
        let cells = layout(5430, Glyph::V);
        assert_eq!(
            glyphs(&cells),
            [Glyph::Digit(5), Glyph::Digit(4), Glyph::Digit(3), Glyph::V]
        );
        assert_eq!(points(&cells), [true, false, false, false]);
    }

    #[test]
    fn test_two_integer_digits() {
        let cells = layout(12345, Glyph::LittleV);
        assert_eq!(
            glyphs(&cells),
            [Glyph::Digit(1), Glyph::Digit(2), Glyph::Digit(3), Glyph::LittleV]
        );
        assert_eq!(points(&cells), [false, true, false, false]);
    }

    #[test]
    fn test_zero_shows_leading_digit() {
        let cells = layout(0, Glyph::A);
        assert_eq!(
            glyphs(&cells),
            [Glyph::Digit(0), Glyph::Digit(0), Glyph::Digit(0), Glyph::A]
        );
        assert_eq!(points(&cells), [true, false, false, false]);
    }

    #[test]
    fn test_fraction_is_zero_padded() {
        let cells = layout(1050, Glyph::A);
        assert_eq!(
            glyphs(&cells),
            [Glyph::Digit(1), Glyph::Digit(0), Glyph::Digit(5), Glyph::A]
        );
    }

    #[test]
    fn test_interior_zero_kept() {
        let cells = layout(10_500, Glyph::Space);
        assert_eq!(
            glyphs(&cells),
            [Glyph::Digit(1), Glyph::Digit(0), Glyph::Digit(5), Glyph::Space]
        );
        assert_eq!(points(&cells), [false, true, false, false]);
    }

    #[test]
    fn test_largest_value() {
        let cells = layout(u16::MAX, Glyph::Space);
        assert_eq!(
            glyphs(&cells),
            [Glyph::Digit(6), Glyph::Digit(5), Glyph::Digit(5), Glyph::Space]
        );
    }

    #[test]
    fn test_units_per_mode() {
        let mut state = LoadState::default();
        state.update_measurement(
            Measurement {
                volts: 3300,
                amps: 250,
                watts: 825,
                high_gain_active: true,
            },
            0,
        );

        assert_eq!(readout(&state)[3].glyph, Glyph::LittleV);
        state.dispatch(ModeEvent::ModePressed);
        assert_eq!(readout(&state)[3].glyph, Glyph::A);
        assert_eq!(readout(&state)[0].glyph, Glyph::Digit(0));
        state.dispatch(ModeEvent::ModePressed);
        assert_eq!(readout(&state)[3].glyph, Glyph::Space);
        state.dispatch(ModeEvent::ModePressed);
        assert_eq!(
            glyphs(&readout(&state)),
            [Glyph::Digit(0), Glyph::Digit(8), Glyph::Digit(2), Glyph::Space]
        );
    }

    #[test]
    fn test_low_gain_volts_unit() {
        let mut state = LoadState::default();
        state.update_measurement(
            Measurement {
                volts: 12000,
                high_gain_active: false,
                ..Default::default()
            },
            0,
        );
        assert_eq!(readout(&state)[3].glyph, Glyph::V);
    }

    struct RecordingDisplay {
        calls: [(u8, Glyph, bool); 4],
        count: usize,
    }

    impl SegmentDisplay for RecordingDisplay {
        fn render(&mut self, position: u8, glyph: Glyph, decimal_point: bool) {
            self.calls[self.count] = (position, glyph, decimal_point);
            self.count += 1;
        }
    }

    #[test]
    fn test_render_left_to_right() {
        let mut display = RecordingDisplay {
            calls: [(0, Glyph::Space, false); 4],
            count: 0,
        };
        render(&mut display, &layout(5430, Glyph::V));

        assert_eq!(display.count, 4);
        assert_eq!(display.calls[0], (0, Glyph::Digit(5), true));
        assert_eq!(display.calls[3], (3, Glyph::V, false));
    }
}
