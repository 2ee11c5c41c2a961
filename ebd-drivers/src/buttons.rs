//! Front panel buttons
//!
//! Two momentary switches to ground with pull-ups. A button reads as
//! pressed for every poll during which its line is low; there is no
//! debouncing or edge detection.

use ebd_core::traits::{ButtonInput, Buttons};
use embedded_hal::digital::InputPin;

/// Start and mode buttons on active-low inputs
pub struct ActiveLowButtons<S, M> {
    start: S,
    mode: M,
}

impl<S: InputPin, M: InputPin> ActiveLowButtons<S, M> {
    pub fn new(start: S, mode: M) -> Self {
        Self { start, mode }
    }
}

/// A pin that cannot be read counts as released
fn pressed<P: InputPin>(pin: &mut P) -> bool {
    pin.is_low().unwrap_or(false)
}

impl<S: InputPin, M: InputPin> ButtonInput for ActiveLowButtons<S, M> {
    fn poll(&mut self) -> Buttons {
        Buttons {
            start: pressed(&mut self.start),
            mode: pressed(&mut self.mode),
        }
    }
}
