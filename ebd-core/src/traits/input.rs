//! Front-panel button trait

/// Button levels sampled once per loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons {
    /// ON/start button held
    pub start: bool,
    /// SET/mode button held
    pub mode: bool,
}

impl Buttons {
    /// No button held
    pub const RELEASED: Buttons = Buttons {
        start: false,
        mode: false,
    };
}

/// Trait for reading the front-panel buttons
///
/// Reports levels, not edges: a button held across several iterations is
/// reported as pressed on each of them. No debouncing is applied.
pub trait ButtonInput {
    /// Sample both buttons
    fn poll(&mut self) -> Buttons;
}
