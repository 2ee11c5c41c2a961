//! Events that trigger mode changes

use crate::traits::Buttons;

/// Events that can trigger state machine actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeEvent {
    /// ON/start button held during this iteration
    StartPressed,
    /// SET/mode button held during this iteration
    ModePressed,
    /// Measured voltage fell below the low-voltage cutoff
    UnderVoltage,
}

impl ModeEvent {
    /// Button events for one poll, in handling order (start before mode)
    pub fn from_buttons(buttons: Buttons) -> impl Iterator<Item = ModeEvent> {
        let start = buttons.start.then_some(ModeEvent::StartPressed);
        let mode = buttons.mode.then_some(ModeEvent::ModePressed);
        start.into_iter().chain(mode)
    }
}
