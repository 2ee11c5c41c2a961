//! Operating mode state machine definition
//!
//! The load is only ever energized in [`OperatingMode::On`]. Every mode
//! change goes through one legality table, [`OperatingMode::can_transition_to`].

use super::events::ModeEvent;

/// Operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Load off, idle (power-on state)
    #[default]
    Off,
    /// Parameter adjustment, load off
    Set,
    /// Load on, current regulated
    On,
    /// Low-voltage cutoff triggered, load off until acknowledged
    Lvc,
}

/// Quantity shown on the segment display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    #[default]
    Volts,
    Amps,
    AmpHours,
    Watts,
}

impl DisplayMode {
    /// Next display mode, wrapping after watts
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Volts => DisplayMode::Amps,
            DisplayMode::Amps => DisplayMode::AmpHours,
            DisplayMode::AmpHours => DisplayMode::Watts,
            DisplayMode::Watts => DisplayMode::Volts,
        }
    }
}

/// What an event asks the state machine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Request a mode change
    Transition(OperatingMode),
    /// Advance the display mode (mode unchanged)
    CycleDisplay,
}

/// A mode change that was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: OperatingMode,
    pub to: OperatingMode,
}

/// A mode change that the legality table rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransitionError {
    pub from: OperatingMode,
    pub to: OperatingMode,
}

impl OperatingMode {
    /// Check if the load may be energized in this mode
    pub fn load_allowed(&self) -> bool {
        matches!(self, OperatingMode::On)
    }

    /// Check if the display mode may be cycled in this mode
    pub fn display_cycling_allowed(&self) -> bool {
        matches!(self, OperatingMode::Off)
    }

    /// Lowercase name used on the telemetry line
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingMode::Off => "off",
            OperatingMode::Set => "set",
            OperatingMode::On => "on",
            OperatingMode::Lvc => "lvc",
        }
    }

    /// Legality table for mode changes
    ///
    /// Exactly six changes are legal. Anything else, including staying in
    /// the same mode, is rejected.
    pub fn can_transition_to(self, to: OperatingMode) -> bool {
        use OperatingMode::*;

        matches!(
            (self, to),
            (Off, On) | (On, Off) | (On, Lvc) | (Lvc, Off) | (Off, Set) | (Set, Off)
        )
    }

    /// Map an event to the action it requests in this mode
    ///
    /// Returns `None` when the event means nothing in this mode.
    pub fn action(self, event: ModeEvent) -> Option<Action> {
        use ModeEvent::*;
        use OperatingMode::*;

        match (self, event) {
            // Start button toggles the load
            (Off, StartPressed) => Some(Action::Transition(On)),
            (On, StartPressed) => Some(Action::Transition(Off)),

            // Mode button acknowledges a cutoff, or cycles the display
            (Lvc, ModePressed) => Some(Action::Transition(Off)),
            (Off, ModePressed) => Some(Action::CycleDisplay),

            // Automatic cutoff
            (On, UnderVoltage) => Some(Action::Transition(Lvc)),

            // Default: nothing to do
            _ => None,
        }
    }
}
