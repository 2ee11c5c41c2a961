//! Load state aggregate
//!
//! Everything the control loop knows about the load lives here. The
//! operating mode is private and only [`LoadState::change_mode`] writes it.

use crate::config::{LoadSettings, Thresholds};
use crate::regulation::RegulationState;
use crate::sense::{ChargeCounter, Measurement};

use super::events::ModeEvent;
use super::machine::{Action, DisplayMode, OperatingMode, Transition, TransitionError};

/// What dispatching an event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventOutcome {
    /// The mode changed
    Transitioned(Transition),
    /// The display advanced to the given mode
    DisplayCycled(DisplayMode),
    /// The event means nothing in the current mode
    Ignored,
}

/// Owned state of the electronic load
#[derive(Debug, Clone)]
pub struct LoadState {
    mode: OperatingMode,
    display: DisplayMode,
    measurement: Measurement,
    regulation: RegulationState,
    thresholds: Thresholds,
    charge: ChargeCounter,
    fan_on: bool,
}

impl LoadState {
    /// Create the power-on state: load off, showing volts
    pub fn new(settings: LoadSettings) -> Self {
        Self {
            mode: OperatingMode::Off,
            display: DisplayMode::default(),
            measurement: Measurement::default(),
            regulation: RegulationState::new(settings.target_ma),
            thresholds: settings.thresholds,
            charge: ChargeCounter::new(),
            fan_on: false,
        }
    }

    /// Request a mode change
    ///
    /// Rejected requests change nothing. Leaving `On` forces the drive to
    /// the disabled sentinel in the same call.
    pub fn change_mode(&mut self, to: OperatingMode) -> Result<Transition, TransitionError> {
        let from = self.mode;
        if !from.can_transition_to(to) {
            return Err(TransitionError { from, to });
        }

        if from.load_allowed() && !to.load_allowed() {
            self.regulation.disable();
        }
        self.mode = to;

        Ok(Transition { from, to })
    }

    /// Apply an event against the current mode
    pub fn dispatch(&mut self, event: ModeEvent) -> EventOutcome {
        match self.mode.action(event) {
            Some(Action::Transition(to)) => match self.change_mode(to) {
                Ok(transition) => EventOutcome::Transitioned(transition),
                Err(_) => EventOutcome::Ignored,
            },
            Some(Action::CycleDisplay) if self.mode.display_cycling_allowed() => {
                self.display = self.display.next();
                EventOutcome::DisplayCycled(self.display)
            }
            _ => EventOutcome::Ignored,
        }
    }

    /// Store this iteration's measurement
    ///
    /// Charge is integrated only while the load is on.
    pub fn update_measurement(&mut self, measurement: Measurement, elapsed_ms: u32) {
        self.measurement = measurement;
        if self.mode.load_allowed() {
            self.charge.accumulate(measurement.amps, elapsed_ms);
        }
    }

    /// Run one regulation step, returning true if the drive duty changed
    pub fn regulate(&mut self) -> bool {
        self.regulation.update(self.mode, self.measurement.amps)
    }

    pub fn mode(&self) -> OperatingMode {
        self.mode
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display
    }

    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    pub fn regulation(&self) -> &RegulationState {
        &self.regulation
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Accumulated charge (mAh)
    pub fn amp_hours(&self) -> u16 {
        self.charge.milliamp_hours()
    }

    pub fn fan_on(&self) -> bool {
        self.fan_on
    }

    pub(crate) fn set_fan(&mut self, on: bool) {
        self.fan_on = on;
    }
}

impl Default for LoadState {
    fn default() -> Self {
        Self::new(LoadSettings::default())
    }
}
