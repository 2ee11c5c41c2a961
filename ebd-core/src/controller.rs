//! Control loop
//!
//! One call to [`Controller::step`] is one pass of the main loop:
//!
//! 1. sample all analog channels
//! 2. compute the measurement and integrate charge
//! 3. switch the fan
//! 4. automatic low-voltage cutoff
//! 5. regulate, write the drive if the duty changed
//! 6. emit the telemetry line
//! 7. poll the buttons and apply start, then mode
//! 8. write the drive if the duty changed
//! 9. render the display

use heapless::Vec;

use crate::config::calibration::DUTY_INITIAL;
use crate::config::LoadSettings;
use crate::readout;
use crate::safety::{SafetyMonitor, ThermalGuard};
use crate::sense::{Measurement, Sampler};
use crate::state::{EventOutcome, LoadState, ModeEvent, Transition};
use crate::telemetry::TelemetryRecord;
use crate::traits::{AnalogInput, ButtonInput, FanOutput, LoadDrive, SegmentDisplay, TelemetrySink};

/// Most transitions one step can apply: cutoff, start, mode
pub const MAX_TRANSITIONS_PER_STEP: usize = 3;

/// Board collaborators driven by the control loop
pub struct Hardware<A, L, F, B, S, T> {
    pub adc: A,
    pub drive: L,
    pub fan: F,
    pub buttons: B,
    pub display: S,
    pub telemetry: T,
}

/// What happened during one step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    /// Measurement computed this step
    pub measurement: Measurement,
    /// Mode changes in the order they were applied
    pub transitions: Vec<Transition, MAX_TRANSITIONS_PER_STEP>,
    /// The display mode advanced
    pub display_cycled: bool,
    /// Fan state written this step
    pub fan_on: bool,
    /// The drive duty was written at least once
    pub drive_written: bool,
    /// The telemetry line could not be encoded or sent
    pub telemetry_failed: bool,
}

/// Owns the sampler and load state, runs the loop body
pub struct Controller {
    sampler: Sampler,
    state: LoadState,
    /// Duty last written to the drive
    applied_duty: u16,
}

impl Controller {
    /// Create a controller in the power-on state
    ///
    /// The initial duty counts as applied, so nothing is written to the drive
    /// until the regulator first moves it.
    pub fn new(settings: LoadSettings) -> Self {
        Self {
            sampler: Sampler::new(),
            state: LoadState::new(settings),
            applied_duty: DUTY_INITIAL,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Mutable state access, for mode requests from outside the button path
    pub fn state_mut(&mut self) -> &mut LoadState {
        &mut self.state
    }

    /// Run one loop iteration
    pub fn step<A, L, F, B, S, T>(
        &mut self,
        hw: &mut Hardware<A, L, F, B, S, T>,
        elapsed_ms: u32,
    ) -> StepReport
    where
        A: AnalogInput,
        L: LoadDrive,
        F: FanOutput,
        B: ButtonInput,
        S: SegmentDisplay,
        T: TelemetrySink,
    {
        let mut report = StepReport::default();

        let means = self.sampler.sample(&mut hw.adc);
        let measurement = Measurement::compute(means);
        self.state.update_measurement(measurement, elapsed_ms);
        report.measurement = measurement;

        let fan_on = ThermalGuard::new(self.state.thresholds()).evaluate(measurement.watts);
        hw.fan.set_on(fan_on);
        self.state.set_fan(fan_on);
        report.fan_on = fan_on;

        // Cutoff runs before regulation so a disable is never undone
        let status =
            SafetyMonitor::new(self.state.thresholds()).check(self.state.mode(), &measurement);
        if let Some(event) = status.event() {
            self.apply(event, &mut report);
        }

        self.state.regulate();
        self.write_drive(&mut hw.drive, &mut report);

        if !self.emit_telemetry(&mut hw.telemetry) {
            report.telemetry_failed = true;
        }

        for event in ModeEvent::from_buttons(hw.buttons.poll()) {
            self.apply(event, &mut report);
        }
        self.write_drive(&mut hw.drive, &mut report);

        readout::render(&mut hw.display, &readout::readout(&self.state));

        report
    }

    fn apply(&mut self, event: ModeEvent, report: &mut StepReport) {
        match self.state.dispatch(event) {
            EventOutcome::Transitioned(transition) => {
                // Capacity covers every event one step can produce
                let _ = report.transitions.push(transition);
            }
            EventOutcome::DisplayCycled(_) => report.display_cycled = true,
            EventOutcome::Ignored => {}
        }
    }

    fn write_drive<L: LoadDrive>(&mut self, drive: &mut L, report: &mut StepReport) {
        let duty = self.state.regulation().drive_duty();
        if duty != self.applied_duty {
            drive.set_duty(duty);
            self.applied_duty = duty;
            report.drive_written = true;
        }
    }

    fn emit_telemetry<T: TelemetrySink>(&self, sink: &mut T) -> bool {
        match TelemetryRecord::capture(&self.state).encode() {
            Ok(line) => sink.write_line(&line).is_ok(),
            Err(_) => false,
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(LoadSettings::default())
    }
}
