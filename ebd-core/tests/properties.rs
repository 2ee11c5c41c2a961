//! Property tests for the sensing, regulation and mode logic.
//!
//! Host only: the core is `no_std`, but these tests link std through proptest.

use ebd_core::config::calibration::{ADC_MAX_CODE, DUTY_DISABLED, DUTY_MAX, DUTY_MIN, SAMPLE_WINDOW};
use ebd_core::regulation::adjust;
use ebd_core::sense::Sampler;
use ebd_core::state::{LoadState, ModeEvent, OperatingMode};
use ebd_core::telemetry::TelemetryRecord;
use ebd_core::traits::{AnalogChannel, AnalogInput};
use proptest::prelude::*;

struct ConstantAdc(u16);

impl AnalogInput for ConstantAdc {
    fn read(&mut self, _channel: AnalogChannel) -> u16 {
        self.0
    }
}

fn arb_mode() -> impl Strategy<Value = OperatingMode> {
    prop_oneof![
        Just(OperatingMode::Off),
        Just(OperatingMode::Set),
        Just(OperatingMode::On),
        Just(OperatingMode::Lvc),
    ]
}

fn arb_event() -> impl Strategy<Value = ModeEvent> {
    prop_oneof![
        Just(ModeEvent::StartPressed),
        Just(ModeEvent::ModePressed),
        Just(ModeEvent::UnderVoltage),
    ]
}

// ── Smoothing ────────────────────────────────────────────────

proptest! {
    /// A constant input fills every window after one full pass.
    #[test]
    fn smoothing_converges_to_constant(code in 0u16..=ADC_MAX_CODE) {
        let mut sampler = Sampler::new();
        let mut adc = ConstantAdc(code);
        let mut means = sampler.sample(&mut adc);
        for _ in 1..SAMPLE_WINDOW {
            means = sampler.sample(&mut adc);
        }
        prop_assert_eq!(means.shunt, code);
        prop_assert_eq!(means.low_gain, code);
        prop_assert_eq!(means.high_gain, code);
        prop_assert_eq!(sampler.cursor(), 0);
    }

    /// The mean never exceeds the largest code seen.
    #[test]
    fn mean_is_bounded(codes in proptest::collection::vec(0u16..=ADC_MAX_CODE, 1..40)) {
        let mut sampler = Sampler::new();
        let max = codes.iter().copied().max().unwrap_or(0);
        for code in codes {
            let means = sampler.sample(&mut ConstantAdc(code));
            prop_assert!(means.shunt <= max);
        }
    }
}

// ── Regulation ───────────────────────────────────────────────

proptest! {
    /// One step moves the duty by at most one and never leaves the
    /// regulating range once inside it.
    #[test]
    fn regulation_steps_by_one(
        duty in DUTY_MIN..=DUTY_MAX,
        measured in any::<u16>(),
        target in any::<u16>(),
    ) {
        let next = adjust(OperatingMode::On, measured, target, duty);
        prop_assert!(next.abs_diff(duty) <= 1);
        prop_assert!((DUTY_MIN..=DUTY_MAX).contains(&next));
    }

    /// Outside ON the duty is never touched.
    #[test]
    fn regulation_idle_outside_on(
        mode in arb_mode(),
        duty in prop_oneof![DUTY_MIN..=DUTY_MAX, Just(DUTY_DISABLED)],
        measured in any::<u16>(),
    ) {
        prop_assume!(mode != OperatingMode::On);
        prop_assert_eq!(adjust(mode, measured, 1000, duty), duty);
    }
}

// ── Mode legality ────────────────────────────────────────────

proptest! {
    /// Any event sequence only ever produces legal transitions, and the
    /// drive is disabled whenever the load is not on.
    #[test]
    fn events_only_make_legal_transitions(
        events in proptest::collection::vec(arb_event(), 0..64),
    ) {
        let mut state = LoadState::default();
        let mut left_on = false;
        for event in events {
            let before = state.mode();
            let _ = state.dispatch(event);
            let after = state.mode();

            if before != after {
                prop_assert!(before.can_transition_to(after));
            }
            // Events never enter SET
            prop_assert_ne!(after, OperatingMode::Set);

            left_on |= before == OperatingMode::On && after != OperatingMode::On;
            if left_on && after != OperatingMode::On {
                prop_assert!(state.regulation().is_disabled());
            }
        }
    }

    /// Direct requests succeed exactly when the legality table allows them.
    #[test]
    fn change_mode_matches_table(targets in proptest::collection::vec(arb_mode(), 0..32)) {
        let mut state = LoadState::default();
        for to in targets {
            let from = state.mode();
            let result = state.change_mode(to);
            prop_assert_eq!(result.is_ok(), from.can_transition_to(to));
            if result.is_err() {
                prop_assert_eq!(state.mode(), from);
            }
        }
    }
}

// ── Telemetry ────────────────────────────────────────────────

proptest! {
    /// Every line has seven fields, six of them six digits wide.
    #[test]
    fn telemetry_fields_are_fixed_width(
        mode in arb_mode(),
        volts in any::<u16>(),
        amps in any::<u16>(),
        watts in any::<u16>(),
    ) {
        let mut record = TelemetryRecord::capture(&LoadState::default());
        record.mode = mode;
        record.measurement.volts = volts;
        record.measurement.amps = amps;
        record.measurement.watts = watts;

        let line = record.encode().unwrap();
        let body = line.strip_suffix("\r\n").unwrap();
        let fields: Vec<&str> = body.split(',').collect();

        prop_assert_eq!(fields.len(), 7);
        prop_assert_eq!(fields[0], mode.as_str());
        for field in &fields[1..] {
            prop_assert_eq!(field.len(), 6);
            prop_assert!(field.bytes().all(|b| b.is_ascii_digit()));
        }
        prop_assert_eq!(fields[1].parse::<u16>().unwrap(), volts);
    }
}
