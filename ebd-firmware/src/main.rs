//! EBD Load - Electronic Load Firmware
//!
//! Main firmware binary for RP2040-based electronic load boards. Sets up
//! the peripherals, then runs the control loop forever in the main task.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_time::{Delay, Duration, Instant};
use {defmt_rtt as _, panic_probe as _};

use ebd_core::state::OperatingMode;
use ebd_core::traits::FanOutput;
use ebd_core::{Controller, Hardware, StepReport};
use ebd_drivers::buttons::ActiveLowButtons;
use ebd_drivers::display::MultiplexedDisplay;
use ebd_drivers::fan::GpioFan;
use ebd_drivers::serial::SerialTelemetry;

use crate::board::{BoardAdc, BoardDrive};
use crate::config::BoardConfig;

mod board;
mod config;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("EBD load firmware starting...");

    let board = BoardConfig::default();
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Load drive: held fully off (compare at top) until the regulator runs
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = board.pwm_top;
    pwm_config.compare_a = board.pwm_top;
    let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, pwm_config.clone());
    let drive = BoardDrive::new(pwm, pwm_config);

    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let adc = BoardAdc::new(
        adc,
        Channel::new_pin(p.PIN_26, Pull::None),
        Channel::new_pin(p.PIN_27, Pull::None),
        Channel::new_pin(p.PIN_28, Pull::None),
        board.adc_shift,
    );
    info!("ADC and load drive initialized");

    let mut uart_config = UartConfig::default();
    uart_config.baudrate = board.uart_baud;
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let (tx, _rx) = uart.split();
    let telemetry = SerialTelemetry::new(tx);
    info!("UART initialized at {} baud", board.uart_baud);

    let segments = [
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
    ];
    let selects = [
        Output::new(p.PIN_10, Level::High),
        Output::new(p.PIN_11, Level::High),
        Output::new(p.PIN_12, Level::High),
        Output::new(p.PIN_13, Level::High),
    ];
    let display = MultiplexedDisplay::new(segments, selects, Delay, board.strobe_us);

    let buttons = ActiveLowButtons::new(
        Input::new(p.PIN_14, Pull::Up),
        Input::new(p.PIN_15, Pull::Up),
    );

    let mut fan = GpioFan::new(Output::new(p.PIN_17, Level::Low), board.fan_inverted);
    // Spin the fan until the first step decides otherwise
    fan.set_on(true);

    let _led = Output::new(p.PIN_25, Level::High);
    info!("Front panel initialized");

    let mut hw = Hardware {
        adc,
        drive,
        fan,
        buttons,
        display,
        telemetry,
    };
    let mut controller = Controller::new(board.settings);
    info!(
        "Target {} mA, cutoff {} mV",
        board.settings.target_ma, board.settings.thresholds.low_voltage_cutoff_mv
    );

    let mut last_tick = Instant::now();
    let mut fan_on = true;

    loop {
        // Only whole milliseconds are consumed; the rest carries over
        let elapsed_ms = last_tick.elapsed().as_millis();
        last_tick += Duration::from_millis(elapsed_ms);

        let report = controller.step(&mut hw, elapsed_ms as u32);
        log_step(&report, &mut fan_on, controller.state().mode());
    }
}

fn log_step(report: &StepReport, fan_on: &mut bool, mode: OperatingMode) {
    for transition in report.transitions.iter() {
        match transition.to {
            OperatingMode::Lvc => warn!("Low-voltage cutoff at {} mV", report.measurement.volts),
            _ => info!("Mode {} -> {}", transition.from, transition.to),
        }
    }

    if report.fan_on != *fan_on {
        *fan_on = report.fan_on;
        debug!(
            "Fan {} at {} mW",
            if report.fan_on { "on" } else { "off" },
            report.measurement.watts
        );
    }

    if report.display_cycled {
        debug!("Display cycled");
    }

    if report.telemetry_failed {
        warn!("Telemetry write failed");
    }

    trace!("{} {}", mode, report.measurement);
}
