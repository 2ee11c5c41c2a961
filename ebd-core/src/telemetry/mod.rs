//! Serial telemetry encoding

pub mod encoder;

pub use encoder::{TelemetryLine, TelemetryRecord, LINE_CAPACITY};
