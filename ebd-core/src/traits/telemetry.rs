//! Telemetry transport trait

/// Trait for the byte transport that carries telemetry lines
pub trait TelemetrySink {
    /// Error type for write operations
    type Error;

    /// Write one complete line, terminator included
    fn write_line(&mut self, line: &str) -> Result<(), Self::Error>;
}
