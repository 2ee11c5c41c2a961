//! Serial telemetry sink
//!
//! Writes encoded telemetry lines to any blocking `embedded-io` byte
//! transport (a UART TX half on the board).

use ebd_core::traits::TelemetrySink;
use embedded_io::{Error as _, ErrorKind, Write};

/// Serial transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    /// The transport accepted no bytes
    WriteZero,
    /// The transport reported an error
    Transport(ErrorKindTag),
}

/// Coarse transport error class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKindTag {
    Interrupted,
    TimedOut,
    Other,
}

impl From<ErrorKind> for ErrorKindTag {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Interrupted => ErrorKindTag::Interrupted,
            ErrorKind::TimedOut => ErrorKindTag::TimedOut,
            _ => ErrorKindTag::Other,
        }
    }
}

/// Telemetry sink over a byte writer
pub struct SerialTelemetry<W> {
    writer: W,
    lines_sent: u32,
}

impl<W: Write> SerialTelemetry<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_sent: 0,
        }
    }

    /// Lines fully written since creation
    pub fn lines_sent(&self) -> u32 {
        self.lines_sent
    }

    /// Release the underlying writer
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W: Write> TelemetrySink for SerialTelemetry<W> {
    type Error = SerialError;

    fn write_line(&mut self, line: &str) -> Result<(), SerialError> {
        let mut remaining = line.as_bytes();
        while !remaining.is_empty() {
            match self.writer.write(remaining) {
                Ok(0) => return Err(SerialError::WriteZero),
                Ok(n) => remaining = &remaining[n..],
                Err(e) => return Err(SerialError::Transport(e.kind().into())),
            }
        }
        self.writer
            .flush()
            .map_err(|e| SerialError::Transport(e.kind().into()))?;

        self.lines_sent = self.lines_sent.wrapping_add(1);
        Ok(())
    }
}
