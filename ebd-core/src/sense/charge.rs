//! Charge counter
//!
//! Integrates sink current over time into milliamp-hours while the load
//! is on. Lives for the process lifetime only.

/// Milliamp-milliseconds in one milliamp-hour
const MA_MS_PER_MAH: u64 = 3_600_000;

/// Accumulated charge drawn from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChargeCounter {
    /// Total in mA·ms, carries the sub-mAh remainder between iterations
    total_ma_ms: u64,
}

impl ChargeCounter {
    /// Create an empty counter
    pub const fn new() -> Self {
        Self { total_ma_ms: 0 }
    }

    /// Add `amps` (mA) flowing for `elapsed_ms`
    pub fn accumulate(&mut self, amps: u16, elapsed_ms: u32) {
        self.total_ma_ms = self
            .total_ma_ms
            .saturating_add(amps as u64 * elapsed_ms as u64);
    }

    /// Whole milliamp-hours, saturated to `u16`
    pub fn milliamp_hours(&self) -> u16 {
        (self.total_ma_ms / MA_MS_PER_MAH).min(u16::MAX as u64) as u16
    }
}
