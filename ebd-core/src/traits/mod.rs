//! Hardware abstraction traits
//!
//! These traits define the interface between the control core and the
//! board-specific collaborators: ADC, PWM drive, fan, buttons, segment
//! display and the telemetry transport.

pub mod display;
pub mod input;
pub mod output;
pub mod sensor;
pub mod telemetry;

pub use display::{Glyph, SegmentDisplay, DISPLAY_CELLS};
pub use input::{ButtonInput, Buttons};
pub use output::{FanOutput, LoadDrive};
pub use sensor::{AnalogChannel, AnalogInput};
pub use telemetry::TelemetrySink;
