//! Operating mode state machine
//!
//! The mode is explicit, finite and deterministic. [`LoadState`] owns it
//! and is the only place it changes.

pub mod events;
pub mod load;
pub mod machine;

pub use events::ModeEvent;
pub use load::{EventOutcome, LoadState};
pub use machine::{Action, DisplayMode, OperatingMode, Transition, TransitionError};
