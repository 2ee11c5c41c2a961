//! Load drive and fan output traits

/// Trait for the PWM stage that sets the load's sink current
///
/// The load is driven through an inverting op-amp stage: a lower duty
/// sinks more current. Any duty above the PWM period holds the output
/// fully off.
pub trait LoadDrive {
    /// Write a new duty value to the PWM compare register
    fn set_duty(&mut self, duty: u16);
}

/// Trait for the cooling fan output
///
/// Implementations control the fan via GPIO or a MOSFET.
pub trait FanOutput {
    /// Turn the fan on or off
    fn set_on(&mut self, on: bool);

    /// Check if the fan is currently on
    fn is_on(&self) -> bool;
}
