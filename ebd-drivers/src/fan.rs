//! GPIO fan output
//!
//! Drives the cooling fan through a transistor or MOSFET on a GPIO pin.

use ebd_core::traits::FanOutput;
use embedded_hal::digital::OutputPin;

/// GPIO fan output
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioFan<P> {
    pin: P,
    /// If true, fan ON = pin LOW
    inverted: bool,
    /// Current logical state (true = fan running)
    on: bool,
}

impl<P: OutputPin> GpioFan<P> {
    /// Create a new GPIO fan output, initially off
    ///
    /// - `inverted`: fan runs when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut fan = Self {
            pin,
            inverted,
            on: false,
        };
        fan.set_on(false);
        fan
    }

    /// Create a fan that runs when the pin is high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a fan that runs when the pin is low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> FanOutput for GpioFan<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        // Pin errors are ignored; MCU GPIO is infallible
        let _ = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
