//! On-demand sampler for the two joystick axes.

use crate::mapping::JoystickSample;
use arduino_hal::hal::port::{PC0, PC1};
use arduino_hal::port::mode::Analog;
use arduino_hal::port::Pin;

pub struct Joystick {
    adc: arduino_hal::Adc,
    vrx: Pin<Analog, PC0>,
    vry: Pin<Analog, PC1>,
}

impl Joystick {
    pub fn new(adc: arduino_hal::Adc, vrx: Pin<Analog, PC0>, vry: Pin<Analog, PC1>) -> Self {
        Self { adc, vrx, vry }
    }

    /// Read both axes, X first — the ADC multiplexes a single channel at a
    /// time, so the order is fixed. The 10-bit conversions are widened into
    /// the 12-bit domain the mapping engine works in.
    pub fn read(&mut self) -> JoystickSample {
        let x = self.vrx.analog_read(&mut self.adc) << 2;
        let y = self.vry.analog_read(&mut self.adc) << 2;
        JoystickSample { x, y }
    }
}
