//! Two-axis analog joystick with a click switch

use sketchbook_core::joystick::JoystickReading;
use sketchbook_hal::{AnalogError, AnalogInput, InputPin};

pub struct Joystick<X, Y, Z> {
    x: X,
    y: Y,
    click: Z,
}

impl<X: AnalogInput, Y: AnalogInput, Z: InputPin> Joystick<X, Y, Z> {
    pub fn new(x: X, y: Y, click: Z) -> Self {
        Self { x, y, click }
    }

    pub fn read(&mut self) -> Result<JoystickReading, AnalogError> {
        Ok(JoystickReading {
            x: self.x.read_raw()?,
            y: self.y.read_raw()?,
            click: self.click.is_high(),
        })
    }
}
