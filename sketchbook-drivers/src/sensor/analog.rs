//! Raw analog pin as a plot source

use sketchbook_core::traits::{AnalogSource, SensorError};
use sketchbook_hal::{AnalogError, AnalogInput};

/// Reports the ADC reading unchanged
pub struct AnalogPin<A> {
    adc: A,
}

impl<A: AnalogInput> AnalogPin<A> {
    pub fn new(adc: A) -> Self {
        Self { adc }
    }
}

impl<A: AnalogInput> AnalogSource for AnalogPin<A> {
    fn read(&mut self) -> Result<u16, SensorError> {
        self.adc.read_raw().map_err(|e| match e {
            AnalogError::ConversionFailed | AnalogError::InvalidChannel => {
                SensorError::ConversionError
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Adc(Result<u16, AnalogError>);

    impl AnalogInput for Adc {
        fn read_raw(&mut self) -> Result<u16, AnalogError> {
            self.0
        }
    }

    #[test]
    fn test_maps_errors() {
        assert_eq!(AnalogPin::new(Adc(Ok(1234))).read(), Ok(1234));
        assert_eq!(
            AnalogPin::new(Adc(Err(AnalogError::InvalidChannel))).read(),
            Err(SensorError::ConversionError)
        );
    }
}
