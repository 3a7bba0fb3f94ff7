//! Sensor traits for the plotted sources

/// Errors that can occur while sampling a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// No echo before the timeout
    OutOfRange,
    /// Echo line never went low after the pulse started
    Stuck,
    /// ADC conversion error
    ConversionError,
}

/// Range finder reporting whole centimetres
pub trait DistanceSensor {
    fn distance_cm(&mut self) -> Result<u16, SensorError>;

    /// Distance as a plot sample, `-1` when nothing is in range
    fn sample(&mut self) -> i32 {
        self.distance_cm().map(i32::from).unwrap_or(-1)
    }
}

/// Raw 12-bit reading of an analog input
///
/// Takes `&mut self` because ADC reads typically require mutable access.
pub trait AnalogSource {
    fn read(&mut self) -> Result<u16, SensorError>;

    /// Reading as a plot sample, zero on conversion failure
    fn sample(&mut self) -> i32 {
        self.read().map(i32::from).unwrap_or(0)
    }
}
