//! Analog input abstractions

/// Errors reported by an ADC read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogError {
    /// Conversion did not complete
    ConversionFailed,
    /// Channel is not routed to an ADC unit
    InvalidChannel,
}

/// A single ADC channel
///
/// Readings are raw counts. The ESP32-S3 ADC is 12-bit, so full scale is
/// 4095 at the 11 dB attenuation used by the demos.
pub trait AnalogInput {
    /// Largest raw value this channel can return
    const FULL_SCALE: u16 = 4095;

    /// Take one blocking conversion
    ///
    /// Takes `&mut self` because ADC reads require exclusive access to the unit.
    fn read_raw(&mut self) -> Result<u16, AnalogError>;
}
