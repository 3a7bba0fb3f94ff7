//! ADC channel management
//!
//! The ESP32-S3 has two 12-bit SAR ADCs with 10 channels each:
//! - ADC1: GPIO1..=GPIO10, channels 0-9
//! - ADC2: GPIO11..=GPIO20, channels 0-9
//!
//! ADC2 is shared with the radio; the demos do not use Wi-Fi, so both units
//! are available.

use sketchbook_hal::{AnalogError, AnalogInput};

use crate::gpio::AllocError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcUnit {
    Adc1,
    Adc2,
}

/// ADC unit and channel behind a GPIO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcChannel {
    pub unit: AdcUnit,
    pub channel: u8,
}

impl AdcChannel {
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        match gpio {
            1..=10 => Some(Self {
                unit: AdcUnit::Adc1,
                channel: gpio - 1,
            }),
            11..=20 => Some(Self {
                unit: AdcUnit::Adc2,
                channel: gpio - 11,
            }),
            _ => None,
        }
    }

    pub fn gpio(&self) -> u8 {
        match self.unit {
            AdcUnit::Adc1 => self.channel + 1,
            AdcUnit::Adc2 => self.channel + 11,
        }
    }

    fn slot(&self) -> usize {
        match self.unit {
            AdcUnit::Adc1 => self.channel as usize,
            AdcUnit::Adc2 => 10 + self.channel as usize,
        }
    }
}

/// ADC channel allocator
pub struct AdcAllocator {
    allocated: [bool; 20],
}

impl Default for AdcAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl AdcAllocator {
    pub fn new() -> Self {
        Self {
            allocated: [false; 20],
        }
    }

    /// Claim the channel behind `gpio`
    pub fn allocate(&mut self, gpio: u8) -> Result<AdcChannel, AllocError> {
        let channel = AdcChannel::from_gpio(gpio).ok_or(AllocError::NoAdc(gpio))?;
        let slot = &mut self.allocated[channel.slot()];
        if *slot {
            return Err(AllocError::InUse(gpio));
        }
        *slot = true;
        Ok(channel)
    }

    pub fn release(&mut self, channel: AdcChannel) {
        self.allocated[channel.slot()] = false;
    }

    pub fn is_allocated(&self, channel: AdcChannel) -> bool {
        self.allocated[channel.slot()]
    }
}

/// [`AnalogInput`] over a one-shot conversion
///
/// `F` is typically `move || adc.read_oneshot(&mut pin)`; the conversion is
/// polled until it completes.
pub struct BlockingAdc<F> {
    read: F,
}

impl<F> BlockingAdc<F>
where
    F: FnMut() -> nb::Result<u16, ()>,
{
    pub fn new(read: F) -> Self {
        Self { read }
    }
}

impl<F> AnalogInput for BlockingAdc<F>
where
    F: FnMut() -> nb::Result<u16, ()>,
{
    fn read_raw(&mut self) -> Result<u16, AnalogError> {
        let raw = nb::block!((self.read)()).map_err(|_| AnalogError::ConversionFailed)?;
        Ok(raw.min(Self::FULL_SCALE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_mapping() {
        assert_eq!(
            AdcChannel::from_gpio(10),
            Some(AdcChannel {
                unit: AdcUnit::Adc1,
                channel: 9
            })
        );
        assert_eq!(AdcChannel::from_gpio(11).map(|c| c.unit), Some(AdcUnit::Adc2));
        assert_eq!(AdcChannel::from_gpio(0), None);
        assert_eq!(AdcChannel::from_gpio(21), None);
        for gpio in 1..=20 {
            assert_eq!(AdcChannel::from_gpio(gpio).map(|c| c.gpio()), Some(gpio));
        }
    }

    #[test]
    fn test_allocator() {
        let mut alloc = AdcAllocator::new();
        let x = alloc.allocate(1).unwrap();
        assert!(alloc.is_allocated(x));
        assert_eq!(alloc.allocate(1), Err(AllocError::InUse(1)));
        assert_eq!(alloc.allocate(14).map(|c| c.channel), Ok(3));
        assert_eq!(alloc.allocate(38), Err(AllocError::NoAdc(38)));
        alloc.release(x);
        assert!(alloc.allocate(1).is_ok());
    }

    #[test]
    fn test_blocking_read_retries() {
        let mut polls = 0;
        let mut adc = BlockingAdc::new(move || {
            polls += 1;
            if polls < 3 {
                Err(nb::Error::WouldBlock)
            } else {
                Ok(2048)
            }
        });
        assert_eq!(adc.read_raw(), Ok(2048));
    }

    #[test]
    fn test_failed_conversion() {
        let mut adc = BlockingAdc::new(|| Err(nb::Error::Other(())));
        assert_eq!(adc.read_raw(), Err(AnalogError::ConversionFailed));
    }
}
