//! GPIO allocation and pin adapters
//!
//! Tracks which GPIO pins are in use to prevent conflicts, and wraps esp-hal
//! pins in the `sketchbook-hal` traits.

use esp_hal::gpio::{Input, Output};
use heapless::FnvIndexSet;
use sketchbook_hal::{InputPin, OutputPin};

/// Number of GPIO numbers on the ESP32-S3 (0..=48, with gaps)
pub const GPIO_COUNT: usize = 49;

/// GPIOs that do not exist on the ESP32-S3
const MISSING: [u8; 4] = [22, 23, 24, 25];

/// Pin allocation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AllocError {
    /// No such GPIO on this chip
    InvalidPin(u8),
    /// Pin already claimed
    InUse(u8),
    /// Pin has no ADC channel
    NoAdc(u8),
}

/// Whether `pin` names a GPIO that exists on the ESP32-S3
pub fn is_valid_gpio(pin: u8) -> bool {
    (pin as usize) < GPIO_COUNT && !MISSING.contains(&pin)
}

/// GPIO allocator to track pin usage
pub struct GpioAllocator {
    allocated: FnvIndexSet<u8, 64>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Claim a GPIO pin
    pub fn allocate(&mut self, pin: u8) -> Result<(), AllocError> {
        if !is_valid_gpio(pin) {
            return Err(AllocError::InvalidPin(pin));
        }
        match self.allocated.insert(pin) {
            Ok(true) => Ok(()),
            Ok(false) => Err(AllocError::InUse(pin)),
            Err(_) => Err(AllocError::InvalidPin(pin)),
        }
    }

    pub fn release(&mut self, pin: u8) {
        self.allocated.remove(&pin);
    }

    pub fn is_allocated(&self, pin: u8) -> bool {
        self.allocated.contains(&pin)
    }

    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }
}

/// esp-hal output as a [`sketchbook_hal::OutputPin`]
pub struct EspOutput<'d>(pub Output<'d>);

impl OutputPin for EspOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// esp-hal input as a [`sketchbook_hal::InputPin`]
pub struct EspInput<'d>(pub Input<'d>);

impl InputPin for EspInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
