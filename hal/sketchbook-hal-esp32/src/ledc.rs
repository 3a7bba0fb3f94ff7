//! LEDC duty output

use core::convert::Infallible;

use esp_hal::ledc::{
    channel::{Channel, ChannelHW},
    timer::config::Duty,
    LowSpeed,
};
use sketchbook_hal::PwmOutput;

/// Timer duty resolution for a bit count the S3 LEDC supports
pub fn duty_resolution(bits: u8) -> Option<Duty> {
    Some(match bits {
        1 => Duty::Duty1Bit,
        2 => Duty::Duty2Bit,
        3 => Duty::Duty3Bit,
        4 => Duty::Duty4Bit,
        5 => Duty::Duty5Bit,
        6 => Duty::Duty6Bit,
        7 => Duty::Duty7Bit,
        8 => Duty::Duty8Bit,
        9 => Duty::Duty9Bit,
        10 => Duty::Duty10Bit,
        11 => Duty::Duty11Bit,
        12 => Duty::Duty12Bit,
        13 => Duty::Duty13Bit,
        14 => Duty::Duty14Bit,
        _ => return None,
    })
}

/// Configured low-speed LEDC channel as a [`PwmOutput`]
///
/// Duties are raw timer counts, `0..=2^bits - 1`.
pub struct LedcPwm<'a> {
    channel: Channel<'a, LowSpeed>,
    resolution_bits: u8,
}

impl<'a> LedcPwm<'a> {
    /// `resolution_bits` must match the timer the channel was configured with
    pub fn new(channel: Channel<'a, LowSpeed>, resolution_bits: u8) -> Self {
        Self {
            channel,
            resolution_bits: resolution_bits.clamp(1, 14),
        }
    }
}

impl PwmOutput for LedcPwm<'_> {
    type Error = Infallible;

    fn max_duty(&self) -> u32 {
        (1 << self.resolution_bits) - 1
    }

    fn set_duty(&mut self, duty: u32) -> Result<(), Infallible> {
        self.channel.set_duty_hw(duty.min(self.max_duty()));
        Ok(())
    }
}
