//! LED brightness fader on a PWM channel

use sketchbook_core::fader::{FadeStep, Fader};
use sketchbook_hal::PwmOutput;

/// Drives a PWM output through the [`Fader`] ramp, one step per `tick`
pub struct LedFader<P> {
    pwm: P,
    fader: Fader,
}

impl<P: PwmOutput> LedFader<P> {
    /// `max_duty` is clamped to what the channel supports
    pub fn new(pwm: P, max_duty: u32) -> Self {
        let max_duty = max_duty.min(pwm.max_duty());
        Self {
            pwm,
            fader: Fader::new(max_duty),
        }
    }

    /// Apply the next step of the ramp and report it
    pub fn tick(&mut self) -> Result<FadeStep, P::Error> {
        let step = self.fader.next().unwrap_or(FadeStep::Hold);
        if let FadeStep::Duty(duty) = step {
            self.pwm.set_duty(duty)?;
        }
        Ok(step)
    }

    pub fn max_duty(&self) -> u32 {
        self.fader.max_duty()
    }

    pub fn off(&mut self) -> Result<(), P::Error> {
        self.pwm.off()
    }
}
