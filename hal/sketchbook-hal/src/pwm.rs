//! PWM duty-cycle output

/// A PWM channel with a fixed frequency and resolution
pub trait PwmOutput {
    /// Error type for duty updates
    type Error;

    /// Maximum duty value (`2^resolution - 1`)
    fn max_duty(&self) -> u32;

    /// Set the raw duty value, `0..=max_duty()`
    fn set_duty(&mut self, duty: u32) -> Result<(), Self::Error>;

    /// Turn the output fully off
    fn off(&mut self) -> Result<(), Self::Error> {
        self.set_duty(0)
    }
}
