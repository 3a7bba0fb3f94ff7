//! Tone generation for passive buzzers

/// Square-wave output at an audible frequency
pub trait ToneOutput {
    /// Start (or retune) a 50% duty square wave at `freq_hz`
    fn play(&mut self, freq_hz: u32);

    /// Silence the output
    fn stop(&mut self);
}
