//! Configuration types
//!
//! Board-agnostic settings for every demo. The firmware embeds them as
//! postcard binary data produced from `sketchbook.toml` at build time.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ripple::RippleSettings;

/// Configuration rejected by [`SketchConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Two functions share one GPIO
    PinConflict(u8),
    /// GPIO number does not exist on the chip
    InvalidPin(u8),
    /// Plot layout cannot be drawn
    PlotLayout,
    /// Sample period of zero
    ZeroPeriod,
    /// Ripple surface does not fit the screen
    RippleSize,
    /// PWM resolution outside 1..=14 bits or duty above it
    FaderRange,
}

/// Complete configuration for all demos
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SketchConfig {
    pub board: BoardConfig,
    pub plot: PlotSettings,
    pub scatter: ScatterSettings,
    pub sonar: SonarSettings,
    pub fader: FaderSettings,
    pub ripple: RippleSettings,
}

/// Highest GPIO number on the ESP32-S3
pub const MAX_GPIO: u8 = 48;

/// Largest ripple surface, in cells; anything past the screen edge is clipped
const RIPPLE_MAX: (usize, usize) = (180, 95);

impl SketchConfig {
    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;

        let geometry = self.plot.geometry();
        geometry
            .validate(crate::plot::PLOT_CAPACITY)
            .map_err(|_| ConfigError::PlotLayout)?;
        if self.plot.signal.sample_period_ms == 0
            || self.scatter.signal.sample_period_ms == 0
            || self.fader.step_ms == 0
        {
            return Err(ConfigError::ZeroPeriod);
        }

        let r = &self.ripple;
        if r.width < 41
            || r.height < 41
            || r.width > RIPPLE_MAX.0
            || r.height > RIPPLE_MAX.1
            || r.damping_shift == 0
            || r.damping_shift > 15
        {
            return Err(ConfigError::RippleSize);
        }

        let f = &self.fader;
        if f.resolution_bits == 0
            || f.resolution_bits > 14
            || f.max_duty >= (1u32 << f.resolution_bits)
        {
            return Err(ConfigError::FaderRange);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Waveform;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(SketchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_defaults_match_board() {
        let c = SketchConfig::default();
        assert_eq!(c.board.left_button.pin, 0);
        assert_eq!(c.board.right_button.pin, 14);
        assert_eq!(c.board.analog_input, 10);
        assert_eq!(c.plot.x_step, 4);
        assert_eq!(c.plot.waveform, Waveform::AnalogRead);
        assert_eq!(c.scatter.signal.sample_period_ms, 80);
        assert_eq!(c.sonar.timeout_us, 11_500);
        assert_eq!(c.fader.max_duty, 30);
        assert_eq!(c.ripple, RippleSettings::CALM);
    }

    #[test]
    fn test_pin_conflict() {
        let mut c = SketchConfig::default();
        c.board.sonar_echo = c.board.analog_input;
        assert_eq!(c.validate(), Err(ConfigError::PinConflict(10)));
    }

    #[test]
    fn test_bad_sections() {
        let mut c = SketchConfig::default();
        c.plot.x_step = 0;
        assert_eq!(c.validate(), Err(ConfigError::PlotLayout));

        let mut c = SketchConfig::default();
        c.fader.max_duty = 256;
        assert_eq!(c.validate(), Err(ConfigError::FaderRange));

        let mut c = SketchConfig::default();
        c.ripple.width = 400;
        assert_eq!(c.validate(), Err(ConfigError::RippleSize));

        let mut c = SketchConfig::default();
        c.scatter.signal.sample_period_ms = 0;
        assert_eq!(c.validate(), Err(ConfigError::ZeroPeriod));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_round_trip() {
        let config = SketchConfig::default();
        let bytes = postcard::to_allocvec(&config).unwrap();
        let decoded: SketchConfig = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, config);
    }
}
