//! Board pin assignments

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ConfigError, MAX_GPIO};

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO number
    pub pin: u8,
    /// Pin is active-low
    pub inverted: bool,
    /// Enable the internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Active-low input with pull-up, the usual push button wiring
    pub const fn button(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// GPIO assignment for the display board and the external parts
///
/// The display bus itself is fixed by the board and not configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    pub left_button: PinConfig,
    pub right_button: PinConfig,
    /// Pin sampled by the analog plot sources
    pub analog_input: u8,
    pub sonar_trigger: u8,
    pub sonar_echo: u8,
    pub buzzer: u8,
    pub led: u8,
    pub joystick_x: u8,
    pub joystick_y: u8,
    pub joystick_click: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            left_button: PinConfig::button(0),
            right_button: PinConfig::button(14),
            analog_input: 10,
            sonar_trigger: 1,
            sonar_echo: 2,
            buzzer: 1,
            led: 1,
            joystick_x: 1,
            joystick_y: 2,
            joystick_click: 3,
        }
    }
}

impl BoardConfig {
    /// Pins used together by the time plotter
    fn plot_pins(&self) -> [u8; 5] {
        [
            self.left_button.pin,
            self.right_button.pin,
            self.analog_input,
            self.sonar_trigger,
            self.sonar_echo,
        ]
    }

    /// Pins used together by the joystick tester
    fn joystick_pins(&self) -> [u8; 3] {
        [self.joystick_x, self.joystick_y, self.joystick_click]
    }

    /// Every pin must exist, and pins sharing a demo must differ
    ///
    /// Demos run one at a time, so the buzzer, the LED and the joystick may
    /// reuse the same GPIOs as each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = self
            .plot_pins()
            .into_iter()
            .chain(self.joystick_pins())
            .chain([self.buzzer, self.led]);
        for pin in all {
            if pin > MAX_GPIO {
                return Err(ConfigError::InvalidPin(pin));
            }
        }
        check_distinct(&self.plot_pins())?;
        check_distinct(&self.joystick_pins())
    }
}

fn check_distinct(pins: &[u8]) -> Result<(), ConfigError> {
    for (i, a) in pins.iter().enumerate() {
        if pins[i + 1..].contains(a) {
            return Err(ConfigError::PinConflict(*a));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_pin_config() {
        let b = PinConfig::button(14);
        assert!(b.inverted);
        assert!(b.pull_up);
        assert!(!PinConfig::new(3).inverted);
    }

    #[test]
    fn test_invalid_pin() {
        let config = BoardConfig {
            buzzer: 60,
            ..BoardConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidPin(60)));
    }

    #[test]
    fn test_joystick_pins_must_differ() {
        let config = BoardConfig {
            joystick_y: 1,
            ..BoardConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::PinConflict(1)));
    }
}
