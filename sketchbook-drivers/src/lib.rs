//! Peripheral drivers
//!
//! Concrete drivers written against the `sketchbook-hal` traits, feeding
//! the state machines in `sketchbook-core`:
//!
//! - Sensors (HC-SR04 style ultrasonic ranger, raw analog pin)
//! - Inputs (board buttons, analog joystick)
//! - Outputs (PWM LED fader, passive buzzer)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod input;
pub mod output;
pub mod sensor;
