//! Board support shared by the Sketchbook demo binaries
//!
//! Every binary under `src/bin` is one demo. They share:
//! - Clock and scheduler start-up
//! - The LCD on its 8-bit parallel bus, in either orientation
//! - The two push buttons
//! - Sensors on the header pins
//! - The configuration embedded by `build.rs`
//! - A random source seeded from the hardware RNG

#![no_std]

pub mod board;
pub mod config;
pub mod display;
pub mod sensors;

pub use board::{halt, init, seeded_rng, start_scheduler, ButtonPin, Buttons, ButtonResources, LcdResources, Resources};
pub use display::{Layout, Lcd, LcdError, Screen};
