//! Board-agnostic core logic for the Sketchbook demos
//!
//! Every demo is split into a pure state machine (this crate) and a thin
//! firmware loop that feeds it inputs and hands its output to a renderer.
//!
//! - Button edge tracking
//! - Circular-buffer time plotter with auto-ranging, scatter plotter
//! - Plotted signal sources and the source selection menu
//! - Joystick direction classifier
//! - LED fade sequence
//! - Tune sequencer and song catalogue
//! - Rocket ascent and snake games
//! - Water ripple simulation
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod fader;
pub mod input;
pub mod joystick;
pub mod music;
pub mod plot;
pub mod ripple;
pub mod rng;
pub mod rocket;
pub mod signal;
pub mod snake;
pub mod traits;
