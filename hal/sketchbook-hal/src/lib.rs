//! Sketchbook Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the demo drivers are written
//! against. Chip-specific crates implement them on top of a vendor HAL, and
//! tests implement them with plain structs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  sketchbook-firmware (one bin per demo) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sketchbook-drivers                     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sketchbook-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sketchbook-hal-esp32                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`analog::AnalogInput`] - ADC sampling
//! - [`pwm::PwmOutput`] - Duty-cycle output (LED dimming)
//! - [`tone::ToneOutput`] - Square-wave tone generation (buzzers)
//! - [`clock::MicrosClock`] - Free-running microsecond counter

#![no_std]
#![deny(unsafe_code)]

pub mod analog;
pub mod clock;
pub mod gpio;
pub mod pwm;
pub mod tone;

// Re-export key traits at crate root for convenience
pub use analog::{AnalogError, AnalogInput};
pub use clock::MicrosClock;
pub use gpio::{InputPin, OutputPin};
pub use pwm::PwmOutput;
pub use tone::ToneOutput;
