//! ESP32-S3 HAL for the Sketchbook demos
//!
//! This crate provides ESP32-S3 implementations of the shared
//! `sketchbook-hal` traits, plus chip-specific helpers:
//!
//! - GPIO allocation for checking configured pins against the board
//! - ADC channel mapping and allocation
//! - LEDC duty output for LED dimming
//! - Square-wave tone task for passive buzzers
//! - Microsecond clock over the system timer
//! - The LilyGO T-Display-S3 pin map

#![no_std]

pub mod adc;
pub mod clock;
pub mod gpio;
pub mod ledc;
pub mod pins;
pub mod tone;

pub use adc::{AdcAllocator, AdcChannel, AdcUnit, BlockingAdc};
pub use clock::SystemClock;
pub use gpio::{AllocError, EspInput, EspOutput, GpioAllocator};
pub use ledc::LedcPwm;
pub use tone::{square_wave, ToneSignal, ToneSender};
