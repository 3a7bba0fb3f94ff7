//! Drawing abstraction and screen renderers for Sketchbook demos
//!
//! This crate provides:
//! - `Canvas` trait covering the primitives the demos draw with
//! - `Color565` palette matching the TFT colour constants
//! - `GraphicsCanvas`, a `Canvas` over any embedded-graphics `DrawTarget`
//! - One renderer module per demo under [`screens`]
//!
//! # Architecture
//!
//! Demo logic in `sketchbook-core` decides *what* changed each tick and hands
//! back plain data (plot frames, HUD values, spawned fruit). The renderers
//! here turn that data into `Canvas` calls, so they can be tested on the host
//! against a recording canvas while the firmware plugs in the real panel.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod color;
pub mod graphics;
pub mod screens;

#[cfg(test)]
mod recording;

pub use backend::{Canvas, Datum, DisplayError, FontSize, TextStyle};
pub use color::Color565;
pub use graphics::GraphicsCanvas;

/// Landscape panel width in pixels
pub const SCREEN_WIDTH: i32 = 320;
/// Landscape panel height in pixels
pub const SCREEN_HEIGHT: i32 = 170;
