//! Screen renderers, one module per demo
//!
//! Renderers are stateless functions over a [`Canvas`](crate::Canvas). The
//! demo state in `sketchbook-core` decides what changed; these only draw it.

pub mod joystick;
pub mod menu;
pub mod music;
pub mod plot;
pub mod ripple;
pub mod rocket;
pub mod snake;
