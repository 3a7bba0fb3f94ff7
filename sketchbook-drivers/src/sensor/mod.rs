//! Sensor drivers

pub mod analog;
pub mod ultrasonic;

pub use analog::AnalogPin;
pub use ultrasonic::{UltrasonicConfig, UltrasonicRanger};
