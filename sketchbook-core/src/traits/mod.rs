//! Hardware abstraction traits
//!
//! Seams between the demo logic and the drivers that feed it.

pub mod sensor;

pub use sensor::{AnalogSource, DistanceSensor, SensorError};
