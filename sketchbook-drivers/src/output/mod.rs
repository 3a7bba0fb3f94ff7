//! Output drivers

pub mod buzzer;
pub mod fader;

pub use buzzer::Buzzer;
pub use fader::LedFader;
