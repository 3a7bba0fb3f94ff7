//! Input drivers

pub mod buttons;
pub mod joystick;

pub use buttons::BoardButtons;
pub use joystick::Joystick;
