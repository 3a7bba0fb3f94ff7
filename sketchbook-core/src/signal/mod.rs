//! Plotted signal sources and the source selection menu

mod menu;
mod waveform;

pub use menu::{FunctionMenu, MenuEvent};
pub use waveform::{Label, SignalParams, Waveform};
