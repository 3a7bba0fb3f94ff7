//! Per-demo settings

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::plot::PlotGeometry;
use crate::signal::{SignalParams, Waveform};

/// Time plotter settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotSettings {
    pub signal: SignalParams,
    /// Horizontal pixels per sample
    pub x_step: i32,
    /// Smallest axis top for measured sources
    pub min_y_range: i32,
    /// Start in scrolling mode
    pub scrolling: bool,
    pub gridlines: bool,
    /// Show the source menu at start-up
    pub user_select: bool,
    /// Source plotted when the menu is skipped
    pub waveform: Waveform,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            signal: SignalParams::default(),
            x_step: PlotGeometry::SCROLLING.x_step,
            min_y_range: 40,
            scrolling: true,
            gridlines: false,
            user_select: true,
            waveform: Waveform::AnalogRead,
        }
    }
}

impl PlotSettings {
    /// Scrolling layout with the configured sample spacing
    pub fn geometry(&self) -> PlotGeometry {
        PlotGeometry {
            x_step: self.x_step,
            ..PlotGeometry::SCROLLING
        }
    }
}

/// Scatter plotter settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScatterSettings {
    pub signal: SignalParams,
    /// First guess at the axis top
    pub initial_max_y: i32,
    pub waveform: Waveform,
}

impl Default for ScatterSettings {
    fn default() -> Self {
        Self {
            signal: SignalParams {
                alpha: 0.01,
                omega: 0.1,
                sample_period_ms: 80,
            },
            initial_max_y: 200,
            waveform: Waveform::CosineSineSum,
        }
    }
}

/// Ultrasonic ranger settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SonarSettings {
    /// Longest echo to wait for, about 200 cm at 11 500 µs
    pub timeout_us: u32,
}

impl Default for SonarSettings {
    fn default() -> Self {
        Self { timeout_us: 11_500 }
    }
}

/// LED fader settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaderSettings {
    pub frequency_hz: u32,
    pub resolution_bits: u8,
    pub max_duty: u32,
    pub step_ms: u32,
}

impl Default for FaderSettings {
    fn default() -> Self {
        Self {
            frequency_hz: 1000,
            resolution_bits: 8,
            max_duty: 30,
            step_ms: 100,
        }
    }
}
