//! Oscilloscope-style plotting
//!
//! Samples are written into a fixed-size ring. Until the ring fills, each
//! new sample extends the trace with one segment. Once full, the plotter
//! either keeps overwriting in place (static mode) or redraws the whole
//! window from oldest to newest so the trace scrolls.

mod geometry;
mod plotter;
mod range;
mod ring;
mod scatter;

pub use geometry::{map_range, PlotGeometry};
pub use plotter::{AxisLabels, PlotFrame, PlotterOptions, TimePlotter, Trace};
pub use range::{RangePolicy, RunningStats};
pub use ring::{SampleRing, Slot, Window};
pub use scatter::{ScatterFrame, ScatterPlotter};

/// Largest number of points any plot layout keeps (one per horizontal pixel)
pub const PLOT_CAPACITY: usize = 320;

/// Full-scale reading of the 12-bit ADC, the ceiling for auto-ranging
pub const ADC_CEILING: i32 = 4095;

/// Plotter construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlotError {
    /// Layout needs more points than the ring can hold
    CapacityExceeded,
    /// Layout has zero width, height or step
    EmptyLayout,
}
