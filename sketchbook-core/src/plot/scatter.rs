//! Point-per-sample scatter plotter

use super::{PlotError, PlotGeometry, RangePolicy, RunningStats, SampleRing, PLOT_CAPACITY};

/// Drawing instructions produced by one [`ScatterPlotter::push`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScatterFrame {
    /// Clear the screen, then redraw the grid and labels
    pub clear: bool,
    pub x: i32,
    pub y: i32,
}

/// Scatter plotter that starts over at every wrap
#[derive(Debug, Clone)]
pub struct ScatterPlotter {
    geometry: PlotGeometry,
    heights: SampleRing<PLOT_CAPACITY>,
    policy: RangePolicy,
    stats: RunningStats,
    max_y: i32,
}

impl ScatterPlotter {
    pub fn new(geometry: PlotGeometry, policy: RangePolicy, initial_max_y: i32) -> Result<Self, PlotError> {
        geometry.validate(PLOT_CAPACITY)?;
        Ok(Self {
            geometry,
            heights: SampleRing::new(geometry.num_points())?,
            policy,
            stats: RunningStats::default(),
            max_y: initial_max_y.max(1),
        })
    }

    /// Feed one sample
    ///
    /// The sample is scaled against the axis in force when it arrived, even
    /// if this push triggers a re-range.
    pub fn push(&mut self, sample: i32) -> ScatterFrame {
        self.stats.record(sample);
        let height = self.geometry.normalise(sample, self.max_y);
        let slot = self.heights.push(height);

        let clear = slot.wrapped;
        if clear {
            self.max_y = self
                .policy
                .rerange(self.max_y, &self.stats, self.heights.len());
            self.stats.reset();
        }

        ScatterFrame {
            clear,
            x: self.geometry.screen_x(slot.write_index),
            y: self.geometry.y_datum + (self.geometry.y_height - height),
        }
    }

    pub fn geometry(&self) -> &PlotGeometry {
        &self.geometry
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> PlotGeometry {
        PlotGeometry {
            x_datum: 10,
            y_datum: 0,
            x_length: 3,
            y_height: 100,
            x_step: 1,
            x_tick: 1,
            y_tick: 10,
        }
    }

    #[test]
    fn test_pixels_advance_one_column() {
        let mut s = ScatterPlotter::new(tiny(), RangePolicy::Fixed, 200).unwrap();
        let a = s.push(100);
        let b = s.push(200);
        assert_eq!((a.x, a.y), (10, 50));
        assert_eq!((b.x, b.y), (11, 0));
        assert!(!a.clear && !b.clear);
    }

    #[test]
    fn test_wrap_clears_and_reranges() {
        let mut s = ScatterPlotter::new(tiny(), RangePolicy::SCATTER, 200).unwrap();
        for v in [100, 100, 100, 100] {
            s.push(v);
        }
        let frame = s.push(400);
        assert!(frame.clear);
        // drawn against the old axis, clamped to the top
        assert_eq!((frame.x, frame.y), (10, 0));
        // peak 400 + sum 800 / 4 points
        assert_eq!(s.max_y(), 600);
    }

    #[test]
    fn test_fixed_axis_holds() {
        let mut s = ScatterPlotter::new(tiny(), RangePolicy::Fixed, 200).unwrap();
        for v in 0..9 {
            s.push(v);
        }
        assert_eq!(s.max_y(), 200);
    }
}
