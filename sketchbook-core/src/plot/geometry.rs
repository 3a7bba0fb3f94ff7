//! Plot area layout and value-to-pixel mapping

use super::PlotError;

/// Integer linear rescale of `x` from `in_min..in_max` onto `out_min..out_max`
///
/// The division truncates toward zero. An empty input
/// range maps everything to `out_min`.
pub fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    let scaled = (x as i64 - in_min as i64) * (out_max as i64 - out_min as i64)
        / (in_max as i64 - in_min as i64);
    (scaled + out_min as i64) as i32
}

/// Position and spacing of a plot on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotGeometry {
    /// Left edge of the plot area
    pub x_datum: i32,
    /// Top edge of the plot area
    pub y_datum: i32,
    /// Width of the plot area
    pub x_length: i32,
    /// Height of the plot area
    pub y_height: i32,
    /// Horizontal pixels between samples
    pub x_step: i32,
    /// Spacing of vertical gridlines
    pub x_tick: i32,
    /// Spacing of horizontal gridlines
    pub y_tick: i32,
}

impl PlotGeometry {
    /// Scrolling plotter layout, four pixels per sample
    pub const SCROLLING: Self = Self {
        x_datum: 32,
        y_datum: 20,
        x_length: 280,
        y_height: 140,
        x_step: 4,
        x_tick: 14,
        y_tick: 14,
    };

    /// Buffered plotter layout with the title inside the plot area
    pub const BUFFERED: Self = Self {
        x_datum: 35,
        y_datum: 10,
        x_length: 270,
        y_height: 150,
        x_step: 2,
        x_tick: 15,
        y_tick: 15,
    };

    /// Scatter plot layout, one pixel per sample
    pub const SCATTER: Self = Self {
        x_datum: 35,
        y_datum: 10,
        x_length: 270,
        y_height: 150,
        x_step: 1,
        x_tick: 15,
        y_tick: 15,
    };

    /// Check that the layout is drawable and fits a ring of `capacity`
    pub fn validate(&self, capacity: usize) -> Result<(), PlotError> {
        if self.x_length <= 0
            || self.y_height <= 0
            || self.x_step <= 0
            || self.x_tick <= 0
            || self.y_tick <= 0
        {
            return Err(PlotError::EmptyLayout);
        }
        if self.num_points() > capacity {
            return Err(PlotError::CapacityExceeded);
        }
        Ok(())
    }

    /// Samples visible across the plot, both edges included
    pub const fn num_points(&self) -> usize {
        (self.x_length / self.x_step) as usize + 1
    }

    /// Vertical tick positions, both borders included
    pub const fn num_x_ticks(&self) -> i32 {
        self.x_length / self.x_tick + 1
    }

    /// Horizontal tick positions, both borders included
    pub const fn num_y_ticks(&self) -> i32 {
        self.y_height / self.y_tick + 1
    }

    /// Screen column of ring slot `slot`
    pub const fn screen_x(&self, slot: usize) -> i32 {
        self.x_datum + slot as i32 * self.x_step
    }

    /// Plot height of `value` on a `0..=max_y` axis, clamped to the area
    pub fn normalise(&self, value: i32, max_y: i32) -> i32 {
        map_range(value, 0, max_y, 0, self.y_height).clamp(0, self.y_height)
    }

    /// Screen row of `value` on a `0..=max_y` axis
    pub fn screen_y(&self, value: i32, max_y: i32) -> i32 {
        self.y_datum + (self.y_height - self.normalise(value, max_y))
    }

    /// Horizontal centre of the plot area
    pub const fn centre_x(&self) -> i32 {
        self.x_datum + self.x_length / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_truncates() {
        assert_eq!(map_range(50, 0, 100, 0, 140), 70);
        assert_eq!(map_range(1, 0, 3, 0, 10), 3);
        assert_eq!(map_range(-10, 0, 100, 0, 140), -14);
        assert_eq!(map_range(5, 3, 3, 7, 9), 7);
    }

    #[test]
    fn test_point_counts() {
        assert_eq!(PlotGeometry::SCROLLING.num_points(), 71);
        assert_eq!(PlotGeometry::BUFFERED.num_points(), 136);
        assert_eq!(PlotGeometry::SCATTER.num_points(), 271);
        assert_eq!(PlotGeometry::SCROLLING.num_x_ticks(), 21);
        assert_eq!(PlotGeometry::SCROLLING.num_y_ticks(), 11);
    }

    #[test]
    fn test_screen_y_is_clamped_to_area() {
        let g = PlotGeometry::SCROLLING;
        assert_eq!(g.screen_y(0, 40), 160);
        assert_eq!(g.screen_y(40, 40), 20);
        assert_eq!(g.screen_y(4000, 40), 20);
        assert_eq!(g.screen_y(-5, 40), 160);
        assert_eq!(g.screen_y(20, 40), 90);
    }

    #[test]
    fn test_validate() {
        assert!(PlotGeometry::SCATTER.validate(320).is_ok());
        assert_eq!(
            PlotGeometry::SCATTER.validate(100),
            Err(PlotError::CapacityExceeded)
        );
        let flat = PlotGeometry {
            x_step: 0,
            ..PlotGeometry::SCROLLING
        };
        assert_eq!(flat.validate(320), Err(PlotError::EmptyLayout));
    }
}
