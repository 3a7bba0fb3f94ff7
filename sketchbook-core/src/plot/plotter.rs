//! Line plotter over a sample ring

use super::{PlotError, PlotGeometry, RangePolicy, RunningStats, SampleRing, PLOT_CAPACITY};
use crate::input::ButtonPair;

/// What to draw for the newest sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trace {
    /// First point of a pass, nothing to join to
    Pixel { x: i32, y: i32 },
    /// Line from the previous point
    Segment { from: (i32, i32), to: (i32, i32) },
    /// Redraw the whole ring, oldest to newest
    Window { start: usize, end: usize },
}

/// Drawing instructions produced by one [`TimePlotter::push`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlotFrame {
    /// Clear the plot area and redraw the grid before tracing
    pub redraw_grid: bool,
    /// The axis labels changed since they were last drawn
    pub axis_changed: bool,
    pub trace: Trace,
}

/// Vertical axis annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisLabels {
    /// `max`, `max / 2` and `0`
    Auto { max: i32 },
    /// `+amplitude`, `0` and `-amplitude`
    Symmetric { amplitude: i32 },
}

/// Start-up state of a [`TimePlotter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlotterOptions {
    pub initial_max_y: i32,
    /// Raise the axis as soon as a sample overflows it
    pub grow_on_overflow: bool,
    pub scrolling: bool,
    pub gridlines: bool,
    /// Symmetric label amplitude for fixed-range sources
    pub amplitude: i32,
}

impl Default for PlotterOptions {
    fn default() -> Self {
        Self {
            initial_max_y: 40,
            grow_on_overflow: true,
            scrolling: true,
            gridlines: false,
            amplitude: 1,
        }
    }
}

/// Circular-buffer time plotter
#[derive(Debug, Clone)]
pub struct TimePlotter {
    geometry: PlotGeometry,
    ring: SampleRing<PLOT_CAPACITY>,
    policy: RangePolicy,
    stats: RunningStats,
    max_y: i32,
    drawn_max_y: Option<i32>,
    grow_on_overflow: bool,
    scrolling: bool,
    gridlines: bool,
    amplitude: i32,
    prev: Option<(i32, i32)>,
}

impl TimePlotter {
    pub fn new(
        geometry: PlotGeometry,
        policy: RangePolicy,
        options: PlotterOptions,
    ) -> Result<Self, PlotError> {
        geometry.validate(PLOT_CAPACITY)?;
        Ok(Self {
            geometry,
            ring: SampleRing::new(geometry.num_points())?,
            policy,
            stats: RunningStats::default(),
            max_y: options.initial_max_y.max(1),
            drawn_max_y: None,
            grow_on_overflow: options.grow_on_overflow,
            scrolling: options.scrolling,
            gridlines: options.gridlines,
            amplitude: options.amplitude,
            prev: None,
        })
    }

    /// Feed one sample and the current button state
    pub fn push(&mut self, sample: i32, buttons: &ButtonPair) -> PlotFrame {
        let mut redraw_grid = false;

        if self.grow_on_overflow {
            if let Some(grown) = self.policy.grow(self.max_y, sample) {
                self.max_y = grown;
                redraw_grid = true;
            }
        }

        let slot = self.ring.push(sample);
        self.stats.record(sample);

        if buttons.left.just_released() {
            self.gridlines = true;
            self.scrolling = false;
            redraw_grid = true;
        } else if buttons.right.just_released() {
            self.gridlines = false;
            self.scrolling = true;
        }

        if slot.wrapped {
            self.max_y = self.policy.rerange(self.max_y, &self.stats, self.ring.len());
            if !self.scrolling {
                redraw_grid = true;
            }
            self.stats.reset();
            self.prev = None;
        }

        let point = (
            self.geometry.screen_x(slot.write_index),
            self.geometry.screen_y(sample, self.max_y),
        );

        let trace = if !self.scrolling || !slot.full {
            match self.prev {
                Some(from) => Trace::Segment { from, to: point },
                None => Trace::Pixel {
                    x: point.0,
                    y: point.1,
                },
            }
        } else {
            redraw_grid = true;
            Trace::Window {
                start: slot.start_index,
                end: slot.write_index,
            }
        };
        self.prev = Some(point);

        let axis_changed = redraw_grid && self.drawn_max_y != Some(self.max_y);
        if redraw_grid {
            self.drawn_max_y = Some(self.max_y);
        }

        PlotFrame {
            redraw_grid,
            axis_changed,
            trace,
        }
    }

    pub fn geometry(&self) -> &PlotGeometry {
        &self.geometry
    }

    pub fn ring(&self) -> &SampleRing<PLOT_CAPACITY> {
        &self.ring
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    pub fn scrolling(&self) -> bool {
        self.scrolling
    }

    pub fn gridlines(&self) -> bool {
        self.gridlines
    }

    pub fn axis_labels(&self) -> AxisLabels {
        if self.policy.is_auto() {
            AxisLabels::Auto { max: self.max_y }
        } else {
            AxisLabels::Symmetric {
                amplitude: self.amplitude,
            }
        }
    }

    /// Screen points of a window, oldest first
    pub fn window_points(&self, start: usize, end: usize) -> impl Iterator<Item = (i32, i32)> + '_ {
        let geometry = self.geometry;
        let max_y = self.max_y;
        self.ring
            .window(start, end)
            .enumerate()
            .map(move |(i, v)| (geometry.screen_x(i), geometry.screen_y(v, max_y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> ButtonPair {
        let mut b = ButtonPair::new();
        b.update(false, false);
        b
    }

    fn small_geometry() -> PlotGeometry {
        // 5 points
        PlotGeometry {
            x_datum: 0,
            y_datum: 0,
            x_length: 8,
            y_height: 40,
            x_step: 2,
            x_tick: 4,
            y_tick: 4,
        }
    }

    #[test]
    fn test_first_sample_is_pixel_then_segments() {
        let mut p = TimePlotter::new(small_geometry(), RangePolicy::Fixed, PlotterOptions::default())
            .unwrap();
        let b = idle();
        let first = p.push(20, &b);
        assert_eq!(first.trace, Trace::Pixel { x: 0, y: 20 });
        let second = p.push(40, &b);
        assert_eq!(
            second.trace,
            Trace::Segment {
                from: (0, 20),
                to: (2, 0)
            }
        );
    }

    #[test]
    fn test_scrolling_redraws_window_once_full() {
        let mut p = TimePlotter::new(small_geometry(), RangePolicy::Fixed, PlotterOptions::default())
            .unwrap();
        let b = idle();
        for v in 0..5 {
            assert!(!matches!(p.push(v, &b).trace, Trace::Window { .. }));
        }
        let frame = p.push(5, &b);
        assert!(frame.redraw_grid);
        assert_eq!(frame.trace, Trace::Window { start: 1, end: 0 });
        let values: Vec<i32> = p.ring().window(1, 0).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_static_mode_restarts_trace_at_wrap() {
        let options = PlotterOptions {
            scrolling: false,
            ..PlotterOptions::default()
        };
        let mut p = TimePlotter::new(small_geometry(), RangePolicy::Fixed, options).unwrap();
        let b = idle();
        for v in 0..5 {
            p.push(v, &b);
        }
        let frame = p.push(0, &b);
        assert!(frame.redraw_grid);
        assert_eq!(frame.trace, Trace::Pixel { x: 0, y: 40 });
    }

    #[test]
    fn test_left_release_freezes_scrolling() {
        let mut p = TimePlotter::new(small_geometry(), RangePolicy::Fixed, PlotterOptions::default())
            .unwrap();
        let mut b = ButtonPair::new();
        b.update(true, false);
        p.push(1, &b);
        b.update(false, false);
        let frame = p.push(1, &b);
        assert!(frame.redraw_grid);
        assert!(p.gridlines());
        assert!(!p.scrolling());

        b.update(false, true);
        p.push(1, &b);
        b.update(false, false);
        p.push(1, &b);
        assert!(p.scrolling());
        assert!(!p.gridlines());
    }

    #[test]
    fn test_growth_redraws_axis() {
        let mut p = TimePlotter::new(
            small_geometry(),
            RangePolicy::TIME_PLOT,
            PlotterOptions::default(),
        )
        .unwrap();
        let b = idle();
        let frame = p.push(100, &b);
        assert_eq!(p.max_y(), 120);
        assert!(frame.redraw_grid);
        assert!(frame.axis_changed);
        assert_eq!(p.axis_labels(), AxisLabels::Auto { max: 120 });

        let frame = p.push(10, &b);
        assert!(!frame.redraw_grid);
        assert!(!frame.axis_changed);
    }

    #[test]
    fn test_wrap_reranges_down() {
        let mut p = TimePlotter::new(
            small_geometry(),
            RangePolicy::TIME_PLOT,
            PlotterOptions {
                initial_max_y: 2000,
                ..PlotterOptions::default()
            },
        )
        .unwrap();
        let b = idle();
        for _ in 0..6 {
            p.push(10, &b);
        }
        assert_eq!(p.max_y(), 40);
    }

    #[test]
    fn test_fixed_labels_are_symmetric() {
        let options = PlotterOptions {
            amplitude: 2,
            ..PlotterOptions::default()
        };
        let p = TimePlotter::new(small_geometry(), RangePolicy::Fixed, options).unwrap();
        assert_eq!(p.axis_labels(), AxisLabels::Symmetric { amplitude: 2 });
    }

    #[test]
    fn test_window_points_step_across() {
        let mut p = TimePlotter::new(small_geometry(), RangePolicy::Fixed, PlotterOptions::default())
            .unwrap();
        let b = idle();
        for v in [0, 10, 20, 30, 40, 0] {
            p.push(v, &b);
        }
        let points: Vec<(i32, i32)> = p.window_points(1, 0).collect();
        assert_eq!(points, vec![(0, 30), (2, 20), (4, 10), (6, 0), (8, 40)]);
    }
}
