//! Time plot and scatter plot screens

use sketchbook_core::plot::{AxisLabels, PlotFrame, PlotGeometry, ScatterFrame, ScatterPlotter, TimePlotter, Trace};

use crate::{Canvas, Color565, Datum, DisplayError, TextStyle, SCREEN_HEIGHT};

/// Plot colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlotColours {
    pub background: Color565,
    pub gridlines: Color565,
    pub axis: Color565,
    pub data: Color565,
}

impl PlotColours {
    pub const DEFAULT: Self = Self {
        background: Color565::BLACK,
        gridlines: Color565::GRID,
        axis: Color565::SILVER,
        data: Color565::GOLD,
    };
}

impl Default for PlotColours {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Gap between the plot's left edge and the right end of its labels
const TIME_LABEL_PAD: i32 = 5;
const SCATTER_LABEL_PAD: i32 = 8;

/// Source title centred above the plot
pub fn draw_title<C: Canvas>(
    canvas: &mut C,
    geometry: &PlotGeometry,
    title: &str,
    colours: &PlotColours,
) -> Result<(), DisplayError> {
    let style = TextStyle::new(colours.axis)
        .on(colours.background)
        .datum(Datum::MiddleCentre);
    canvas.draw_text(title, geometry.centre_x(), 10, style)
}

/// Clear the plot area, then draw the optional gridlines and the frame
pub fn draw_grid<C: Canvas>(
    canvas: &mut C,
    geometry: &PlotGeometry,
    gridlines: bool,
    colours: &PlotColours,
) -> Result<(), DisplayError> {
    canvas.fill_rect(
        geometry.x_datum - 1,
        geometry.y_datum - 1,
        geometry.x_length + 2,
        geometry.y_height + 2,
        colours.background,
    )?;
    if gridlines {
        draw_gridlines(canvas, geometry, colours)?;
    }
    draw_frame_border(canvas, geometry, colours)
}

fn draw_gridlines<C: Canvas>(canvas: &mut C, g: &PlotGeometry, colours: &PlotColours) -> Result<(), DisplayError> {
    for i in 1..g.num_x_ticks() - 1 {
        canvas.draw_vline(g.x_datum + i * g.x_tick, g.y_datum, g.y_height, colours.gridlines)?;
    }
    for i in 1..g.num_y_ticks() - 1 {
        canvas.draw_hline(g.x_datum, g.y_datum + i * g.y_tick, g.x_length, colours.gridlines)?;
    }
    Ok(())
}

fn draw_frame_border<C: Canvas>(canvas: &mut C, g: &PlotGeometry, colours: &PlotColours) -> Result<(), DisplayError> {
    canvas.draw_rect(g.x_datum - 2, g.y_datum - 2, g.x_length + 4, g.y_height + 4, colours.axis)
}

fn draw_labels<C: Canvas>(
    canvas: &mut C,
    g: &PlotGeometry,
    labels: AxisLabels,
    pad: i32,
    colours: &PlotColours,
) -> Result<(), DisplayError> {
    let (top, middle, bottom) = match labels {
        AxisLabels::Auto { max } => (max, max / 2, 0),
        AxisLabels::Symmetric { amplitude } => (amplitude, 0, -amplitude),
    };
    let style = TextStyle::new(colours.axis)
        .on(colours.background)
        .datum(Datum::TopRight);
    let x = g.x_datum - pad;
    let y = g.y_datum - 3;
    canvas.draw_number(top, x, y, style)?;
    canvas.draw_number(middle, x, y + g.y_height / 2, style)?;
    canvas.draw_number(bottom, x, y + g.y_height, style)
}

/// Replace the vertical axis labels
pub fn draw_axis_labels<C: Canvas>(
    canvas: &mut C,
    geometry: &PlotGeometry,
    labels: AxisLabels,
    colours: &PlotColours,
) -> Result<(), DisplayError> {
    canvas.fill_rect(0, 0, geometry.x_datum - TIME_LABEL_PAD, SCREEN_HEIGHT, colours.background)?;
    draw_labels(canvas, geometry, labels, TIME_LABEL_PAD, colours)
}

/// Draw whatever one [`TimePlotter::push`] asked for
pub fn draw_time_frame<C: Canvas>(
    canvas: &mut C,
    plotter: &TimePlotter,
    frame: &PlotFrame,
    colours: &PlotColours,
) -> Result<(), DisplayError> {
    let geometry = plotter.geometry();
    if frame.redraw_grid {
        draw_grid(canvas, geometry, plotter.gridlines(), colours)?;
    }
    if frame.axis_changed {
        draw_axis_labels(canvas, geometry, plotter.axis_labels(), colours)?;
    }

    match frame.trace {
        Trace::Pixel { x, y } => canvas.draw_pixel(x, y, colours.data),
        Trace::Segment { from, to } => canvas.draw_line(from.0, from.1, to.0, to.1, colours.data),
        Trace::Window { start, end } => {
            let mut points = plotter.window_points(start, end);
            let Some(mut prev) = points.next() else {
                return Ok(());
            };
            for point in points {
                canvas.draw_line(prev.0, prev.1, point.0, point.1, colours.data)?;
                prev = point;
            }
            Ok(())
        }
    }
}

/// Full scatter screen: labels, gridlines and frame on a cleared screen
pub fn draw_scatter_grid<C: Canvas>(
    canvas: &mut C,
    geometry: &PlotGeometry,
    max_y: i32,
    colours: &PlotColours,
) -> Result<(), DisplayError> {
    canvas.fill_screen(colours.background)?;
    draw_labels(canvas, geometry, AxisLabels::Auto { max: max_y }, SCATTER_LABEL_PAD, colours)?;
    draw_gridlines(canvas, geometry, colours)?;
    draw_frame_border(canvas, geometry, colours)
}

/// Draw one [`ScatterPlotter::push`] result
pub fn draw_scatter_point<C: Canvas>(
    canvas: &mut C,
    plotter: &ScatterPlotter,
    frame: &ScatterFrame,
    colours: &PlotColours,
) -> Result<(), DisplayError> {
    if frame.clear {
        draw_scatter_grid(canvas, plotter.geometry(), plotter.max_y(), colours)?;
    }
    canvas.draw_pixel(frame.x, frame.y, colours.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Op, RecordingCanvas};
    use sketchbook_core::input::ButtonPair;
    use sketchbook_core::plot::{PlotterOptions, RangePolicy};

    fn plotter() -> TimePlotter {
        TimePlotter::new(PlotGeometry::SCROLLING, RangePolicy::TIME_PLOT, PlotterOptions::default()).unwrap()
    }

    #[test]
    fn test_grid_without_gridlines_is_clear_and_border() {
        let mut canvas = RecordingCanvas::new();
        draw_grid(&mut canvas, &PlotGeometry::SCROLLING, false, &PlotColours::DEFAULT).unwrap();
        assert_eq!(
            canvas.ops,
            vec![
                Op::FillRect {
                    x: 31,
                    y: 19,
                    w: 282,
                    h: 142,
                    color: Color565::BLACK
                },
                Op::Rect {
                    x: 30,
                    y: 18,
                    w: 284,
                    h: 144,
                    color: Color565::SILVER
                },
            ]
        );
    }

    #[test]
    fn test_gridlines_skip_the_edges() {
        let mut canvas = RecordingCanvas::new();
        draw_grid(&mut canvas, &PlotGeometry::SCROLLING, true, &PlotColours::DEFAULT).unwrap();
        // 21 x ticks and 11 y ticks, both ends dropped: 19 + 9 lines
        let gridlines = canvas
            .ops
            .iter()
            .filter(|op| matches!(op, Op::FillRect { color, .. } if *color == Color565::GRID))
            .count();
        assert_eq!(gridlines, 28);
    }

    #[test]
    fn test_auto_labels() {
        let mut canvas = RecordingCanvas::new();
        draw_axis_labels(
            &mut canvas,
            &PlotGeometry::SCROLLING,
            AxisLabels::Auto { max: 80 },
            &PlotColours::DEFAULT,
        )
        .unwrap();
        assert_eq!(canvas.texts(), vec!["80", "40", "0"]);
        match &canvas.ops[1] {
            Op::Text { x, y, style, .. } => {
                assert_eq!((*x, *y), (27, 17));
                assert_eq!(style.datum, Datum::TopRight);
            }
            op => panic!("unexpected {op:?}"),
        }
    }

    #[test]
    fn test_symmetric_labels() {
        let mut canvas = RecordingCanvas::new();
        draw_axis_labels(
            &mut canvas,
            &PlotGeometry::SCROLLING,
            AxisLabels::Symmetric { amplitude: 2 },
            &PlotColours::DEFAULT,
        )
        .unwrap();
        assert_eq!(canvas.texts(), vec!["2", "0", "-2"]);
    }

    #[test]
    fn test_first_samples_trace() {
        let mut plotter = plotter();
        let buttons = ButtonPair::new();
        let mut canvas = RecordingCanvas::new();

        let frame = plotter.push(10, &buttons);
        draw_time_frame(&mut canvas, &plotter, &frame, &PlotColours::DEFAULT).unwrap();
        let frame = plotter.push(20, &buttons);
        draw_time_frame(&mut canvas, &plotter, &frame, &PlotColours::DEFAULT).unwrap();

        assert_eq!(canvas.lines(), 1);
        assert!(canvas.ops.iter().any(|op| matches!(
            op,
            Op::FillRect { w: 1, h: 1, color, .. } if *color == Color565::GOLD
        )));
    }

    #[test]
    fn test_full_ring_redraws_window() {
        let mut plotter = plotter();
        let buttons = ButtonPair::new();
        let points = plotter.geometry().num_points();
        for i in 0..points {
            plotter.push(i as i32 % 30, &buttons);
        }

        let frame = plotter.push(5, &buttons);
        assert!(matches!(frame.trace, Trace::Window { .. }));
        let mut canvas = RecordingCanvas::new();
        draw_time_frame(&mut canvas, &plotter, &frame, &PlotColours::DEFAULT).unwrap();
        assert_eq!(canvas.lines(), points - 1);
    }

    #[test]
    fn test_scatter_wrap_clears_screen() {
        let mut plotter = ScatterPlotter::new(PlotGeometry::SCATTER, RangePolicy::Fixed, 200).unwrap();
        let mut canvas = RecordingCanvas::new();
        for i in 0..PlotGeometry::SCATTER.num_points() {
            let frame = plotter.push(i as i32 % 200);
            draw_scatter_point(&mut canvas, &plotter, &frame, &PlotColours::DEFAULT).unwrap();
        }
        assert!(!canvas.ops.contains(&Op::FillScreen(Color565::BLACK)));

        let frame = plotter.push(100);
        draw_scatter_point(&mut canvas, &plotter, &frame, &PlotColours::DEFAULT).unwrap();
        assert!(canvas.ops.contains(&Op::FillScreen(Color565::BLACK)));
        assert_eq!(canvas.texts(), vec!["200", "100", "0"]);
    }
}
