//! embedded-graphics backend

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10, FONT_9X15},
        MonoFont, MonoTextStyleBuilder,
    },
    pixelcolor::{raw::RawU16, IntoStorage, Rgb565},
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::{Canvas, Color565, Datum, DisplayError, FontSize, TextStyle};

impl From<Color565> for Rgb565 {
    fn from(color: Color565) -> Self {
        RawU16::new(color.0).into()
    }
}

impl From<Rgb565> for Color565 {
    fn from(color: Rgb565) -> Self {
        Color565(color.into_storage())
    }
}

fn font(size: FontSize) -> &'static MonoFont<'static> {
    match size {
        FontSize::Small => &FONT_6X10,
        FontSize::Medium => &FONT_9X15,
        FontSize::Large => &FONT_10X20,
    }
}

fn placement(datum: Datum) -> (Alignment, Baseline) {
    match datum {
        Datum::TopLeft => (Alignment::Left, Baseline::Top),
        Datum::TopCentre => (Alignment::Center, Baseline::Top),
        Datum::TopRight => (Alignment::Right, Baseline::Top),
        Datum::MiddleLeft => (Alignment::Left, Baseline::Middle),
        Datum::MiddleCentre => (Alignment::Center, Baseline::Middle),
        Datum::MiddleRight => (Alignment::Right, Baseline::Middle),
        Datum::BottomLeft => (Alignment::Left, Baseline::Bottom),
        Datum::BottomCentre => (Alignment::Center, Baseline::Bottom),
        Datum::BottomRight => (Alignment::Right, Baseline::Bottom),
    }
}

fn area(x: i32, y: i32, w: i32, h: i32) -> Option<Rectangle> {
    if w <= 0 || h <= 0 {
        return None;
    }
    Some(Rectangle::new(Point::new(x, y), Size::new(w as u32, h as u32)))
}

/// [`Canvas`] over an RGB565 embedded-graphics target, e.g. a mipidsi panel
pub struct GraphicsCanvas<D> {
    target: D,
}

impl<D> GraphicsCanvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> Canvas for GraphicsCanvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn fill_screen(&mut self, color: Color565) -> Result<(), DisplayError> {
        self.target
            .clear(Rgb565::from(color))
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color565) -> Result<(), DisplayError> {
        let Some(rect) = area(x, y, w, h) else {
            return Ok(());
        };
        let rect = rect.intersection(&self.target.bounding_box());
        if rect.is_zero_sized() {
            return Ok(());
        }
        self.target
            .fill_solid(&rect, Rgb565::from(color))
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color565) -> Result<(), DisplayError> {
        let Some(rect) = area(x, y, w, h) else {
            return Ok(());
        };
        rect.into_styled(PrimitiveStyle::with_stroke(Rgb565::from(color), 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_round_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: i32,
        color: Color565,
    ) -> Result<(), DisplayError> {
        let Some(rect) = area(x, y, w, h) else {
            return Ok(());
        };
        let radius = radius.max(0) as u32;
        RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::from(color)))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color565) -> Result<(), DisplayError> {
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::from(color), 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) -> Result<(), DisplayError> {
        let mut character = MonoTextStyleBuilder::new()
            .font(font(style.size))
            .text_color(Rgb565::from(style.color));
        if let Some(background) = style.background {
            character = character.background_color(Rgb565::from(background));
        }
        let (alignment, baseline) = placement(style.datum);
        let layout = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(baseline)
            .build();

        Text::with_text_style(text, Point::new(x, y), character.build(), layout)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn canvas() -> GraphicsCanvas<MockDisplay<Rgb565>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        GraphicsCanvas::new(display)
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(Rgb565::from(Color565::RED), Rgb565::RED);
        assert_eq!(Rgb565::from(Color565::WHITE), Rgb565::WHITE);
        assert_eq!(Color565::from(Rgb565::BLUE), Color565::BLUE);
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut canvas = canvas();
        canvas.fill_rect(-2, -2, 4, 4, Color565::GOLD).unwrap();
        let display = canvas.target();
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(Rgb565::from(Color565::GOLD)));
        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(Rgb565::from(Color565::GOLD)));
        assert_eq!(display.get_pixel(Point::new(2, 2)), None);
    }

    #[test]
    fn test_empty_rect_draws_nothing() {
        let mut canvas = canvas();
        canvas.fill_rect(3, 3, 0, 5, Color565::RED).unwrap();
        canvas.draw_rect(3, 3, 5, -1, Color565::RED).unwrap();
        assert_eq!(canvas.target().get_pixel(Point::new(3, 3)), None);
    }

    #[test]
    fn test_line_and_pixel() {
        let mut canvas = canvas();
        canvas.draw_line(0, 0, 4, 0, Color565::WHITE).unwrap();
        canvas.draw_pixel(10, 10, Color565::GREEN).unwrap();
        let display = canvas.target();
        assert_eq!(display.get_pixel(Point::new(4, 0)), Some(Rgb565::WHITE));
        assert_eq!(display.get_pixel(Point::new(10, 10)), Some(Rgb565::GREEN));
    }

    #[test]
    fn test_text_with_background_paints_cells() {
        let mut canvas = canvas();
        canvas
            .draw_text("8", 0, 0, TextStyle::new(Color565::WHITE).on(Color565::BLACK))
            .unwrap();
        // Every cell of the 6x10 glyph box is painted in one of the two colours
        let display = canvas.target();
        for y in 0..10 {
            for x in 0..6 {
                assert!(display.get_pixel(Point::new(x, y)).is_some());
            }
        }
    }
}
