//! Canvas trait
//!
//! Defines the drawing primitives every renderer is written against.

use core::fmt::Write;

use crate::Color565;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Text did not fit the formatting buffer
    BufferOverflow,
}

/// Glyph size, from the status-line font up to end-screen headlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    #[default]
    Small,
    Medium,
    Large,
}

/// Which point of the text box `(x, y)` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Datum {
    #[default]
    TopLeft,
    TopCentre,
    TopRight,
    MiddleLeft,
    MiddleCentre,
    MiddleRight,
    BottomLeft,
    BottomCentre,
    BottomRight,
}

/// How to draw a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    pub color: Color565,
    /// Paint the glyph cells, erasing what was under the text
    pub background: Option<Color565>,
    pub size: FontSize,
    pub datum: Datum,
}

impl TextStyle {
    /// Small, top-left aligned, transparent background
    pub const fn new(color: Color565) -> Self {
        Self {
            color,
            background: None,
            size: FontSize::Small,
            datum: Datum::TopLeft,
        }
    }

    pub const fn on(mut self, background: Color565) -> Self {
        self.background = Some(background);
        self
    }

    pub const fn size(mut self, size: FontSize) -> Self {
        self.size = size;
        self
    }

    pub const fn datum(mut self, datum: Datum) -> Self {
        self.datum = datum;
        self
    }
}

/// Drawing surface
///
/// Coordinates are signed so renderers can hand over partially off-screen
/// shapes; implementations clip. Rectangles with a non-positive width or
/// height draw nothing.
pub trait Canvas {
    /// Fill the entire surface
    fn fill_screen(&mut self, color: Color565) -> Result<(), DisplayError>;

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color565) -> Result<(), DisplayError>;

    /// One pixel wide rectangle outline
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color565) -> Result<(), DisplayError>;

    fn fill_round_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: i32,
        color: Color565,
    ) -> Result<(), DisplayError>;

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color565) -> Result<(), DisplayError>;

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) -> Result<(), DisplayError>;

    fn draw_hline(&mut self, x: i32, y: i32, w: i32, color: Color565) -> Result<(), DisplayError> {
        self.fill_rect(x, y, w, 1, color)
    }

    fn draw_vline(&mut self, x: i32, y: i32, h: i32, color: Color565) -> Result<(), DisplayError> {
        self.fill_rect(x, y, 1, h, color)
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color565) -> Result<(), DisplayError> {
        self.fill_rect(x, y, 1, 1, color)
    }

    fn draw_number(&mut self, value: i32, x: i32, y: i32, style: TextStyle) -> Result<(), DisplayError> {
        let mut text: heapless::String<12> = heapless::String::new();
        write!(text, "{}", value).map_err(|_| DisplayError::BufferOverflow)?;
        self.draw_text(&text, x, y, style)
    }
}

/// Format into a fixed buffer for drawing
pub(crate) fn format<const N: usize>(args: core::fmt::Arguments<'_>) -> Result<heapless::String<N>, DisplayError> {
    let mut text = heapless::String::new();
    text.write_fmt(args).map_err(|_| DisplayError::BufferOverflow)?;
    Ok(text)
}
