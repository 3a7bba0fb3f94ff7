//! Joystick direction tester
//!
//! Each axis is bucketed into five zones around the stick's rest point
//! (roughly 1980, 2060 on a 12-bit ADC). The zones index a 5x5 character
//! grid with `+` in the middle and `X` where the stick points.

/// Grid side length
pub const GRID_SIZE: usize = 5;

/// Column for a raw X reading, 0 is full left
pub fn x_zone(raw: u16) -> usize {
    match raw {
        r if r > 3900 => 4,
        r if r > 2100 => 3,
        r if r < 200 => 0,
        r if r < 1900 => 1,
        _ => 2,
    }
}

/// Row for a raw Y reading, 0 is full up
pub fn y_zone(raw: u16) -> usize {
    match raw {
        r if r > 3900 => 0,
        r if r > 2120 => 1,
        r if r < 200 => 4,
        r if r < 2000 => 3,
        _ => 2,
    }
}

/// One sample of the stick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickReading {
    pub x: u16,
    pub y: u16,
    /// Click pin level
    pub click: bool,
}

/// Rendered 5x5 grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoystickGrid {
    rows: [[u8; GRID_SIZE]; GRID_SIZE],
    pub column: usize,
    pub row: usize,
    /// Draw in the highlight colour
    pub highlighted: bool,
}

impl JoystickGrid {
    pub fn from_reading(reading: &JoystickReading) -> Self {
        let mut rows = [[b' '; GRID_SIZE]; GRID_SIZE];
        rows[2][2] = b'+';
        let column = x_zone(reading.x);
        let row = y_zone(reading.y);
        rows[row][column] = b'X';
        Self {
            rows,
            column,
            row,
            highlighted: reading.click,
        }
    }

    /// Row `index` as text, empty past the last row
    pub fn row_str(&self, index: usize) -> &str {
        self.rows
            .get(index)
            .and_then(|r| core::str::from_utf8(r).ok())
            .unwrap_or("")
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> {
        (0..GRID_SIZE).map(move |i| self.row_str(i))
    }
}
