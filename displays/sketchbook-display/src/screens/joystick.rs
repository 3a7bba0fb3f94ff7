//! Joystick direction grid

use sketchbook_core::joystick::JoystickGrid;

use crate::{Canvas, Color565, Datum, DisplayError, FontSize, TextStyle};

const CENTRE_X: i32 = 160;
const FIRST_ROW_Y: i32 = 35;
const ROW_SPACING: i32 = 25;

/// Five centred rows, gold while the stick is clicked
pub fn draw_grid<C: Canvas>(canvas: &mut C, grid: &JoystickGrid) -> Result<(), DisplayError> {
    let color = if grid.highlighted { Color565::GOLD } else { Color565::WHITE };
    let style = TextStyle::new(color)
        .on(Color565::BLACK)
        .size(FontSize::Large)
        .datum(Datum::MiddleCentre);
    for (i, row) in grid.rows().enumerate() {
        canvas.draw_text(row, CENTRE_X, FIRST_ROW_Y + ROW_SPACING * i as i32, style)?;
    }
    Ok(())
}
