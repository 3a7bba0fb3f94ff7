//! Water surface

use sketchbook_core::ripple::{shade_index, RippleField};

use crate::{Canvas, Color565, DisplayError, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Deep blue through cyan to white crests
pub const WATER_SHADES: [Color565; 16] = [
    Color565(0x0008),
    Color565(0x0009),
    Color565(0x0010),
    Color565(0x0012),
    Color565(0x0015),
    Color565(0x0018),
    Color565(0x001a),
    Color565(0x001c),
    Color565(0x001f),
    Color565(0x541f),
    Color565(0x65bf),
    Color565(0xc71f),
    Color565(0xd75f),
    Color565(0xefbf),
    Color565(0xf7df),
    Color565(0xffff),
];

/// Each cell is a 2x2 block
const CELL: i32 = 2;
/// The border rows and columns never move, so they are pushed off screen
const ORIGIN: i32 = -5;

/// Paint every on-screen cell of the field
pub fn draw_surface<C: Canvas>(canvas: &mut C, field: &RippleField<'_>) -> Result<(), DisplayError> {
    let settings = field.settings();
    for row in 0..settings.height {
        let y = row as i32 * CELL + ORIGIN;
        if y + CELL <= 0 || y >= SCREEN_HEIGHT {
            continue;
        }
        for col in 0..settings.width {
            let x = col as i32 * CELL + ORIGIN;
            if x + CELL <= 0 || x >= SCREEN_WIDTH {
                continue;
            }
            let shade = shade_index(field.height_at(col, row), WATER_SHADES.len());
            canvas.fill_rect(x, y, CELL, CELL, WATER_SHADES[shade])?;
        }
    }
    Ok(())
}
