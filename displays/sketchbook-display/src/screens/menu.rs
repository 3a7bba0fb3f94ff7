//! Plot source selection menu

use sketchbook_core::signal::{FunctionMenu, MenuEvent};

use super::plot::PlotColours;
use crate::{Canvas, DisplayError, FontSize, TextStyle};

const LEFT: i32 = 32;
const HEADER_Y: i32 = 15;
const FIRST_ENTRY_Y: i32 = 36;
const ENTRY_SPACING: i32 = 19;

pub fn draw_header<C: Canvas>(canvas: &mut C, colours: &PlotColours) -> Result<(), DisplayError> {
    let style = TextStyle::new(colours.axis)
        .on(colours.background)
        .size(FontSize::Medium);
    canvas.draw_text("[ SELECT FUNCTION TO PLOT ]", LEFT, HEADER_Y, style)
}

/// Redraw the entry list after a cursor move
///
/// Every entry is repainted dim, then the highlighted one bright. Other
/// events draw nothing.
pub fn draw_menu<C: Canvas>(
    canvas: &mut C,
    menu: &FunctionMenu,
    event: MenuEvent,
    colours: &PlotColours,
) -> Result<(), DisplayError> {
    let MenuEvent::Moved { current, .. } = event else {
        return Ok(());
    };
    let dim = TextStyle::new(colours.gridlines)
        .on(colours.background)
        .size(FontSize::Medium);
    let bright = TextStyle { color: colours.data, ..dim };

    for (i, name) in menu.entries().enumerate() {
        let style = if i == current { bright } else { dim };
        canvas.draw_text(name, LEFT, FIRST_ENTRY_Y + ENTRY_SPACING * i as i32, style)?;
    }
    Ok(())
}
