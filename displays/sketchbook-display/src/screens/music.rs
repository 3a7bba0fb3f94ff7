//! Music staff and status line

use sketchbook_core::music::{NoteEvent, STAFF_WIDTH};

use crate::{Canvas, Color565, DisplayError, FontSize, TextStyle};

/// Row of the rule separating the status line from the staff
const RULE_Y: i32 = 20;

pub fn draw_rule<C: Canvas>(canvas: &mut C) -> Result<(), DisplayError> {
    canvas.draw_hline(0, RULE_Y, STAFF_WIDTH, Color565::WHITE)
}

/// Status line plus the note's bar, wiping the staff first when asked
pub fn draw_note<C: Canvas>(canvas: &mut C, event: &NoteEvent) -> Result<(), DisplayError> {
    if event.clear_staff {
        canvas.fill_rect(0, RULE_Y + 1, STAFF_WIDTH, 149, Color565::BLACK)?;
    }
    let bar = &event.bar;
    let color = if bar.rest { Color565::REST } else { Color565::GOLD };
    canvas.draw_hline(bar.x, bar.y, bar.width, color)?;

    let style = TextStyle::new(Color565::WHITE)
        .on(Color565::BLACK)
        .size(FontSize::Medium);
    canvas.draw_text(&event.status(), 0, 0, style)
}
