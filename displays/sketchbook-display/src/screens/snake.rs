//! Snake board and status line, portrait 170x320

use sketchbook_core::snake::{Fruit, Shield, SnakeHud, Spawn, TrailPaint, CELL, COLS, ROWS};

use crate::backend::format;
use crate::{Canvas, Color565, Datum, DisplayError, FontSize, TextStyle};

const CORNER_RADIUS: i32 = 3;

/// Trail ramp from black up to a pale lilac
pub const TRAIL_SHADES: [Color565; 32] = trail_shades();

const fn trail_shades() -> [Color565; 32] {
    let mut shades = [Color565::BLACK; 32];
    let mut i = 1;
    while i < 32 {
        let level = if i < 2 { 2 } else { i as u16 };
        shades[i] = Color565((level << 11) | ((2 * level) << 5) | level);
        i += 1;
    }
    shades
}

pub fn fruit_colour(fruit: Fruit) -> Color565 {
    match fruit {
        Fruit::Red => Color565::RED,
        Fruit::GreenYellow => Color565::GREENYELLOW,
        Fruit::Cyan => Color565::CYAN,
        Fruit::Gold => Color565::GOLD,
    }
}

fn draw_cell<C: Canvas>(canvas: &mut C, x: usize, y: usize, color: Color565) -> Result<(), DisplayError> {
    canvas.fill_round_rect(x as i32 * CELL, y as i32 * CELL, CELL, CELL, CORNER_RADIUS, color)
}

pub fn draw_spawn<C: Canvas>(canvas: &mut C, spawn: &Spawn) -> Result<(), DisplayError> {
    draw_cell(canvas, spawn.x, spawn.y, fruit_colour(spawn.fruit))
}

pub fn draw_trail<C: Canvas>(canvas: &mut C, x: usize, y: usize, paint: TrailPaint) -> Result<(), DisplayError> {
    let color = match paint {
        TrailPaint::White => Color565::WHITE,
        TrailPaint::Shade(i) => TRAIL_SHADES[(i as usize).min(TRAIL_SHADES.len() - 1)],
    };
    draw_cell(canvas, x, y, color)
}

/// Size on the left, speed on the right
pub fn draw_hud<C: Canvas>(canvas: &mut C, hud: &SnakeHud) -> Result<(), DisplayError> {
    let speed_colour = if hud.slowed { Color565::GREENYELLOW } else { Color565::DARKGREY };
    let speed = format::<16>(format_args!(" {:.2} ", hud.speed))?;
    let style = TextStyle::new(speed_colour)
        .on(Color565::BLACK)
        .datum(Datum::TopRight);
    canvas.draw_text(&speed, CELL * COLS as i32, 0, style)?;

    let size_colour = match hud.shield {
        Shield::Off => Color565::WHITE,
        Shield::On => Color565::CYAN,
        Shield::Fading => Color565::DARKCYAN,
    };
    let size = format::<16>(format_args!(" {} ", hud.size))?;
    canvas.draw_text(&size, 0, 0, TextStyle::new(size_colour).on(Color565::BLACK))
}

pub fn draw_game_over<C: Canvas>(canvas: &mut C, score: u32) -> Result<(), DisplayError> {
    canvas.fill_screen(Color565::BLACK)?;
    let text = format::<24>(format_args!("Score: {}", score))?;
    let style = TextStyle::new(Color565::WHITE)
        .on(Color565::BLACK)
        .size(FontSize::Medium)
        .datum(Datum::MiddleCentre);
    canvas.draw_text(&text, CELL * COLS as i32 / 2, CELL * ROWS as i32 / 2, style)
}
