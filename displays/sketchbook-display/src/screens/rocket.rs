//! Rocket ascent screens, portrait 170x320

use sketchbook_core::rocket::{
    FuelTier, GroundStrip, Hud, Landing, Motion, Outcome, Sky, GROUND_HEIGHT, ROCKET_X, X_BOUND, Y_BOUND,
};

use crate::backend::format;
use crate::{Canvas, Color565, Datum, DisplayError, FontSize, TextStyle};

/// Sky colour per atmosphere level
pub const ATMOSPHERE: [Color565; 4] = [Color565::BLUE, Color565::BLUE, Color565::NAVY, Color565::BLACK];
pub const GROUND: Color565 = Color565::GOLD;

const ROCKET: &str = "@";
const END_Y: i32 = Y_BOUND / 2;

pub fn sky_colour(level: u8) -> Color565 {
    ATMOSPHERE[(level as usize).min(ATMOSPHERE.len() - 1)]
}

/// HUD text colour, fading with the fuel level
///
/// An exhausted tank draws in the sky colour with no background, so the
/// HUD disappears.
pub fn hud_style(tier: FuelTier, level: u8) -> TextStyle {
    let sky = sky_colour(level);
    let color = match tier {
        FuelTier::Full => Color565::WHITE,
        FuelTier::High => Color565::GREEN,
        FuelTier::Half => Color565::GOLD,
        FuelTier::Low => Color565::RED,
        FuelTier::Empty => Color565::MAROON,
        FuelTier::Exhausted => return TextStyle::new(sky),
    };
    TextStyle::new(color).on(sky)
}

fn draw_ground<C: Canvas>(canvas: &mut C, color: Color565) -> Result<(), DisplayError> {
    canvas.fill_rect(0, Y_BOUND - GROUND_HEIGHT, X_BOUND, GROUND_HEIGHT, color)
}

/// Opening frame: lowest sky with the launch pad
pub fn draw_start<C: Canvas>(canvas: &mut C) -> Result<(), DisplayError> {
    canvas.fill_screen(sky_colour(0))?;
    draw_ground(canvas, GROUND)
}

/// Fuel and wallet on top, altitude and speed below
pub fn draw_hud<C: Canvas>(canvas: &mut C, hud: &Hud, tier: FuelTier, level: u8) -> Result<(), DisplayError> {
    let style = hud_style(tier, level);
    let large = style.size(FontSize::Medium);

    let fuel = format::<16>(format_args!("{:.2}%  ", hud.fuel_percent))?;
    canvas.draw_text(&fuel, 0, 0, large)?;
    let wallet = format::<16>(format_args!(" ${}", hud.wallet))?;
    canvas.draw_text(&wallet, X_BOUND, 0, large.datum(Datum::TopRight))?;

    let altitude = format::<16>(format_args!("{} m ", hud.altitude))?;
    canvas.draw_text(&altitude, 0, 24, style)?;
    let speed = format::<16>(format_args!("{} m/s ", hud.speed))?;
    canvas.draw_text(&speed, 0, 36, style)
}

/// Seconds since launch, top right under the wallet
pub fn draw_clock<C: Canvas>(canvas: &mut C, elapsed_ms: u64, tier: FuelTier, level: u8) -> Result<(), DisplayError> {
    let text = format::<16>(format_args!("{:.2} s", elapsed_ms as f32 / 1000.0))?;
    canvas.draw_text(&text, X_BOUND, 24, hud_style(tier, level).datum(Datum::TopRight))
}

/// Repaint behind the rocket after it moved
///
/// A new atmosphere level repaints the whole screen, and the pad with it
/// while it is in view.
pub fn draw_sky<C: Canvas>(canvas: &mut C, sky: &Sky) -> Result<(), DisplayError> {
    let color = sky_colour(sky.level);
    if sky.level_changed {
        canvas.fill_screen(color)?;
        if sky.ground_visible {
            draw_ground(canvas, GROUND)?;
        }
    }
    if let Some(bottom) = sky.clear_column_to {
        canvas.fill_rect(ROCKET_X - 2, 0, 9, bottom, color)?;
    }
    Ok(())
}

/// Payout banner, ground strip and the rocket itself
pub fn draw_motion<C: Canvas>(canvas: &mut C, motion: &Motion, level: u8) -> Result<(), DisplayError> {
    if let Some(Landing::Payout { shown, perfect, .. }) = motion.landing {
        let banner = if perfect {
            format::<16>(format_args!("++${}", shown))?
        } else {
            format::<16>(format_args!(" +${}", shown))?
        };
        let style = hud_style(motion.tier, level)
            .size(FontSize::Medium)
            .datum(Datum::TopRight);
        canvas.draw_text(&banner, X_BOUND, 0, style)?;
    }

    match motion.ground {
        GroundStrip::Hide => draw_ground(canvas, sky_colour(level))?,
        GroundStrip::Show => draw_ground(canvas, GROUND)?,
        GroundStrip::Unchanged => {}
    }

    canvas.draw_text(ROCKET, ROCKET_X, motion.sprite_y, hud_style(motion.tier, level))
}

/// One phase of the flashing end screen
///
/// The two phases alternate every second.
pub fn draw_end_frame<C: Canvas>(
    canvas: &mut C,
    outcome: Outcome,
    phase: bool,
    elapsed_ms: u64,
    wallet: i32,
    level: u8,
) -> Result<(), DisplayError> {
    let sky = sky_colour(level);
    canvas.fill_screen(sky)?;
    let style = TextStyle::new(Color565::WHITE).on(sky).size(FontSize::Large);

    match (outcome, phase) {
        (Outcome::Lost, false) => canvas.draw_text("GAME OVER", 4, END_Y, style),
        (Outcome::Lost, true) => canvas.draw_text(
            "GAME OVER",
            8,
            END_Y,
            TextStyle {
                color: Color565::LIGHTGREY,
                ..style
            },
        ),
        (Outcome::Won, false) => {
            let style = TextStyle {
                color: Color565::GOLD,
                ..style
            };
            canvas.draw_text("YOU WIN!", 10, END_Y, style)?;
            let time = format::<16>(format_args!("{:.2} s", elapsed_ms as f32 / 1000.0))?;
            canvas.draw_text(&time, 10, END_Y + 30, style)
        }
        (Outcome::Won, true) => {
            let style = TextStyle {
                color: Color565::GREEN,
                ..style
            };
            canvas.draw_text("YOU WIN!", 15, END_Y, style)?;
            let money = format::<16>(format_args!("${}  ", wallet))?;
            canvas.draw_text(&money, 15, END_Y + 30, style)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Op, RecordingCanvas};

    #[test]
    fn test_hud_text() {
        let hud = Hud {
            fuel_percent: 50.0,
            wallet: 100,
            altitude: 12,
            speed: -3,
        };
        let mut canvas = RecordingCanvas::new();
        draw_hud(&mut canvas, &hud, FuelTier::Half, 0).unwrap();
        assert_eq!(canvas.texts(), vec!["50.00%  ", " $100", "12 m ", "-3 m/s "]);
        match &canvas.ops[0] {
            Op::Text { style, .. } => {
                assert_eq!(style.color, Color565::GOLD);
                assert_eq!(style.background, Some(Color565::BLUE));
            }
            op => panic!("unexpected {op:?}"),
        }
    }

    #[test]
    fn test_exhausted_hud_blends_into_sky() {
        let style = hud_style(FuelTier::Exhausted, 2);
        assert_eq!(style.color, Color565::NAVY);
        assert_eq!(style.background, None);
    }

    #[test]
    fn test_sky_repaint() {
        let mut canvas = RecordingCanvas::new();
        draw_sky(
            &mut canvas,
            &Sky {
                level: 2,
                level_changed: true,
                clear_column_to: Some(290),
                ground_visible: false,
            },
        )
        .unwrap();
        assert_eq!(
            canvas.ops,
            vec![
                Op::FillScreen(Color565::NAVY),
                Op::FillRect {
                    x: 83,
                    y: 0,
                    w: 9,
                    h: 290,
                    color: Color565::NAVY
                },
            ]
        );
    }

    #[test]
    fn test_sky_repaint_keeps_visible_ground() {
        let mut canvas = RecordingCanvas::new();
        let sky = Sky {
            level: 0,
            level_changed: true,
            clear_column_to: None,
            ground_visible: true,
        };
        draw_sky(&mut canvas, &sky).unwrap();
        assert_eq!(
            canvas.ops,
            vec![
                Op::FillScreen(Color565::BLUE),
                Op::FillRect {
                    x: 0,
                    y: 290,
                    w: 170,
                    h: 30,
                    color: Color565::GOLD
                },
            ]
        );
    }

    /// Whether the last paint touching the pad left it gold
    fn pad_painted(ops: &[Op]) -> bool {
        let pad_top = Y_BOUND - GROUND_HEIGHT;
        let mut painted = true;
        for op in ops {
            match op {
                Op::FillScreen(_) => painted = false,
                Op::FillRect { y, h, w, color, .. } if y + h > pad_top => {
                    if *w == X_BOUND && *y == pad_top {
                        painted = *color == GROUND;
                    } else {
                        painted = false;
                    }
                }
                _ => {}
            }
        }
        painted
    }

    #[test]
    fn test_ground_shown_on_every_landing() {
        use sketchbook_core::rocket::{
            Controls, RocketGame, ATMOSPHERE_STEP_MS, MOTION_STEP_MS, SIMULATION_STEP_MS,
        };

        let motion_ticks = MOTION_STEP_MS / ATMOSPHERE_STEP_MS;
        let simulation_ticks = SIMULATION_STEP_MS / ATMOSPHERE_STEP_MS;

        for burn_steps in 15..55u64 {
            let mut game = RocketGame::new();
            let mut canvas = RecordingCanvas::new();
            draw_start(&mut canvas).unwrap();

            let mut cleared_top = false;
            let mut landed = false;
            for tick in 0..200_000u64 {
                let sky = game.update_atmosphere();
                draw_sky(&mut canvas, &sky).unwrap();

                if tick % motion_ticks == 0 {
                    let motion = game.advance();
                    draw_motion(&mut canvas, &motion, game.level()).unwrap();
                    if motion.ground == GroundStrip::Hide {
                        cleared_top = true;
                    }
                    if cleared_top && motion.landing.is_some() {
                        landed = true;
                        break;
                    }
                }

                if tick % simulation_ticks == 0 {
                    let controls = Controls {
                        thrust: tick / simulation_ticks < burn_steps,
                        impulse: false,
                    };
                    let hud = game.simulate(controls);
                    draw_hud(&mut canvas, &hud, game.tier(), game.level()).unwrap();
                }
                // keep the log short, only the pad's last paint matters
                if canvas.ops.len() > 64 {
                    let painted = pad_painted(&canvas.ops);
                    canvas.ops.clear();
                    if !painted {
                        draw_sky(
                            &mut canvas,
                            &Sky {
                                level: 0,
                                level_changed: true,
                                clear_column_to: None,
                                ground_visible: false,
                            },
                        )
                        .unwrap();
                    }
                }
            }
            assert!(cleared_top, "burn {} never left the screen", burn_steps);
            assert!(landed, "burn {} never landed", burn_steps);
            assert!(pad_painted(&canvas.ops), "burn {} landed without ground", burn_steps);
        }
    }

    #[test]
    fn test_perfect_payout_banner() {
        let motion = Motion {
            landing: Some(Landing::Payout {
                shown: 3,
                paid: 6,
                perfect: true,
            }),
            tier: FuelTier::Full,
            ground: GroundStrip::Show,
            sprite_y: 282,
        };
        let mut canvas = RecordingCanvas::new();
        draw_motion(&mut canvas, &motion, 0).unwrap();
        assert_eq!(canvas.texts(), vec!["++$3", "@"]);
        assert!(canvas.ops.contains(&Op::FillRect {
            x: 0,
            y: 290,
            w: 170,
            h: 30,
            color: Color565::GOLD
        }));
    }

    #[test]
    fn test_end_screens() {
        let mut canvas = RecordingCanvas::new();
        draw_end_frame(&mut canvas, Outcome::Won, true, 61_500, 250, 3).unwrap();
        assert_eq!(canvas.ops[0], Op::FillScreen(Color565::BLACK));
        assert_eq!(canvas.texts(), vec!["YOU WIN!", "$250  "]);

        let mut canvas = RecordingCanvas::new();
        draw_end_frame(&mut canvas, Outcome::Won, false, 61_500, 250, 3).unwrap();
        assert_eq!(canvas.texts(), vec!["YOU WIN!", "61.50 s"]);
    }
}
