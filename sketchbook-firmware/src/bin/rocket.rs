//! Rocket: hold left to burn fuel, tap right for an impulse. Land softly
//! after a climb to get paid, pass 999 m/s to win.

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Ticker, Timer};
use esp_backtrace as _;
use esp_println as _;

use sketchbook_core::rocket::{
    Controls, Landing, Outcome, RocketGame, ATMOSPHERE_STEP_MS, MOTION_STEP_MS, SIMULATION_STEP_MS,
};
use sketchbook_display::screens::rocket;
use sketchbook_display::{Canvas, DisplayError};
use sketchbook_firmware::{config, halt, start_scheduler, Buttons, Layout, Lcd, Screen};

esp_bootloader_esp_idf::esp_app_desc!();

const MOTION_TICKS: u64 = MOTION_STEP_MS / ATMOSPHERE_STEP_MS;
const SIMULATION_TICKS: u64 = SIMULATION_STEP_MS / ATMOSPHERE_STEP_MS;
/// Pause after a payout so the banner can be read
const PAYOUT_PAUSE_MS: u64 = 500;
const FLASH_MS: u64 = 1000;
const WIN_FLASHES: usize = 5;

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = sketchbook_firmware::init();
    let resources = sketchbook_firmware::split_resources!(peripherals);
    start_scheduler(peripherals.TIMG0);

    info!("Sketchbook rocket starting...");
    let config = config::load();

    let mut lcd = match Lcd::new(resources.lcd, Layout::Portrait) {
        Ok(lcd) => lcd,
        Err(e) => {
            error!("LCD init failed: {}", e);
            halt("rocket").await
        }
    };
    let mut buttons = resources
        .buttons
        .into_buttons(&config.board.left_button, &config.board.right_button);

    if let Err(e) = run(&mut lcd.screen, &mut buttons).await {
        error!("Display error: {}", e);
    }
    halt("rocket").await
}

async fn run(screen: &mut Screen, buttons: &mut Buttons) -> Result<Infallible, DisplayError> {
    let mut game = RocketGame::new();
    rocket::draw_start(screen)?;

    let start = Instant::now();
    let mut ticker = Ticker::every(Duration::from_millis(ATMOSPHERE_STEP_MS));
    let mut tick: u64 = 0;
    loop {
        let sky = game.update_atmosphere();
        if sky.level_changed {
            debug!("Atmosphere level {}", sky.level);
        }
        rocket::draw_sky(screen, &sky)?;

        if tick % MOTION_TICKS == 0 {
            let motion = game.advance();
            rocket::draw_motion(screen, &motion, game.level())?;
            match motion.landing {
                Some(Landing::Payout { shown, paid, perfect }) => {
                    info!("Landed: +{} (paid {}, perfect {})", shown, paid, perfect);
                    Timer::after(Duration::from_millis(PAYOUT_PAUSE_MS)).await;
                    ticker.reset();
                }
                Some(Landing::Crash { cost }) => info!("Crashed: {}", cost),
                Some(Landing::Settled) | None => {}
            }
        }

        if tick % SIMULATION_TICKS == 0 {
            let pair = buttons.poll();
            let controls = Controls {
                thrust: pair.left.pressed(),
                impulse: pair.right.pressed(),
            };
            let hud = game.simulate(controls);
            rocket::draw_hud(screen, &hud, game.tier(), game.level())?;
        }

        let elapsed_ms = start.elapsed().as_millis();
        rocket::draw_clock(screen, elapsed_ms, game.tier(), game.level())?;

        match game.check_outcome() {
            Some(Outcome::Won) => {
                info!("Won after {} ms with ${}", elapsed_ms, game.max_fuel());
                for _ in 0..WIN_FLASHES {
                    flash(screen, Outcome::Won, elapsed_ms, &game).await?;
                }
                screen.fill_screen(rocket::sky_colour(game.level()))?;
                ticker.reset();
            }
            Some(Outcome::Lost) => {
                info!("Out of fuel after {} ms", elapsed_ms);
                loop {
                    flash(screen, Outcome::Lost, elapsed_ms, &game).await?;
                }
            }
            None => {}
        }

        tick = tick.wrapping_add(1);
        ticker.next().await;
    }
}

/// Both phases of the end screen, one second each
async fn flash(screen: &mut Screen, outcome: Outcome, elapsed_ms: u64, game: &RocketGame) -> Result<(), DisplayError> {
    for phase in [false, true] {
        rocket::draw_end_frame(screen, outcome, phase, elapsed_ms, game.max_fuel(), game.level())?;
        Timer::after(Duration::from_millis(FLASH_MS)).await;
    }
    Ok(())
}
