//! Snake: the snake heads down on its own, right or left steer, both
//! buttons go up. A rival wanders the board eating fruit too.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Ticker};
use esp_backtrace as _;
use esp_println as _;

use sketchbook_core::rng::XorShift32;
use sketchbook_core::snake::{SnakeGame, Steering};
use sketchbook_display::screens::snake;
use sketchbook_display::{Canvas, Color565, DisplayError};
use sketchbook_firmware::{config, halt, seeded_rng, start_scheduler, Buttons, Layout, Lcd, Screen};

esp_bootloader_esp_idf::esp_app_desc!();

/// Input and clock polling, well under the fastest step period
const POLL_MS: u64 = 10;

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = sketchbook_firmware::init();
    let resources = sketchbook_firmware::split_resources!(peripherals);
    start_scheduler(peripherals.TIMG0);

    info!("Sketchbook snake starting...");
    let config = config::load();

    let mut lcd = match Lcd::new(resources.lcd, Layout::Portrait) {
        Ok(lcd) => lcd,
        Err(e) => {
            error!("LCD init failed: {}", e);
            halt("snake").await
        }
    };
    let mut buttons = resources
        .buttons
        .into_buttons(&config.board.left_button, &config.board.right_button);
    let mut rng = seeded_rng();

    match run(&mut lcd.screen, &mut buttons, &mut rng).await {
        Ok(score) => info!("Game over, score {}", score),
        Err(e) => error!("Display error: {}", e),
    }
    halt("snake").await
}

/// Play one game and return the score
async fn run(screen: &mut Screen, buttons: &mut Buttons, rng: &mut XorShift32) -> Result<u32, DisplayError> {
    let mut game = SnakeGame::new();
    screen.fill_screen(Color565::BLACK)?;

    let start = Instant::now();
    let mut ticker = Ticker::every(Duration::from_millis(POLL_MS));
    loop {
        let pair = buttons.poll();
        let steering = Steering::from_buttons(pair.left.pressed(), pair.right.pressed());
        let update = game.update(start.elapsed().as_millis(), steering, rng);

        for spawn in &update.spawned {
            trace!("{} fruit at ({}, {})", spawn.fruit, spawn.x, spawn.y);
            snake::draw_spawn(screen, spawn)?;
        }

        if let Some(step) = update.step {
            if let Some(score) = step.game_over {
                snake::draw_game_over(screen, score)?;
                return Ok(score);
            }
            snake::draw_hud(screen, &step.hud)?;
            for (x, y, paint) in game.decay() {
                snake::draw_trail(screen, x, y, paint)?;
            }
        }

        ticker.next().await;
    }
}
