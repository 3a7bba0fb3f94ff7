//! Ripples: a water surface you disturb with the buttons
//!
//! Left release toggles the wandering source, right release toggles the
//! rain. Holding both stirs the water; letting go of the pair drops a
//! single splash.

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Ticker};
use esp_backtrace as _;
use esp_println as _;
use static_cell::ConstStaticCell;

use sketchbook_core::input::ButtonPair;
use sketchbook_core::ripple::{RippleField, STEP_MS};
use sketchbook_core::rng::XorShift32;
use sketchbook_display::screens::ripple;
use sketchbook_display::DisplayError;
use sketchbook_firmware::{config, halt, seeded_rng, start_scheduler, Buttons, Layout, Lcd, Screen};

esp_bootloader_esp_idf::esp_app_desc!();

/// The largest surface the config accepts
const MAX_CELLS: usize = 180 * 95;

// Too large for the main task's stack
static NEWER: ConstStaticCell<[u16; MAX_CELLS]> = ConstStaticCell::new([0; MAX_CELLS]);
static OLDER: ConstStaticCell<[u16; MAX_CELLS]> = ConstStaticCell::new([0; MAX_CELLS]);

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = sketchbook_firmware::init();
    let resources = sketchbook_firmware::split_resources!(peripherals);
    start_scheduler(peripherals.TIMG0);

    info!("Sketchbook ripples starting...");
    let config = config::load();
    let settings = config.ripple;

    let mut lcd = match Lcd::new(resources.lcd, Layout::Landscape) {
        Ok(lcd) => lcd,
        Err(e) => {
            error!("LCD init failed: {}", e);
            halt("ripples").await
        }
    };
    let mut buttons = resources
        .buttons
        .into_buttons(&config.board.left_button, &config.board.right_button);
    let mut rng = seeded_rng();

    let cells = settings.cells();
    let (Some(newer), Some(older)) = (NEWER.take().get_mut(..cells), OLDER.take().get_mut(..cells)) else {
        error!("{}x{} does not fit the surface buffers", settings.width, settings.height);
        halt("ripples").await
    };
    let mut field = match RippleField::new(settings, newer, older, &mut rng) {
        Ok(field) => field,
        Err(e) => {
            error!("Ripple surface rejected: {}", e);
            halt("ripples").await
        }
    };
    info!(
        "{}x{} surface, damping >> {}",
        settings.width, settings.height, settings.damping_shift
    );

    if let Err(e) = run(&mut field, &mut lcd.screen, &mut buttons, &mut rng).await {
        error!("Display error: {}", e);
    }
    halt("ripples").await
}

async fn run(
    field: &mut RippleField<'_>,
    screen: &mut Screen,
    buttons: &mut Buttons,
    rng: &mut XorShift32,
) -> Result<Infallible, DisplayError> {
    let start = Instant::now();
    let mut chord = false;
    let mut ticker = Ticker::every(Duration::from_millis(STEP_MS));
    loop {
        let now_ms = start.elapsed().as_millis();
        apply_buttons(field, buttons.poll(), &mut chord, now_ms, rng);
        field.step(now_ms, rng);
        ripple::draw_surface(screen, field)?;
        ticker.next().await;
    }
}

/// Single releases toggle, the two-button chord stirs then splashes
fn apply_buttons(field: &mut RippleField<'_>, pair: &ButtonPair, chord: &mut bool, now_ms: u64, rng: &mut XorShift32) {
    if pair.chord() {
        *chord = true;
        field.stir(rng);
    } else if *chord {
        if !pair.left.pressed() && !pair.right.pressed() {
            *chord = false;
            debug!("splash");
            field.pulse();
        }
    } else {
        if pair.left.just_released() {
            field.toggle_source(now_ms, rng);
            debug!("source {}", field.source().is_some());
        }
        if pair.right.just_released() {
            field.toggle_rain(now_ms);
            debug!("rain {}", field.raining());
        }
    }
}
