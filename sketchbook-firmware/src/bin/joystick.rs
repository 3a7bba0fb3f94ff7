//! Joystick: a 5x5 grid of dots with the stick position marked

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Ticker};
use esp_backtrace as _;
use esp_println as _;

use sketchbook_core::joystick::JoystickGrid;
use sketchbook_display::screens::joystick;
use sketchbook_display::{Canvas, Color565, DisplayError};
use sketchbook_drivers::input::Joystick;
use sketchbook_firmware::{config, halt, sensors, start_scheduler, Layout, Lcd, Screen};
use sketchbook_hal::{AnalogInput, InputPin};

esp_bootloader_esp_idf::esp_app_desc!();

const POLL_MS: u64 = 100;

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = sketchbook_firmware::init();
    let resources = sketchbook_firmware::split_resources!(peripherals);
    start_scheduler(peripherals.TIMG0);

    info!("Sketchbook joystick starting...");
    let config = config::load();

    let mut lcd = match Lcd::new(resources.lcd, Layout::Landscape) {
        Ok(lcd) => lcd,
        Err(e) => {
            error!("LCD init failed: {}", e);
            halt("joystick").await
        }
    };
    let mut stick = sensors::joystick(
        &config,
        peripherals.ADC1,
        peripherals.GPIO1,
        peripherals.GPIO2,
        peripherals.GPIO3,
    );

    if let Err(e) = run(&mut lcd.screen, &mut stick).await {
        error!("Display error: {}", e);
    }
    halt("joystick").await
}

async fn run<X, Y, Z>(screen: &mut Screen, stick: &mut Joystick<X, Y, Z>) -> Result<Infallible, DisplayError>
where
    X: AnalogInput,
    Y: AnalogInput,
    Z: InputPin,
{
    screen.fill_screen(Color565::BLACK)?;

    let mut ticker = Ticker::every(Duration::from_millis(POLL_MS));
    let mut last: Option<JoystickGrid> = None;
    loop {
        match stick.read() {
            Ok(reading) => {
                debug!("x {} y {} click {}", reading.x, reading.y, reading.click);
                let grid = JoystickGrid::from_reading(&reading);
                // Redrawing an unchanged grid only makes the text flicker
                if last.as_ref() != Some(&grid) {
                    joystick::draw_grid(screen, &grid)?;
                    last = Some(grid);
                }
            }
            Err(e) => warn!("Joystick read failed: {}", e),
        }
        ticker.next().await;
    }
}
