//! LED fader: ramps an LED up to the configured duty and back down, forever
//!
//! Runs without the LCD.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Ticker};
use esp_backtrace as _;
use esp_hal::{
    gpio::DriveMode,
    ledc::{
        channel::{self, ChannelIFace},
        timer::{self, TimerIFace},
        LSGlobalClkSource, Ledc, LowSpeed,
    },
    time::Rate,
};
use esp_println as _;

use sketchbook_core::fader::FadeStep;
use sketchbook_drivers::output::LedFader;
use sketchbook_firmware::{config, halt, start_scheduler};
use sketchbook_hal_esp32::{ledc::duty_resolution, LedcPwm};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = sketchbook_firmware::init();
    start_scheduler(peripherals.TIMG0);

    info!("Sketchbook LED fader starting...");
    let config = config::load();
    let settings = config.fader;
    config::check_wiring("led", config.board.led, 1);

    let Some(duty) = duty_resolution(settings.resolution_bits) else {
        error!("No LEDC timer with {} bits of resolution", settings.resolution_bits);
        halt("led fader").await
    };

    let mut ledc = Ledc::new(peripherals.LEDC);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let mut timer0 = ledc.timer::<LowSpeed>(timer::Number::Timer0);
    if let Err(e) = timer0.configure(timer::config::Config {
        duty,
        clock_source: timer::LSClockSource::APBClk,
        frequency: Rate::from_hz(settings.frequency_hz),
    }) {
        error!("LEDC timer rejected {} Hz: {}", settings.frequency_hz, Debug2Format(&e));
        halt("led fader").await
    }

    let mut channel0 = ledc.channel(channel::Number::Channel0, peripherals.GPIO1);
    if let Err(e) = channel0.configure(channel::config::Config {
        timer: &timer0,
        duty_pct: 0,
        drive_mode: DriveMode::PushPull,
    }) {
        error!("LEDC channel setup failed: {}", Debug2Format(&e));
        halt("led fader").await
    }

    let mut led = LedFader::new(LedcPwm::new(channel0, settings.resolution_bits), settings.max_duty);
    info!(
        "Fading to duty {} at {} Hz, {} ms per step",
        led.max_duty(),
        settings.frequency_hz,
        settings.step_ms
    );

    let mut ticker = Ticker::every(Duration::from_millis(settings.step_ms as u64));
    loop {
        // LEDC duty writes cannot fail
        let Ok(step) = led.tick();
        match step {
            FadeStep::Duty(0) => trace!("dark"),
            FadeStep::Duty(duty) => trace!("duty {}", duty),
            FadeStep::Hold => {}
        }
        ticker.next().await;
    }
}
