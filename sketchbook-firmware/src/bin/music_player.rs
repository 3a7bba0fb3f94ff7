//! Music player: loops the playlist on a passive buzzer and scrolls the
//! notes across a staff

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Timer};
use esp_backtrace as _;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_println as _;

use sketchbook_core::music::{Playlist, Sequencer, DEFAULT_PLAYLIST};
use sketchbook_display::screens::music;
use sketchbook_display::{Canvas, Color565, DisplayError};
use sketchbook_drivers::output::Buzzer;
use sketchbook_firmware::{config, halt, start_scheduler, Layout, Lcd, Screen};
use sketchbook_hal::ToneOutput;
use sketchbook_hal_esp32::{square_wave, ToneSender, ToneSignal};

esp_bootloader_esp_idf::esp_app_desc!();

static TONE: ToneSignal = ToneSignal::new();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = sketchbook_firmware::init();
    let resources = sketchbook_firmware::split_resources!(peripherals);
    start_scheduler(peripherals.TIMG0);

    info!("Sketchbook music player starting...");
    let config = config::load();
    config::check_wiring("buzzer", config.board.buzzer, 1);

    let mut lcd = match Lcd::new(resources.lcd, Layout::Landscape) {
        Ok(lcd) => lcd,
        Err(e) => {
            error!("LCD init failed: {}", e);
            halt("music player").await
        }
    };
    let mut pin = Output::new(peripherals.GPIO1, Level::Low, OutputConfig::default());
    let mut buzzer = Buzzer::new(ToneSender(&TONE));

    match select(play(&mut lcd.screen, &mut buzzer), square_wave(&mut pin, &TONE)).await {
        Either::First(Err(e)) => error!("Display error: {}", e),
        Either::First(Ok(never)) => match never {},
        Either::Second(never) => never,
    }
    pin.set_low();
    halt("music player").await
}

async fn play<T: ToneOutput>(screen: &mut Screen, buzzer: &mut Buzzer<T>) -> Result<Infallible, DisplayError> {
    screen.fill_screen(Color565::BLACK)?;

    let mut playlist = Playlist::new(&DEFAULT_PLAYLIST);
    loop {
        let Some(song) = playlist.next() else {
            halt("empty playlist").await
        };
        info!("Playing {} ({} ms)", song.name, song.duration_ms());
        music::draw_rule(screen)?;

        for event in Sequencer::new(song) {
            let note_start = Instant::now();
            debug!("{}", event.status().as_str());
            music::draw_note(screen, &event)?;

            buzzer.start(&event);
            Timer::after(Duration::from_millis(event.sound_ms as u64)).await;
            // The tone carries through the gap, which also absorbs the drawing time
            Timer::at(note_start + Duration::from_millis(event.duration_ms as u64)).await;
        }
        buzzer.silence();
    }
}
