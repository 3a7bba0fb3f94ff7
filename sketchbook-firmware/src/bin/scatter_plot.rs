//! Scatter plot: one pixel per sample, the screen starts over at every wrap

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Ticker};
use esp_backtrace as _;
use esp_println as _;

use sketchbook_core::config::ScatterSettings;
use sketchbook_core::plot::{PlotGeometry, ScatterPlotter};
use sketchbook_core::signal::Waveform;
use sketchbook_core::traits::{AnalogSource, DistanceSensor};
use sketchbook_display::screens::plot::{self, PlotColours};
use sketchbook_display::DisplayError;
use sketchbook_firmware::{config, halt, sensors, start_scheduler, Layout, Lcd, Screen};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = sketchbook_firmware::init();
    let resources = sketchbook_firmware::split_resources!(peripherals);
    start_scheduler(peripherals.TIMG0);

    info!("Sketchbook scatter plot starting...");
    let config = config::load();

    let mut lcd = match Lcd::new(resources.lcd, Layout::Landscape) {
        Ok(lcd) => lcd,
        Err(e) => {
            error!("LCD init failed: {}", e);
            halt("scatter plot").await
        }
    };
    let mut analog = sensors::analog_input(&config, peripherals.ADC1, peripherals.GPIO10);
    let mut sonar = sensors::sonar(&config, peripherals.GPIO1, peripherals.GPIO2);

    let settings = config.scatter;
    let plotter = match ScatterPlotter::new(
        PlotGeometry::SCATTER,
        settings.waveform.scatter_policy(),
        settings.initial_max_y,
    ) {
        Ok(plotter) => plotter,
        Err(e) => {
            error!("Plot layout rejected: {}", e);
            halt("scatter plot").await
        }
    };

    if let Err(e) = run(&settings, plotter, &mut lcd.screen, &mut analog, &mut sonar).await {
        error!("Display error: {}", e);
    }
    halt("scatter plot").await
}

async fn run<A, D>(
    settings: &ScatterSettings,
    mut plotter: ScatterPlotter,
    screen: &mut Screen,
    analog: &mut A,
    sonar: &mut D,
) -> Result<Infallible, DisplayError>
where
    A: AnalogSource,
    D: DistanceSensor,
{
    let colours = PlotColours::DEFAULT;
    let waveform = settings.waveform;
    info!("Scattering {}", waveform);
    plot::draw_scatter_grid(screen, plotter.geometry(), plotter.max_y(), &colours)?;

    let mut ticker = Ticker::every(Duration::from_millis(settings.signal.sample_period_ms as u64));
    let mut n: u32 = 0;
    loop {
        let sample = match waveform.synthesize(n, plotter.max_y(), &settings.signal) {
            Some(value) => value,
            None if waveform == Waveform::Distance => sonar.sample(),
            None => analog.sample(),
        };
        let frame = plotter.push(sample);
        trace!("({}, {})", n, frame.y);
        if frame.clear {
            debug!("Wrapped, axis now 0..{}", plotter.max_y());
        }
        plot::draw_scatter_point(screen, &plotter, &frame, &colours)?;

        n = n.wrapping_add(1);
        ticker.next().await;
    }
}
