//! Time plot: a circular-buffer plotter for an analog pin, an ultrasonic
//! ranger or one of the synthetic waveforms
//!
//! Left release freezes the trace and shows gridlines, right release goes
//! back to scrolling.

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Ticker};
use esp_backtrace as _;
use esp_println as _;

use sketchbook_core::config::SketchConfig;
use sketchbook_core::plot::{PlotterOptions, RangePolicy, TimePlotter};
use sketchbook_core::signal::{FunctionMenu, MenuEvent, Waveform};
use sketchbook_core::traits::{AnalogSource, DistanceSensor};
use sketchbook_display::screens::{menu, plot::{self, PlotColours}};
use sketchbook_display::{Canvas, DisplayError};
use sketchbook_firmware::{config, halt, sensors, start_scheduler, Buttons, Layout, Lcd, Screen};

esp_bootloader_esp_idf::esp_app_desc!();

/// Button polling rate on the selection menu
const MENU_POLL_MS: u64 = 50;

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = sketchbook_firmware::init();
    let resources = sketchbook_firmware::split_resources!(peripherals);
    start_scheduler(peripherals.TIMG0);

    info!("Sketchbook time plot starting...");
    let config = config::load();

    let mut lcd = match Lcd::new(resources.lcd, Layout::Landscape) {
        Ok(lcd) => lcd,
        Err(e) => {
            error!("LCD init failed: {}", e);
            halt("time plot").await
        }
    };
    let mut buttons = resources
        .buttons
        .into_buttons(&config.board.left_button, &config.board.right_button);
    let mut analog = sensors::analog_input(&config, peripherals.ADC1, peripherals.GPIO10);
    let mut sonar = sensors::sonar(&config, peripherals.GPIO1, peripherals.GPIO2);

    let result = run(&config, &mut lcd.screen, &mut buttons, &mut analog, &mut sonar).await;
    if let Err(e) = result {
        error!("Display error: {}", e);
    }
    halt("time plot").await
}

async fn run<A, D>(
    config: &SketchConfig,
    screen: &mut Screen,
    buttons: &mut Buttons,
    analog: &mut A,
    sonar: &mut D,
) -> Result<Infallible, DisplayError>
where
    A: AnalogSource,
    D: DistanceSensor,
{
    let settings = &config.plot;
    let colours = PlotColours::DEFAULT;
    screen.fill_screen(colours.background)?;

    let waveform = if settings.user_select {
        select_waveform(screen, buttons, &colours).await?
    } else {
        settings.waveform
    };
    info!("Plotting {}", waveform);
    screen.fill_screen(colours.background)?;

    let policy = if waveform.is_measured() {
        RangePolicy::time_plot(settings.min_y_range)
    } else {
        waveform.time_policy()
    };
    let options = PlotterOptions {
        initial_max_y: settings.min_y_range,
        grow_on_overflow: waveform.is_measured(),
        scrolling: settings.scrolling,
        gridlines: settings.gridlines,
        amplitude: waveform.amplitude(),
    };
    let geometry = settings.geometry();
    let mut plotter = match TimePlotter::new(geometry, policy, options) {
        Ok(plotter) => plotter,
        Err(e) => {
            error!("Plot layout rejected: {}", e);
            halt("time plot").await
        }
    };

    let title = waveform.label(&settings.signal, config.board.analog_input);
    plot::draw_title(screen, &geometry, &title, &colours)?;
    plot::draw_grid(screen, &geometry, plotter.gridlines(), &colours)?;
    plot::draw_axis_labels(screen, &geometry, plotter.axis_labels(), &colours)?;

    let mut ticker = Ticker::every(Duration::from_millis(settings.signal.sample_period_ms as u64));
    loop {
        let n = plotter.ring().sample_index();
        let sample = match waveform.synthesize(n, plotter.max_y(), &settings.signal) {
            Some(value) => value,
            None if waveform == Waveform::Distance => sonar.sample(),
            None => analog.sample(),
        };
        let frame = plotter.push(sample, buttons.poll());
        if frame.axis_changed {
            debug!("Axis now 0..{}", plotter.max_y());
        }
        plot::draw_time_frame(screen, &plotter, &frame, &colours)?;
        ticker.next().await;
    }
}

/// Show the source menu until the left button picks an entry
async fn select_waveform(
    screen: &mut Screen,
    buttons: &mut Buttons,
    colours: &PlotColours,
) -> Result<Waveform, DisplayError> {
    let mut menu = FunctionMenu::new();
    menu::draw_header(screen, colours)?;

    let mut ticker = Ticker::every(Duration::from_millis(MENU_POLL_MS));
    loop {
        match menu.poll(buttons.poll()) {
            MenuEvent::Selected(waveform) => return Ok(waveform),
            event => menu::draw_menu(screen, &menu, event, colours)?,
        }
        ticker.next().await;
    }
}
