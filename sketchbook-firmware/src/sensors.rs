//! External parts wired to the header pins
//!
//! The esp-hal pin types are fixed at compile time, so each part is built
//! on the GPIOs of the default wiring and the configured numbers are only
//! cross-checked.

use core::cell::RefCell;

use esp_hal::{
    analog::adc::{Adc, AdcConfig, Attenuation},
    gpio::{Input, InputConfig, Level, Output, OutputConfig},
    peripherals::{ADC1, GPIO1, GPIO10, GPIO2, GPIO3},
    Blocking,
};
use static_cell::StaticCell;

use sketchbook_core::config::SketchConfig;
use sketchbook_core::traits::AnalogSource;
use sketchbook_drivers::input::Joystick;
use sketchbook_drivers::sensor::{AnalogPin, UltrasonicConfig, UltrasonicRanger};
use sketchbook_hal::{AnalogInput, InputPin};
use sketchbook_hal_esp32::{AdcAllocator, BlockingAdc, EspInput, EspOutput, SystemClock};

use crate::config::check_wiring;

pub type Sonar = UltrasonicRanger<EspOutput<'static>, EspInput<'static>, SystemClock>;

/// Full 0..3.1 V input range
const ATTENUATION: Attenuation = Attenuation::_11dB;

static JOYSTICK_ADC: StaticCell<RefCell<Adc<'static, ADC1<'static>, Blocking>>> = StaticCell::new();

/// The pin plotted by "Reading Analog Pin"
pub fn analog_input(config: &SketchConfig, adc: ADC1<'static>, pin: GPIO10<'static>) -> impl AnalogSource {
    check_wiring("analog_input", config.board.analog_input, 10);
    claim_adc(&mut AdcAllocator::new(), "analog_input", config.board.analog_input);

    let mut adc_config = AdcConfig::new();
    let mut pin = adc_config.enable_pin(pin, ATTENUATION);
    let mut adc = Adc::new(adc, adc_config);
    AnalogPin::new(BlockingAdc::new(move || adc.read_oneshot(&mut pin)))
}

/// HC-SR04 on the trigger and echo pins
pub fn sonar(config: &SketchConfig, trigger: GPIO1<'static>, echo: GPIO2<'static>) -> Sonar {
    check_wiring("sonar_trigger", config.board.sonar_trigger, 1);
    check_wiring("sonar_echo", config.board.sonar_echo, 2);

    let trigger = EspOutput(Output::new(trigger, Level::Low, OutputConfig::default()));
    let echo = EspInput(Input::new(echo, InputConfig::default()));
    let ranger_config = UltrasonicConfig {
        timeout_us: config.sonar.timeout_us,
        ..UltrasonicConfig::default()
    };
    defmt::debug!("Sonar {}", ranger_config);
    UltrasonicRanger::new(trigger, echo, SystemClock, ranger_config)
}

/// Two-axis stick with a push switch; both axes share ADC1
///
/// Call at most once.
pub fn joystick(
    config: &SketchConfig,
    adc: ADC1<'static>,
    x: GPIO1<'static>,
    y: GPIO2<'static>,
    click: GPIO3<'static>,
) -> Joystick<impl AnalogInput, impl AnalogInput, impl InputPin> {
    check_wiring("joystick_x", config.board.joystick_x, 1);
    check_wiring("joystick_y", config.board.joystick_y, 2);
    check_wiring("joystick_click", config.board.joystick_click, 3);
    let mut channels = AdcAllocator::new();
    claim_adc(&mut channels, "joystick_x", config.board.joystick_x);
    claim_adc(&mut channels, "joystick_y", config.board.joystick_y);

    let mut adc_config = AdcConfig::new();
    let mut x_pin = adc_config.enable_pin(x, ATTENUATION);
    let mut y_pin = adc_config.enable_pin(y, ATTENUATION);
    let adc: &'static RefCell<_> = JOYSTICK_ADC.init(RefCell::new(Adc::new(adc, adc_config)));

    let x_axis = BlockingAdc::new(move || adc.borrow_mut().read_oneshot(&mut x_pin));
    let y_axis = BlockingAdc::new(move || adc.borrow_mut().read_oneshot(&mut y_pin));
    let click = EspInput(Input::new(click, InputConfig::default()));
    Joystick::new(x_axis, y_axis, click)
}

/// Log the ADC channel behind a configured pin, or why it has none
fn claim_adc(channels: &mut AdcAllocator, name: &str, gpio: u8) {
    match channels.allocate(gpio) {
        Ok(channel) => defmt::debug!("{} on {}", name, channel),
        Err(e) => defmt::warn!("{} on GPIO{}: {}", name, gpio, e),
    }
}
