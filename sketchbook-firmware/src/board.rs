//! LilyGO T-Display-S3 bring-up

use defmt::*;
use embassy_time::{Duration, Timer};
use esp_hal::{
    assign_resources,
    clock::CpuClock,
    gpio::{Input, InputConfig, Pull},
    peripherals::{Peripherals, TIMG0},
    rng::Rng,
    timer::timg::TimerGroup,
};
use sketchbook_core::config::PinConfig;
use sketchbook_core::rng::XorShift32;
use sketchbook_drivers::input::BoardButtons;
use sketchbook_hal::{gpio::ActiveLow, InputPin};
use sketchbook_hal_esp32::{pins, EspInput};

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        lcd: LcdResources<'d> {
            d0: GPIO39,
            d1: GPIO40,
            d2: GPIO41,
            d3: GPIO42,
            d4: GPIO45,
            d5: GPIO46,
            d6: GPIO47,
            d7: GPIO48,
            wr: GPIO8,
            rd: GPIO9,
            dc: GPIO7,
            cs: GPIO6,
            reset: GPIO5,
            backlight: GPIO38,
            power: GPIO15,
        },
        buttons: ButtonResources<'d> {
            left: GPIO0,
            right: GPIO14,
        },
    }
}

/// Initialise esp-hal with the CPU at full speed
pub fn init() -> Peripherals {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

/// Give embassy-time its timer. Call once, before the first await.
pub fn start_scheduler(timg0: TIMG0<'static>) {
    let timg0 = TimerGroup::new(timg0);
    esp_rtos::start(timg0.timer0);
}

/// Push button honouring the configured polarity
pub enum ButtonPin {
    ActiveHigh(EspInput<'static>),
    ActiveLow(ActiveLow<EspInput<'static>>),
}

impl ButtonPin {
    fn new(pin: Input<'static>, config: &PinConfig) -> Self {
        let pin = EspInput(pin);
        if config.inverted {
            Self::ActiveLow(ActiveLow(pin))
        } else {
            Self::ActiveHigh(pin)
        }
    }
}

impl InputPin for ButtonPin {
    fn is_high(&self) -> bool {
        match self {
            Self::ActiveHigh(pin) => pin.is_high(),
            Self::ActiveLow(pin) => pin.is_high(),
        }
    }
}

pub type Buttons = BoardButtons<ButtonPin, ButtonPin>;

fn input_config(config: &PinConfig) -> InputConfig {
    let pull = if config.pull_up { Pull::Up } else { Pull::None };
    InputConfig::default().with_pull(pull)
}

impl ButtonResources<'static> {
    /// Both buttons, with pulls and polarity from `[board.*_button]`
    pub fn into_buttons(self, left: &PinConfig, right: &PinConfig) -> Buttons {
        for (name, configured, wired) in [
            ("left_button", left.pin, pins::BUTTON_LEFT),
            ("right_button", right.pin, pins::BUTTON_RIGHT),
        ] {
            if configured != wired {
                warn!("{} is configured on GPIO{} but the board has it on GPIO{}", name, configured, wired);
            }
        }

        let left_pin = Input::new(self.left, input_config(left));
        let right_pin = Input::new(self.right, input_config(right));
        BoardButtons::new(ButtonPin::new(left_pin, left), ButtonPin::new(right_pin, right))
    }
}

/// Game and ripple randomness, seeded once from the hardware RNG
pub fn seeded_rng() -> XorShift32 {
    let seed = Rng::new().random();
    debug!("RNG seed {=u32:#x}", seed);
    XorShift32::new(seed)
}

/// Park a demo that could not start
pub async fn halt(reason: &str) -> ! {
    error!("{}, halting", reason);
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
