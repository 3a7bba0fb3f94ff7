//! ST7789 panel on the T-Display-S3 8080 bus

use defmt::*;
use esp_hal::{
    delay::Delay,
    gpio::{Level, Output, OutputConfig},
};
use mipidsi::{
    interface::{Generic8BitBus, ParallelInterface},
    models::ST7789,
    options::{ColorInversion, ColorOrder, Orientation, Rotation},
    Builder,
};
use sketchbook_display::GraphicsCanvas;
use sketchbook_hal_esp32::pins;

use crate::board::LcdResources;

type Pin = Output<'static>;

pub type LcdBus = Generic8BitBus<Pin, Pin, Pin, Pin, Pin, Pin, Pin, Pin>;
pub type LcdInterface = ParallelInterface<LcdBus, Pin, Pin>;
pub type Panel = mipidsi::Display<LcdInterface, ST7789, Pin>;
/// The panel as a `sketchbook_display::Canvas`
pub type Screen = GraphicsCanvas<Panel>;

/// Which way up the demo holds the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Layout {
    /// 320x170, buttons on the left
    Landscape,
    /// 170x320, buttons at the bottom
    Portrait,
}

impl Layout {
    fn rotation(self) -> Rotation {
        match self {
            Layout::Landscape => Rotation::Deg270,
            Layout::Portrait => Rotation::Deg0,
        }
    }
}

/// Panel controller did not answer its init sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub struct LcdError;

/// Powered, lit panel. The control lines are held for the panel's lifetime.
pub struct Lcd {
    pub screen: Screen,
    _power: Pin,
    _backlight: Pin,
    _cs: Pin,
    _rd: Pin,
}

impl Lcd {
    pub fn new(res: LcdResources<'static>, layout: Layout) -> Result<Self, LcdError> {
        let out = OutputConfig::default();

        // The panel supply must be on before the controller is reset
        let power = Output::new(res.power, Level::High, out);
        let mut backlight = Output::new(res.backlight, Level::Low, out);
        // Sole device on the bus, so chip select stays asserted
        let cs = Output::new(res.cs, Level::Low, out);
        // Write-only bus
        let rd = Output::new(res.rd, Level::High, out);

        let bus = Generic8BitBus::new((
            Output::new(res.d0, Level::Low, out),
            Output::new(res.d1, Level::Low, out),
            Output::new(res.d2, Level::Low, out),
            Output::new(res.d3, Level::Low, out),
            Output::new(res.d4, Level::Low, out),
            Output::new(res.d5, Level::Low, out),
            Output::new(res.d6, Level::Low, out),
            Output::new(res.d7, Level::Low, out),
        ));
        let dc = Output::new(res.dc, Level::Low, out);
        let wr = Output::new(res.wr, Level::High, out);
        let di = ParallelInterface::new(bus, dc, wr);
        let reset = Output::new(res.reset, Level::High, out);

        let mut delay = Delay::new();
        let panel = Builder::new(ST7789, di)
            .reset_pin(reset)
            .color_order(ColorOrder::Rgb)
            .invert_colors(ColorInversion::Inverted)
            .display_size(pins::LCD_WIDTH, pins::LCD_HEIGHT)
            .display_offset(pins::LCD_OFFSET_X, 0)
            .orientation(Orientation::new().rotate(layout.rotation()))
            .init(&mut delay)
            .map_err(|_| LcdError)?;

        backlight.set_high();
        info!("LCD ready ({})", layout);

        Ok(Self {
            screen: GraphicsCanvas::new(panel),
            _power: power,
            _backlight: backlight,
            _cs: cs,
            _rd: rd,
        })
    }
}
