//! Configuration embedded at build time
//!
//! `build.rs` validates `sketchbook.toml` and stores it as postcard bytes.
//! Decoding cannot normally fail, but a stale or corrupt blob still boots
//! with the defaults.

use defmt::*;

use sketchbook_core::config::{ConfigError as SettingsError, SketchConfig};
use sketchbook_hal_esp32::{pins, GpioAllocator};

/// Postcard encoding of `sketchbook.toml`
static EMBEDDED_CONFIG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/sketchbook_config.bin"));

/// Reasons the embedded config was not used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum ConfigError {
    /// Deserialization failed
    Deserialize,
    /// Decoded but rejected by `SketchConfig::validate`
    Invalid(SettingsError),
}

/// Decode and check the embedded configuration
pub fn decode(bytes: &[u8]) -> Result<SketchConfig, ConfigError> {
    let config: SketchConfig = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
    config.validate().map_err(ConfigError::Invalid)?;
    Ok(config)
}

/// Embedded configuration, or the defaults if it cannot be used
pub fn load() -> SketchConfig {
    debug!("Embedded config is {} bytes", EMBEDDED_CONFIG.len());
    match decode(EMBEDDED_CONFIG) {
        Ok(config) => {
            log_config_summary(&config);
            config
        }
        Err(e) => {
            warn!("Embedded config unusable: {}, using defaults", e);
            SketchConfig::default()
        }
    }
}

/// Pins are fixed per binary; report a config that asks for a different one
///
/// A configured pin the chip lacks, or one the display already drives, is
/// reported as such.
pub fn check_wiring(name: &str, configured: u8, wired: u8) {
    if let Err(e) = board_pins().allocate(configured) {
        warn!("{} cannot use GPIO{}: {}", name, configured, e);
    } else if configured != wired {
        warn!(
            "{} is configured on GPIO{} but this build drives GPIO{}",
            name, configured, wired
        );
    }
}

/// Allocator holding every pin the board wires up, except the buttons
fn board_pins() -> GpioAllocator {
    let mut alloc = GpioAllocator::new();
    for pin in pins::RESERVED {
        if pin != pins::BUTTON_LEFT && pin != pins::BUTTON_RIGHT {
            // RESERVED is distinct and in range
            let _ = alloc.allocate(pin);
        }
    }
    alloc
}

fn log_config_summary(config: &SketchConfig) {
    info!("Configuration loaded");
    debug!(
        "  buttons GPIO{} / GPIO{}",
        config.board.left_button.pin, config.board.right_button.pin
    );
    debug!(
        "  plot: {} every {} ms, x_step {}",
        config.plot.waveform, config.plot.signal.sample_period_ms, config.plot.x_step
    );
    debug!(
        "  scatter: {} every {} ms",
        config.scatter.waveform, config.scatter.signal.sample_period_ms
    );
    debug!(
        "  fader: {} Hz, {} bits, max duty {}",
        config.fader.frequency_hz, config.fader.resolution_bits, config.fader.max_duty
    );
    debug!(
        "  ripple: {}x{}, damping >> {}",
        config.ripple.width, config.ripple.height, config.ripple.damping_shift
    );
}
