//! Build script for sketchbook-firmware
//!
//! - Passes the esp-hal and defmt linker scripts
//! - Validates sketchbook.toml and embeds it as postcard bytes

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sketchbook_core::config::{ConfigError, SketchConfig};

/// File name under OUT_DIR that the firmware includes
const CONFIG_BLOB: &str = "sketchbook_config.bin";

fn main() {
    setup_linker();
    let config = validate_config();
    embed_config(&config);
}

/// Link against the esp-hal memory layout and the defmt section script
fn setup_linker() {
    println!("cargo:rustc-link-arg=-nostartfiles");
    println!("cargo:rustc-link-arg=-Tlinkall.x");
    println!("cargo:rustc-link-arg=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate sketchbook.toml at compile time
fn validate_config() -> SketchConfig {
    println!("cargo:rerun-if-changed=sketchbook.toml");

    let config_path = Path::new("sketchbook.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: sketchbook.toml not found!                               ║\n\
            ║                                                                  ║\n\
            ║  The demos read their pins and settings from sketchbook.toml.    ║\n\
            ║  Please create one in the sketchbook-firmware directory.         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read sketchbook.toml                           ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Syntax first, so a typo is not reported as a missing field
    if let Err(e) = toml::from_str::<toml::Value>(&config_content) {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid TOML syntax in sketchbook.toml                   ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    let config: SketchConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Unexpected value in sketchbook.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Configuration errors in sketchbook.toml                  ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            describe(e)
                .iter()
                .map(|line| format!("║  • {:<62} ║", line))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=sketchbook.toml validated successfully");
    config
}

/// Human readable explanation of a rejected config
fn describe(error: ConfigError) -> Vec<String> {
    match error {
        ConfigError::PinConflict(pin) => vec![
            format!("GPIO{} is used twice by one demo", pin),
            "Each demo needs distinct pins; demos may share".to_string(),
        ],
        ConfigError::InvalidPin(pin) => vec![format!("GPIO{} does not exist on the ESP32-S3", pin)],
        ConfigError::PlotLayout => vec![
            "[plot] x_step does not fit the plot area".to_string(),
            "At most 320 samples can be buffered".to_string(),
        ],
        ConfigError::ZeroPeriod => vec!["sample_period_ms and step_ms must be at least 1".to_string()],
        ConfigError::RippleSize => vec![
            "[ripple] width must be 41..=180, height 41..=95".to_string(),
            "damping_shift must be 1..=15".to_string(),
        ],
        ConfigError::FaderRange => vec![
            "[fader] resolution_bits must be 1..=14".to_string(),
            "max_duty must be below 2^resolution_bits".to_string(),
        ],
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the validated config where `config::load` picks it up
fn embed_config(config: &SketchConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let bytes = match postcard::to_allocvec(config) {
        Ok(bytes) => bytes,
        Err(e) => panic!("failed to encode sketchbook.toml: {}", e),
    };
    if let Err(e) = fs::write(out_dir.join(CONFIG_BLOB), bytes) {
        panic!("failed to write {}: {}", CONFIG_BLOB, e);
    }
}
