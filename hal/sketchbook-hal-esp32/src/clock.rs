//! Microsecond clock over the esp-hal time base

use esp_hal::time::Instant;
use sketchbook_hal::MicrosClock;

/// Reads the system timer through [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl MicrosClock for SystemClock {
    fn now_us(&self) -> u64 {
        Instant::now().duration_since_epoch().as_micros()
    }
}
