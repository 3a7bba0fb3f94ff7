//! Square-wave tones on a plain GPIO
//!
//! The tone runs in its own task so the caller only has to post frequency
//! changes. The LEDC is left to the LED fader.

use embassy_futures::select::{select, Either};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Output;
use sketchbook_hal::ToneOutput;

/// Frequency requests for [`square_wave`], `None` for silence
pub type ToneSignal = Signal<CriticalSectionRawMutex, Option<u32>>;

/// [`ToneOutput`] that posts to a [`square_wave`] task
#[derive(Clone, Copy)]
pub struct ToneSender<'a>(pub &'a ToneSignal);

impl ToneOutput for ToneSender<'_> {
    fn play(&mut self, freq_hz: u32) {
        self.0.signal(Some(freq_hz));
    }

    fn stop(&mut self) {
        self.0.signal(None);
    }
}

/// Toggle `pin` at the requested frequency forever
pub async fn square_wave(pin: &mut Output<'_>, signal: &ToneSignal) -> ! {
    let mut tone: Option<u32> = None;
    loop {
        match tone {
            None => {
                pin.set_low();
                tone = signal.wait().await;
            }
            Some(0) => tone = None,
            Some(hz) => {
                pin.toggle();
                let half_period = Duration::from_micros(500_000 / hz as u64);
                if let Either::First(next) = select(signal.wait(), Timer::after(half_period)).await {
                    tone = next;
                }
            }
        }
    }
}
