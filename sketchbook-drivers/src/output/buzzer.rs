//! Passive buzzer playing sequencer notes

use sketchbook_core::music::NoteEvent;
use sketchbook_hal::ToneOutput;

pub struct Buzzer<T> {
    tone: T,
    sounding: Option<u32>,
}

impl<T: ToneOutput> Buzzer<T> {
    pub fn new(tone: T) -> Self {
        Self {
            tone,
            sounding: None,
        }
    }

    /// Start the note's tone, or fall silent for a rest
    ///
    /// The caller owns the timing and moves on after `duration_ms`. A tone
    /// keeps sounding until the next note or rest replaces it, so call
    /// [`Buzzer::silence`] only once the song is over.
    pub fn start(&mut self, event: &NoteEvent) {
        match event.frequency() {
            Some(freq) => {
                self.tone.play(freq);
                self.sounding = Some(freq);
            }
            None => self.silence(),
        }
    }

    pub fn silence(&mut self) {
        self.tone.stop();
        self.sounding = None;
    }

    /// Frequency currently playing
    pub fn sounding(&self) -> Option<u32> {
        self.sounding
    }
}
