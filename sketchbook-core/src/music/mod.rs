//! Tune sequencer
//!
//! A song is a list of pitch indices and beat counts. The sequencer turns it
//! into timed [`NoteEvent`]s carrying everything the buzzer and the staff
//! display need; it never sleeps or touches hardware itself.

mod sequencer;
mod songs;

pub use sequencer::{NoteEvent, Playlist, Sequencer, StaffBar, Status, STAFF_WIDTH};
pub use songs::{CATALOGUE, DEFAULT_PLAYLIST, LEGEND_0, LEGEND_1, LEGEND_2, LEGEND_3, MEGALOVANIA};

/// Number of playable pitches, G3 to G5
pub const NUM_TONES: usize = 37;

/// Equal-tempered frequencies in Hz, one semitone apart starting at G3
pub const TONE_FREQS: [u32; NUM_TONES] = [
    196, 208, 220, 233, 247, 262, 277, // G3
    294, 311, 330, 349, 370, 392, 415, // D4
    440, 466, 494, 523, 554, 587, 622, // A4
    659, 698, 740, 784, 831, 880, 932, // E5
    988, 1047, 1109, 1175, 1245, 1319, 1397, // B5
    1480, 1568,
];

/// Note names, index 0 is G
pub const TONE_NAMES: [&str; 12] = [
    "G", "Ab", "A", "Bb", "B", "C", "C#", "D", "D#", "E", "F", "F#",
];

/// Silence left between consecutive notes
pub const NOTE_GAP_MS: u32 = 10;

/// One note or rest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// Index into [`TONE_FREQS`], `None` for a rest
    pub pitch: Option<u8>,
    pub beats: u8,
}

impl Note {
    pub fn frequency(&self) -> Option<u32> {
        self.pitch
            .and_then(|p| TONE_FREQS.get(p as usize))
            .copied()
    }

    pub fn name(&self) -> Option<&'static str> {
        self.pitch.map(|p| TONE_NAMES[p as usize % TONE_NAMES.len()])
    }
}

/// A tune with its tempo and staff range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Song {
    pub name: &'static str,
    pub notes: &'static [Note],
    /// Length of one beat
    pub beat_ms: u32,
    /// Beats shown across the staff before it clears
    pub bar_beats: u32,
    pub min_pitch: u8,
    pub max_pitch: u8,
}

impl Song {
    /// Total playing time
    pub fn duration_ms(&self) -> u32 {
        self.notes.iter().map(|n| n.beats as u32 * self.beat_ms).sum()
    }
}
