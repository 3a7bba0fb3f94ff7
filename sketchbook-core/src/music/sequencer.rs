//! Note-by-note playback plan

use core::fmt::Write;

use super::{Note, Song, NOTE_GAP_MS};

/// Staff drawing area
pub const STAFF_WIDTH: i32 = 320;
pub const STAFF_HEIGHT: i32 = 150;
/// Row of the lowest pitch and of rests
pub const STAFF_BASELINE: i32 = 169;

/// Status line text
pub type Status = heapless::String<48>;

/// Horizontal bar marking one note on the staff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StaffBar {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub rest: bool,
}

/// Everything needed to play and show one note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    /// 1-based position in the song
    pub ordinal: usize,
    pub total: usize,
    pub note: Note,
    pub song_name: &'static str,
    /// Time until the next note starts
    pub duration_ms: u32,
    /// Time before the fixed gap that separates this note from the next
    pub sound_ms: u32,
    /// Wipe the staff before drawing this bar
    pub clear_staff: bool,
    pub bar: StaffBar,
}

impl NoteEvent {
    pub fn frequency(&self) -> Option<u32> {
        self.note.frequency()
    }

    /// e.g. `05/33:A  440  THE LEGEND 0`
    pub fn status(&self) -> Status {
        let mut line = Status::new();
        // Song names are short enough that the line always fits
        let _ = match (self.note.name(), self.frequency()) {
            (Some(name), Some(freq)) => write!(
                line,
                "{:02}/{:>2}:{:<2} {:<4} {}",
                self.ordinal, self.total, name, freq, self.song_name
            ),
            _ => write!(
                line,
                "{:02}/{:>2}:-- ---- {}",
                self.ordinal, self.total, self.song_name
            ),
        };
        line
    }
}

/// Walks a song producing [`NoteEvent`]s
#[derive(Debug, Clone)]
pub struct Sequencer<'a> {
    song: &'a Song,
    index: usize,
    beats_elapsed: u32,
    column: u32,
}

impl<'a> Sequencer<'a> {
    pub fn new(song: &'a Song) -> Self {
        Self {
            song,
            index: 0,
            beats_elapsed: 0,
            column: 0,
        }
    }

    pub fn song(&self) -> &'a Song {
        self.song
    }

    fn column_width(&self) -> i32 {
        STAFF_WIDTH / self.song.bar_beats.max(1) as i32
    }

    fn row_height(&self) -> i32 {
        let span = self.song.max_pitch.saturating_sub(self.song.min_pitch).max(1);
        STAFF_HEIGHT / span as i32
    }
}

impl Iterator for Sequencer<'_> {
    type Item = NoteEvent;

    fn next(&mut self) -> Option<NoteEvent> {
        let note = *self.song.notes.get(self.index)?;
        let beats = note.beats as u32;
        let duration_ms = beats * self.song.beat_ms;

        let clear_staff = self.beats_elapsed % self.song.bar_beats.max(1) == 0;
        if clear_staff {
            self.column = 0;
        }

        let dx = self.column_width();
        let y = match note.pitch {
            Some(p) => {
                STAFF_BASELINE - self.row_height() * (p as i32 - self.song.min_pitch as i32)
            }
            None => STAFF_BASELINE,
        };
        let bar = StaffBar {
            x: self.column as i32 * dx,
            y,
            width: dx * beats as i32 - 2,
            rest: note.pitch.is_none(),
        };

        self.index += 1;
        self.beats_elapsed += beats;
        self.column += beats;

        Some(NoteEvent {
            ordinal: self.index,
            total: self.song.notes.len(),
            note,
            song_name: self.song.name,
            duration_ms,
            sound_ms: duration_ms.saturating_sub(NOTE_GAP_MS),
            clear_staff,
            bar,
        })
    }
}

/// Endless rotation through a list of songs
#[derive(Debug, Clone)]
pub struct Playlist<'a> {
    songs: &'a [&'a Song],
    index: usize,
}

impl<'a> Playlist<'a> {
    pub const fn new(songs: &'a [&'a Song]) -> Self {
        Self { songs, index: 0 }
    }
}

impl<'a> Iterator for Playlist<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<&'a Song> {
        let song = *self.songs.get(self.index % self.songs.len().max(1))?;
        self.index = (self.index + 1) % self.songs.len();
        Some(song)
    }
}
