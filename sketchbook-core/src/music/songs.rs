//! Built-in song catalogue
//!
//! Pitches index [`TONE_FREQS`](super::TONE_FREQS); note lengths are in beats.

use super::{Note, Song};

const fn note(pitch: u8, beats: u8) -> Note {
    Note {
        pitch: Some(pitch),
        beats,
    }
}

const fn rest(beats: u8) -> Note {
    Note { pitch: None, beats }
}

#[rustfmt::skip]
const MEGALOVANIA_NOTES: [Note; 52] = [
    note(7, 1), note(7, 1), note(19, 2), note(14, 2), rest(1), note(13, 1), rest(1), note(12, 1), rest(1), note(10, 2), note(7, 1), note(10, 1), note(12, 1),
    note(5, 1), note(5, 1), note(19, 2), note(14, 2), rest(1), note(13, 1), rest(1), note(12, 1), rest(1), note(10, 2), note(7, 1), note(10, 1), note(12, 1),
    note(4, 1), note(4, 1), note(19, 2), note(14, 2), rest(1), note(13, 1), rest(1), note(12, 1), rest(1), note(10, 2), note(7, 1), note(10, 1), note(12, 1),
    note(3, 1), note(3, 1), note(19, 2), note(14, 2), rest(1), note(13, 1), rest(1), note(12, 1), rest(1), note(10, 2), note(7, 1), note(10, 1), note(12, 1),
];

pub const MEGALOVANIA: Song = Song {
    name: "MEGALOVANIA",
    notes: &MEGALOVANIA_NOTES,
    beat_ms: 125,
    bar_beats: 32,
    min_pitch: 0,
    max_pitch: 22,
};

#[rustfmt::skip]
const LEGEND_0_NOTES: [Note; 33] = [
    rest(2), note(17, 1), note(16, 1), note(17, 1), note(19, 1), note(21, 2),
    note(21, 1), note(19, 1), note(21, 1), note(22, 1), note(24, 4),
    rest(2), note(26, 1), note(24, 1), note(26, 1), note(28, 1), note(29, 2),
    note(28, 4), note(24, 4),
    note(22, 2), note(21, 2), note(22, 2), note(26, 2),
    note(24, 2), note(22, 2), note(21, 2), note(17, 2),
    note(19, 4), note(17, 2), note(21, 2),
    note(19, 4), note(21, 4),
    rest(8),
];

pub const LEGEND_0: Song = Song {
    name: "THE LEGEND 0",
    notes: &LEGEND_0_NOTES,
    beat_ms: 300,
    bar_beats: 32,
    min_pitch: 0,
    max_pitch: 36,
};

#[rustfmt::skip]
const LEGEND_1_NOTES: [Note; 64] = [
    note(2, 2), note(5, 1), note(9, 1), note(17, 2), note(16, 2),
    note(12, 2), note(7, 2), note(9, 4),
    note(9, 2), note(10, 1), note(12, 1), note(10, 2), note(9, 2),
    note(7, 2), note(5, 2), note(9, 4),

    note(2, 2), note(5, 1), note(9, 1), note(17, 2), note(16, 2),
    note(12, 2), note(7, 2), note(9, 4),
    note(9, 2), note(10, 1), note(12, 1), note(10, 2), note(9, 2),
    note(7, 2), note(5, 2), note(9, 4),

    note(14, 2), note(17, 1), note(21, 1), note(29, 2), note(28, 2),
    note(24, 2), note(19, 2), note(21, 4),
    note(21, 2), note(22, 1), note(24, 1), note(22, 2), note(21, 2),
    note(19, 2), note(17, 2), note(21, 4),

    note(14, 2), note(17, 1), note(21, 1), note(29, 2), note(28, 2),
    note(24, 2), note(19, 2), note(21, 4),
    note(33, 2), note(34, 1), note(36, 1), note(34, 2), note(33, 2),
    note(31, 2), note(29, 2), note(33, 4),
];

pub const LEGEND_1: Song = Song {
    name: "THE LEGEND 1",
    notes: &LEGEND_1_NOTES,
    beat_ms: 300,
    bar_beats: 32,
    min_pitch: 0,
    max_pitch: 36,
};

#[rustfmt::skip]
const LEGEND_2_NOTES: [Note; 38] = [
    rest(4), note(17, 2), note(16, 2), note(17, 2), note(19, 2), note(21, 4),
    note(21, 3), note(19, 1), note(21, 3), note(22, 1), note(24, 4), note(26, 2), note(28, 2),
    note(29, 6), note(31, 2), note(29, 6), note(28, 2),
    note(24, 16),

    note(22, 2), note(21, 2), note(22, 2), note(26, 2), note(24, 2), note(22, 2), note(21, 2), note(22, 2),
    note(24, 4), note(21, 2), note(19, 2), note(21, 4), note(17, 2), note(21, 2),
    note(22, 6), note(21, 2), note(19, 4), note(17, 4),
    note(16, 8), note(21, 8),
];

pub const LEGEND_2: Song = Song {
    name: "THE LEGEND 2",
    notes: &LEGEND_2_NOTES,
    beat_ms: 150,
    bar_beats: 32,
    min_pitch: 0,
    max_pitch: 36,
};

#[rustfmt::skip]
const LEGEND_3_NOTES: [Note; 48] = [
    rest(2), note(28, 1), note(29, 1), note(28, 1), note(26, 1),
    note(21, 2), note(17, 2), note(21, 2),
    rest(2), note(28, 1), note(29, 1), note(28, 1), note(26, 1),
    note(31, 6),
    rest(2), note(28, 1), note(29, 1), note(28, 1), note(26, 1),
    note(28, 4), note(29, 2),
    note(24, 2), note(24, 1), note(22, 1), note(21, 1), note(22, 1),
    note(21, 6),
    rest(2), note(21, 1), note(22, 1), note(21, 1), note(19, 1),
    note(15, 2), note(10, 2), note(22, 2),
    note(21, 3), note(19, 1), note(17, 1), note(19, 1),
    note(21, 4), note(17, 2),
    note(20, 2), note(16, 2), note(14, 2),
    note(8, 4), note(20, 2),
    note(21, 12),
    rest(6),
];

pub const LEGEND_3: Song = Song {
    name: "THE LEGEND 3",
    notes: &LEGEND_3_NOTES,
    beat_ms: 200,
    bar_beats: 24,
    min_pitch: 0,
    max_pitch: 36,
};

/// Every built-in song
pub const CATALOGUE: [&Song; 5] = [&MEGALOVANIA, &LEGEND_0, &LEGEND_1, &LEGEND_2, &LEGEND_3];

/// Songs played in a loop by default
pub const DEFAULT_PLAYLIST: [&Song; 4] = [&LEGEND_0, &LEGEND_1, &LEGEND_2, &LEGEND_3];
