//! Water-ripple simulation
//!
//! Classic two-buffer height field: every step each interior cell becomes
//! half the sum of its four neighbours in the newer buffer minus its own
//! value in the older one, then loses a small fraction to damping. The
//! result is written over the older buffer and the two are swapped.
//!
//! Heights are `u16` and the neighbour average wraps on overflow, which is
//! what gives the surface its speckled look after a stir.

use crate::plot::map_range;
use crate::rng::RandomSource;

/// Height of a freshly disturbed cell
pub const PEAK: u16 = 0xffff;

/// Time between simulation steps
pub const STEP_MS: u64 = 50;
/// How long the wandering source keeps its drift
const DRIFT_HOLD_MS: u64 = 1000 * STEP_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RippleError {
    /// A buffer is not `width * height` long
    BufferSize,
    /// Surface smaller than the margins the sources need
    TooSmall,
}

/// Surface dimensions and damping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RippleSettings {
    pub width: usize,
    pub height: usize,
    /// Each step a cell loses `value >> damping_shift`
    pub damping_shift: u8,
    /// Start from random noise instead of still water
    pub random_start: bool,
}

impl RippleSettings {
    /// Long-lived ripples on a 180x95 surface
    pub const CALM: Self = Self {
        width: 180,
        height: 95,
        damping_shift: 13,
        random_start: false,
    };

    /// Short-lived ripples on a 160x85 surface seeded with noise
    pub const CHOPPY: Self = Self {
        width: 160,
        height: 85,
        damping_shift: 11,
        random_start: true,
    };

    pub const fn cells(&self) -> usize {
        self.width * self.height
    }
}

impl Default for RippleSettings {
    fn default() -> Self {
        Self::CALM
    }
}

/// Point source that wanders across the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WanderingSource {
    pub row: i32,
    pub col: i32,
    drift: (i32, i32),
    last_turn_ms: u64,
    turn_after_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rain {
    last_burst_ms: u64,
    next_after_ms: u64,
}

/// Height field plus the things that disturb it
pub struct RippleField<'a> {
    settings: RippleSettings,
    newer: &'a mut [u16],
    older: &'a mut [u16],
    source: Option<WanderingSource>,
    rain: Option<Rain>,
    pulse: bool,
}

impl<'a> RippleField<'a> {
    /// Build a field over two caller-owned buffers of `width * height` cells
    pub fn new<R: RandomSource>(
        settings: RippleSettings,
        newer: &'a mut [u16],
        older: &'a mut [u16],
        rng: &mut R,
    ) -> Result<Self, RippleError> {
        if settings.width < 41 || settings.height < 41 {
            return Err(RippleError::TooSmall);
        }
        if newer.len() != settings.cells() || older.len() != settings.cells() {
            return Err(RippleError::BufferSize);
        }
        newer.fill(0);
        older.fill(0);

        let mut field = Self {
            settings,
            newer,
            older,
            source: Some(WanderingSource {
                row: (settings.height / 2) as i32,
                col: (settings.width / 2) as i32,
                drift: (0, 0),
                last_turn_ms: 0,
                turn_after_ms: STEP_MS,
            }),
            rain: None,
            pulse: false,
        };
        if settings.random_start {
            field.randomise(rng);
        }
        Ok(field)
    }

    pub fn settings(&self) -> &RippleSettings {
        &self.settings
    }

    /// Latest heights, row-major
    pub fn surface(&self) -> &[u16] {
        self.newer
    }

    pub fn height_at(&self, col: usize, row: usize) -> u16 {
        if col >= self.settings.width || row >= self.settings.height {
            return 0;
        }
        self.newer[row * self.settings.width + col]
    }

    pub fn source(&self) -> Option<&WanderingSource> {
        self.source.as_ref()
    }

    pub fn raining(&self) -> bool {
        self.rain.is_some()
    }

    fn randomise<R: RandomSource>(&mut self, rng: &mut R) {
        let w = self.settings.width;
        for row in 1..self.settings.height - 1 {
            for col in 1..w - 1 {
                let h = rng.random(0, 0xffff) as u16;
                self.newer[row * w + col] = h;
                self.older[row * w + col] = h;
            }
        }
    }

    /// Switch the wandering source; a revived source appears somewhere new
    pub fn toggle_source<R: RandomSource>(&mut self, now_ms: u64, rng: &mut R) {
        self.source = match self.source {
            Some(_) => None,
            None => Some(WanderingSource {
                row: rng.random(10, self.settings.height as i32 - 10),
                col: rng.random(10, self.settings.width as i32 - 10),
                drift: (0, 0),
                last_turn_ms: now_ms,
                turn_after_ms: 0,
            }),
        };
    }

    /// Switch rainfall; the first burst falls on the next step
    pub fn toggle_rain(&mut self, now_ms: u64) {
        self.rain = match self.rain {
            Some(_) => None,
            None => Some(Rain {
                last_burst_ms: now_ms,
                next_after_ms: 0,
            }),
        };
    }

    /// Drop one square splash on the next step
    pub fn pulse(&mut self) {
        self.pulse = true;
    }

    /// Advance the surface by one step
    pub fn step<R: RandomSource>(&mut self, now_ms: u64, rng: &mut R) {
        self.propagate();
        self.move_source(now_ms, rng);
        self.rainfall(now_ms, rng);
        if self.pulse {
            self.splash(rng);
            self.pulse = false;
        }
        core::mem::swap(&mut self.newer, &mut self.older);
    }

    fn propagate(&mut self) {
        let w = self.settings.width;
        let shift = self.settings.damping_shift;
        for row in 1..self.settings.height - 1 {
            for col in 1..w - 1 {
                let i = row * w + col;
                let sum = self.newer[i - w] as u32
                    + self.newer[i + w] as u32
                    + self.newer[i - 1] as u32
                    + self.newer[i + 1] as u32;
                let smoothed = (sum >> 1) as u16;
                let mut next = smoothed.saturating_sub(self.older[i]);
                next -= next >> shift;
                self.older[i] = next;
            }
        }
    }

    fn move_source<R: RandomSource>(&mut self, now_ms: u64, rng: &mut R) {
        let (w, h) = (self.settings.width as i32, self.settings.height as i32);
        let Some(src) = self.source.as_mut() else {
            return;
        };

        if now_ms.saturating_sub(src.last_turn_ms) > src.turn_after_ms {
            let drift = (rng.random(-6, 4), rng.random(-6, 4));
            src.drift = if drift.0 < -3 || drift.1 < -3 { (0, 0) } else { drift };
            src.turn_after_ms = DRIFT_HOLD_MS;
            src.last_turn_ms = now_ms;
        }

        src.row += src.drift.0 + rng.random(-1, 2);
        src.col += src.drift.1 + rng.random(-1, 2);
        if src.row < 5 {
            src.row = 10;
            src.turn_after_ms = 0;
        } else if src.row > h - 6 {
            src.row = h - 10;
            src.turn_after_ms = 0;
        }
        if src.col < 5 {
            src.col = 10;
            src.turn_after_ms = 0;
        } else if src.col > w - 6 {
            src.col = w - 10;
            src.turn_after_ms = 0;
        }

        let (row, col) = (src.row, src.col);
        self.stamp(col, row);
    }

    fn rainfall<R: RandomSource>(&mut self, now_ms: u64, rng: &mut R) {
        let (w, h) = (self.settings.width as i32, self.settings.height as i32);
        let Some(rain) = self.rain.as_mut() else {
            return;
        };
        if now_ms.saturating_sub(rain.last_burst_ms) <= rain.next_after_ms {
            return;
        }

        let drops = rng.random(-3, 9).max(1);
        rain.next_after_ms = rng.random(500 * drops, 1500 * drops) as u64;
        rain.last_burst_ms = now_ms;

        for _ in 0..drops {
            let x = rng.random(10, w - 10);
            let y = rng.random(10, h - 10);
            let radius = match rng.random(-8, 4) {
                d if d < -6 => 0,
                d if d < 0 => 1,
                d => d,
            };
            for dx in -radius..=radius {
                for dy in -radius..=radius {
                    let (mut cx, mut cy) = (x + dx, y + dy);
                    if rng.random(-1, 3) < 0 {
                        cx += rng.random(-1, 2);
                        cy += rng.random(-1, 2);
                    }
                    self.stamp(cx, cy);
                }
            }
        }
    }

    fn splash<R: RandomSource>(&mut self, rng: &mut R) {
        let (w, h) = (self.settings.width as i32, self.settings.height as i32);
        let x = rng.random(20, w - 20);
        let y = rng.random(20, h - 20);
        let radius = rng.random(0, 3);
        for cx in x - radius..=x + radius {
            for cy in y - radius..=y + radius {
                self.stamp(cx, cy);
            }
        }
    }

    /// Raise one interior cell of the buffer being written to full height
    fn stamp(&mut self, col: i32, row: i32) {
        let w = self.settings.width as i32;
        let h = self.settings.height as i32;
        let col = col.clamp(1, w - 2);
        let row = row.clamp(1, h - 2);
        self.older[(row * w + col) as usize] = PEAK;
    }

    /// Kick mid-height cells up by a random amount and settle both buffers
    pub fn stir<R: RandomSource>(&mut self, rng: &mut R) {
        let w = self.settings.width;
        for row in 1..self.settings.height - 1 {
            for col in 1..w - 1 {
                let i = row * w + col;
                let v = self.newer[i];
                if v > 0x2000 && v < 0x5000 {
                    self.newer[i] = v.wrapping_add(rng.random(0, 0xa000) as u16);
                }
                self.older[i] = self.newer[i];
            }
        }
    }
}

/// Palette index for a height, `shades` entries from still to crest
pub fn shade_index(height: u16, shades: usize) -> usize {
    if shades == 0 {
        return 0;
    }
    let index = map_range(height as i32, 0, PEAK as i32, 0, shades as i32);
    (index.max(0) as usize).min(shades - 1)
}
