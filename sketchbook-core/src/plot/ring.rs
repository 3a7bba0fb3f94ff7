//! Fixed-capacity sample ring

use super::PlotError;

/// Where a pushed sample landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slot {
    /// Total samples pushed before this one
    pub sample_index: u32,
    /// Slot the sample was written to
    pub write_index: usize,
    /// Slot holding the oldest retained sample once the ring is full
    pub start_index: usize,
    /// The write position just returned to slot zero
    pub wrapped: bool,
    /// Every slot held a sample before this push
    pub full: bool,
}

/// Ring of `len` samples backed by `N` slots of storage
///
/// `len` is picked at runtime from the plot layout so one capacity serves
/// every layout.
#[derive(Debug, Clone)]
pub struct SampleRing<const N: usize> {
    buf: [i32; N],
    len: usize,
    sample_index: u32,
}

impl<const N: usize> SampleRing<N> {
    /// Create an empty ring holding `len` samples
    pub fn new(len: usize) -> Result<Self, PlotError> {
        if len == 0 {
            return Err(PlotError::EmptyLayout);
        }
        if len > N {
            return Err(PlotError::CapacityExceeded);
        }
        Ok(Self {
            buf: [0; N],
            len,
            sample_index: 0,
        })
    }

    /// Logical capacity
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Nothing pushed yet
    pub const fn is_empty(&self) -> bool {
        self.sample_index == 0
    }

    /// Samples pushed since creation
    pub const fn sample_index(&self) -> u32 {
        self.sample_index
    }

    /// Write `value` over the oldest slot
    pub fn push(&mut self, value: i32) -> Slot {
        let sample_index = self.sample_index;
        let write_index = sample_index as usize % self.len;
        let start_index = (write_index + 1) % self.len;
        self.buf[write_index] = value;
        self.sample_index = sample_index.wrapping_add(1);
        Slot {
            sample_index,
            write_index,
            start_index,
            wrapped: sample_index > 0 && write_index == 0,
            full: sample_index as usize >= self.len,
        }
    }

    /// Iterate slots from `start` to `end` inclusive, wrapping past the end
    pub fn window(&self, start: usize, end: usize) -> Window<'_> {
        let start = start % self.len;
        let end = end % self.len;
        let count = (end + self.len - start) % self.len + 1;
        Window {
            buf: &self.buf[..self.len],
            next: start,
            remaining: count,
        }
    }
}

/// Ordered walk over part of a [`SampleRing`]
#[derive(Debug, Clone)]
pub struct Window<'a> {
    buf: &'a [i32],
    next: usize,
    remaining: usize,
}

impl Iterator for Window<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.buf[self.next];
        self.next = (self.next + 1) % self.buf.len();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Window<'_> {}
