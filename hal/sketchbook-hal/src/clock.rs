//! Time sources

/// Free-running microsecond counter
///
/// Used for pulse-width measurement where a millisecond tick is too coarse.
pub trait MicrosClock {
    /// Microseconds since an arbitrary epoch. Must be monotonic.
    fn now_us(&self) -> u64;

    /// Busy-wait for `us` microseconds
    fn delay_us(&self, us: u32) {
        let start = self.now_us();
        while self.now_us().wrapping_sub(start) < us as u64 {}
    }
}
