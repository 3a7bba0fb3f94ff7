//! Pseudo-random numbers for the games and the ripple simulation

/// Source of uniformly distributed 32-bit values
pub trait RandomSource {
    /// Next raw value
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `lo..hi`
    ///
    /// Returns `lo` when the range is empty, so callers never have to guard
    /// degenerate bounds.
    fn random(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi as i64 - lo as i64) as u64;
        lo + (self.next_u32() as u64 % span) as i32
    }
}

/// Marsaglia xorshift generator
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct XorShift32(u32);

impl XorShift32 {
    /// Create a generator. A zero seed would lock the sequence at zero and is
    /// replaced with a fixed non-zero constant.
    pub const fn new(seed: u32) -> Self {
        if seed == 0 {
            Self(0x9E37_79B9)
        } else {
            Self(seed)
        }
    }
}

impl RandomSource for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_stays_in_half_open_range() {
        let mut rng = XorShift32::new(7);
        for _ in 0..1000 {
            let v = rng.random(-1, 2);
            assert!((-1..2).contains(&v));
        }
    }

    #[test]
    fn test_empty_range_returns_low_bound() {
        let mut rng = XorShift32::new(1);
        assert_eq!(rng.random(5, 5), 5);
        assert_eq!(rng.random(5, 2), 5);
    }

    #[test]
    fn test_zero_seed_is_replaced() {
        let mut rng = XorShift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_covers_every_value_of_small_range() {
        let mut rng = XorShift32::new(0xDEAD_BEEF);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.random(0, 4) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
