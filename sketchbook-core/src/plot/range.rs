//! Vertical axis ranging

/// Peak and sum of the samples seen since the last wrap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunningStats {
    pub peak: i32,
    pub sum: i64,
}

impl RunningStats {
    pub fn record(&mut self, sample: i32) {
        self.peak = self.peak.max(sample);
        self.sum += sample as i64;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Integer mean over `len` samples
    pub fn mean(&self, len: usize) -> i32 {
        if len == 0 {
            return 0;
        }
        (self.sum / len as i64) as i32
    }
}

/// How the top of the vertical axis is picked at each wrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangePolicy {
    /// Axis never moves
    Fixed,
    /// Larger of 1.5x the peak and twice the mean, in whole steps
    PeakOrMean { step: i32, min: i32, max: i32 },
    /// Peak plus mean, in whole steps
    PeakPlusMean { step: i32, ceiling: i32 },
}

impl RangePolicy {
    /// Ranging used by the time plotter for measured sources
    pub const TIME_PLOT: Self = Self::time_plot(40);

    /// Ranging used by the scatter plotter for measured sources
    pub const SCATTER: Self = Self::PeakPlusMean {
        step: 10,
        ceiling: super::ADC_CEILING,
    };

    /// Time plotter ranging that never shrinks the axis below `min`
    pub const fn time_plot(min: i32) -> Self {
        Self::PeakOrMean {
            step: 20,
            min,
            max: 4100,
        }
    }

    /// Rounding step, if the policy has one
    pub const fn step(&self) -> Option<i32> {
        match *self {
            Self::Fixed => None,
            Self::PeakOrMean { step, .. } | Self::PeakPlusMean { step, .. } => Some(step),
        }
    }

    pub const fn is_auto(&self) -> bool {
        !matches!(self, Self::Fixed)
    }

    /// New axis top after a full pass over `len` samples
    pub fn rerange(&self, current: i32, stats: &RunningStats, len: usize) -> i32 {
        match *self {
            Self::Fixed => current,
            Self::PeakOrMean { step, min, max } => {
                let step = step.max(1);
                let double_avg = (2 * stats.mean(len) / step + 1) * step;
                let peak = (3 * stats.peak / 2) / step * step;
                peak.max(double_avg).clamp(min, max)
            }
            Self::PeakPlusMean { step, ceiling } => {
                let step = step.max(1);
                let raw = (stats.peak + stats.mean(len)).clamp(0, ceiling);
                raw / step * step
            }
        }
    }

    /// Axis top needed to fit `sample` right away, if it overflows `current`
    pub fn grow(&self, current: i32, sample: i32) -> Option<i32> {
        let step = self.step()?.max(1);
        (sample > current).then(|| (sample / step + 1) * step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stats(samples: &[i32]) -> RunningStats {
        let mut s = RunningStats::default();
        for &v in samples {
            s.record(v);
        }
        s
    }

    #[test]
    fn test_fixed_never_moves() {
        let s = stats(&[4000, 4000]);
        assert_eq!(RangePolicy::Fixed.rerange(40, &s, 2), 40);
        assert_eq!(RangePolicy::Fixed.grow(40, 4000), None);
    }

    #[test]
    fn test_peak_or_mean_uses_peak() {
        // peak 1000 -> 1500, mean 100 -> (200/20+1)*20 = 220
        let s = stats(&[1000, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(RangePolicy::TIME_PLOT.rerange(40, &s, 10), 1500);
    }

    #[test]
    fn test_peak_or_mean_uses_mean() {
        // flat 500: peak 750, mean rounds up to 1020
        let s = stats(&[500; 10]);
        assert_eq!(RangePolicy::TIME_PLOT.rerange(40, &s, 10), 1020);
    }

    #[test]
    fn test_peak_or_mean_clamps() {
        assert_eq!(RangePolicy::TIME_PLOT.rerange(400, &stats(&[0; 4]), 4), 40);
        assert_eq!(
            RangePolicy::TIME_PLOT.rerange(40, &stats(&[4095; 4]), 4),
            4100
        );
    }

    #[test]
    fn test_peak_plus_mean() {
        let s = stats(&[100, 300]);
        // 300 + 200 = 500
        assert_eq!(RangePolicy::SCATTER.rerange(200, &s, 2), 500);
        let s = stats(&[4000, 4000]);
        assert_eq!(RangePolicy::SCATTER.rerange(200, &s, 2), 4090);
    }

    #[test]
    fn test_grow() {
        assert_eq!(RangePolicy::TIME_PLOT.grow(40, 41), Some(60));
        assert_eq!(RangePolicy::TIME_PLOT.grow(40, 40), None);
        assert_eq!(RangePolicy::TIME_PLOT.grow(40, 100), Some(120));
    }

    #[test]
    fn test_stats_reset() {
        let mut s = stats(&[5, 9]);
        assert_eq!(s.mean(2), 7);
        s.reset();
        assert_eq!(s, RunningStats::default());
    }

    proptest! {
        #[test]
        fn prop_peak_or_mean_within_bounds(samples in prop::collection::vec(0i32..4096, 1..80)) {
            let s = stats(&samples);
            let y = RangePolicy::TIME_PLOT.rerange(40, &s, samples.len());
            prop_assert!((40..=4100).contains(&y));
            prop_assert_eq!(y % 20, 0);
        }

        #[test]
        fn prop_grow_always_fits(current in 0i32..4000, sample in 0i32..4096) {
            if let Some(next) = RangePolicy::TIME_PLOT.grow(current, sample) {
                prop_assert!(next > sample);
                prop_assert_eq!(next % 20, 0);
            }
        }
    }
}
