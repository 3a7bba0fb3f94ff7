//! LED brightness fade sequence

/// One tick of the fade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeStep {
    Duty(u32),
    /// Pause for one tick between cycles, duty unchanged
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Rising(u32),
    Falling(u32),
    Hold,
}

/// Endless triangle ramp `0..=max` then `max..=1`, then a hold
#[derive(Debug, Clone)]
pub struct Fader {
    max_duty: u32,
    phase: Phase,
}

impl Fader {
    pub const fn new(max_duty: u32) -> Self {
        Self {
            max_duty,
            phase: Phase::Rising(0),
        }
    }

    pub const fn max_duty(&self) -> u32 {
        self.max_duty
    }
}

impl Iterator for Fader {
    type Item = FadeStep;

    fn next(&mut self) -> Option<FadeStep> {
        let (step, next) = match self.phase {
            Phase::Rising(d) if d >= self.max_duty => (FadeStep::Duty(d), Phase::Falling(d)),
            Phase::Rising(d) => (FadeStep::Duty(d), Phase::Rising(d + 1)),
            Phase::Falling(d) if d == 0 => (FadeStep::Hold, Phase::Rising(0)),
            Phase::Falling(d) => (
                FadeStep::Duty(d),
                if d == 1 { Phase::Hold } else { Phase::Falling(d - 1) },
            ),
            Phase::Hold => (FadeStep::Hold, Phase::Rising(0)),
        };
        self.phase = next;
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_cycle() {
        let steps: Vec<FadeStep> = Fader::new(3).take(8).collect();
        assert_eq!(
            steps,
            vec![
                FadeStep::Duty(0),
                FadeStep::Duty(1),
                FadeStep::Duty(2),
                FadeStep::Duty(3),
                FadeStep::Duty(3),
                FadeStep::Duty(2),
                FadeStep::Duty(1),
                FadeStep::Hold,
            ]
        );
    }

    #[test]
    fn test_repeats() {
        let mut f = Fader::new(30);
        // 31 rising, 30 falling, 1 hold
        assert_eq!(f.by_ref().take(62).count(), 62);
        assert_eq!(f.next(), Some(FadeStep::Duty(0)));
    }

    #[test]
    fn test_zero_max_only_holds_between_zeroes() {
        let steps: Vec<FadeStep> = Fader::new(0).take(4).collect();
        assert_eq!(
            steps,
            vec![
                FadeStep::Duty(0),
                FadeStep::Hold,
                FadeStep::Duty(0),
                FadeStep::Hold
            ]
        );
    }
}
