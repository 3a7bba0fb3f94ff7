//! Synthetic and measured plot sources

use core::fmt::Write;

use libm::{cosf, expf, sinf};

use crate::plot::RangePolicy;

/// Plot title text
pub type Label = heapless::String<48>;

/// Angular rates of the synthetic waveforms, per sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SignalParams {
    /// Slow rate (decay, envelopes)
    pub alpha: f32,
    /// Carrier rate
    pub omega: f32,
    /// Time between samples
    pub sample_period_ms: u32,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            alpha: 0.042_148_9,
            omega: 0.157_079_6,
            sample_period_ms: 100,
        }
    }
}

impl SignalParams {
    /// Rate in radians per second
    fn per_second(&self, rate: f32) -> f32 {
        1000.0 * rate / self.sample_period_ms.max(1) as f32
    }
}

/// A source the plotters can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Waveform {
    AnalogRead,
    Sine,
    CosineSineSum,
    FrequencyModulated,
    AmplitudeModulated,
    DecayingSine,
    Distance,
}

impl Waveform {
    /// Menu order
    pub const ALL: [Waveform; 7] = [
        Waveform::AnalogRead,
        Waveform::Sine,
        Waveform::CosineSineSum,
        Waveform::FrequencyModulated,
        Waveform::AmplitudeModulated,
        Waveform::DecayingSine,
        Waveform::Distance,
    ];

    pub const fn menu_name(&self) -> &'static str {
        match self {
            Waveform::AnalogRead => "0. ANALOG READ",
            Waveform::Sine => "1. SINE FUNCTION",
            Waveform::CosineSineSum => "2. SUM OF SINUSOIDS",
            Waveform::FrequencyModulated => "3. FREQUENCY MODULATED WAVE",
            Waveform::AmplitudeModulated => "4. AMPLITUDE MODULATED WAVE",
            Waveform::DecayingSine => "5. DECAYING SINE WAVE",
            Waveform::Distance => "6. ULTRASONIC DISTANCE",
        }
    }

    /// Values come from hardware rather than a formula
    pub const fn is_measured(&self) -> bool {
        matches!(self, Waveform::AnalogRead | Waveform::Distance)
    }

    /// Label for the symmetric axis of synthetic sources
    pub const fn amplitude(&self) -> i32 {
        match self {
            Waveform::CosineSineSum => 2,
            _ => 1,
        }
    }

    /// Axis ranging suited to this source on the time plotter
    pub const fn time_policy(&self) -> RangePolicy {
        if self.is_measured() {
            RangePolicy::TIME_PLOT
        } else {
            RangePolicy::Fixed
        }
    }

    /// Axis ranging suited to this source on the scatter plotter
    pub const fn scatter_policy(&self) -> RangePolicy {
        if self.is_measured() {
            RangePolicy::SCATTER
        } else {
            RangePolicy::Fixed
        }
    }

    /// Value of sample `n` scaled to fill `0..=max_y`
    ///
    /// Returns `None` for measured sources.
    pub fn synthesize(&self, n: u32, max_y: i32, params: &SignalParams) -> Option<i32> {
        let t = n as f32;
        let (a, w) = (params.alpha, params.omega);
        let half = (max_y / 2) as f32;
        let value = match self {
            Waveform::AnalogRead | Waveform::Distance => return None,
            Waveform::Sine => half * (1.0 + sinf(t * w)),
            Waveform::DecayingSine => half * (1.0 + expf(-t * a) * sinf(t * w)),
            Waveform::CosineSineSum => {
                (max_y / 4) as f32 * (2.0 + cosf(t * a) + sinf(t * 2.0 * w))
            }
            Waveform::FrequencyModulated => {
                half * (1.0 + cosf(t * w + 10.0 * w * sinf(t * 10.0 * a)))
            }
            Waveform::AmplitudeModulated => {
                half * (1.0 + cosf(t * 1.5 * a) * sinf(t * 5.0 * w))
            }
        };
        Some(value as i32)
    }

    /// Plot title. `analog_pin` names the pin sampled by [`Waveform::AnalogRead`].
    pub fn label(&self, params: &SignalParams, analog_pin: u8) -> Label {
        let w = params.per_second(params.omega);
        let a = params.per_second(params.alpha);
        let mut label = Label::new();
        // Every title fits the buffer, so the write cannot fail
        let _ = match self {
            Waveform::AnalogRead => write!(label, "Reading Analog Pin {}", analog_pin),
            Waveform::Sine => write!(label, "sin({:.4}t)", w),
            Waveform::CosineSineSum => write!(label, "cos({:.2}t)+sin({:.2}t)", a, 2.0 * w),
            Waveform::FrequencyModulated => write!(
                label,
                "cos({:.2}t+{:.1}sin({:.2}t))",
                w,
                10.0 * w,
                10.0 * a
            ),
            Waveform::AmplitudeModulated => {
                write!(label, "cos({:.2}t)sin({:.2}t)", 1.5 * a, 5.0 * w)
            }
            Waveform::DecayingSine => write!(label, "exp(-{:.3}t)sin({:.3}t)", a, w),
            Waveform::Distance => write!(label, "Distance to object (cm)"),
        };
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_sources_have_no_formula() {
        let p = SignalParams::default();
        assert_eq!(Waveform::AnalogRead.synthesize(3, 40, &p), None);
        assert_eq!(Waveform::Distance.synthesize(3, 40, &p), None);
        assert!(Waveform::AnalogRead.time_policy().is_auto());
        assert!(!Waveform::Sine.time_policy().is_auto());
    }

    #[test]
    fn test_sine_starts_mid_axis() {
        let p = SignalParams::default();
        assert_eq!(Waveform::Sine.synthesize(0, 40, &p), Some(20));
        assert_eq!(Waveform::DecayingSine.synthesize(0, 40, &p), Some(20));
        assert_eq!(Waveform::FrequencyModulated.synthesize(0, 40, &p), Some(40));
        assert_eq!(Waveform::CosineSineSum.synthesize(0, 40, &p), Some(30));
    }

    #[test]
    fn test_synthetic_values_stay_on_axis() {
        let p = SignalParams::default();
        for w in Waveform::ALL.iter().filter(|w| !w.is_measured()) {
            for n in 0..500 {
                let v = w.synthesize(n, 40, &p).unwrap();
                assert!((0..=40).contains(&v), "{:?} sample {} = {}", w, n, v);
            }
        }
    }

    #[test]
    fn test_labels() {
        let p = SignalParams::default();
        assert_eq!(Waveform::Sine.label(&p, 10).as_str(), "sin(1.5708t)");
        assert_eq!(
            Waveform::AnalogRead.label(&p, 10).as_str(),
            "Reading Analog Pin 10"
        );
        assert_eq!(
            Waveform::Distance.label(&p, 10).as_str(),
            "Distance to object (cm)"
        );
        assert_eq!(
            Waveform::CosineSineSum.label(&p, 10).as_str(),
            "cos(0.42t)+sin(3.14t)"
        );
    }

    #[test]
    fn test_amplitude() {
        assert_eq!(Waveform::CosineSineSum.amplitude(), 2);
        assert_eq!(Waveform::Sine.amplitude(), 1);
    }
}
