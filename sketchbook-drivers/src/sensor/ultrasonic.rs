//! HC-SR04 style ultrasonic ranger
//!
//! A 10 µs pulse on the trigger pin starts a measurement; the sensor then
//! holds the echo pin high for as long as the sound took to come back.
//! Sound covers 0.0343 cm/µs and makes the trip twice.
//!
//! Timing is a busy-wait on a microsecond clock. Call from a context that
//! can afford to block for up to the timeout.

use libm::round;
use sketchbook_core::traits::{DistanceSensor, SensorError};
use sketchbook_hal::{InputPin, MicrosClock, OutputPin};

/// Speed of sound in cm/µs
const SOUND_CM_PER_US: f64 = 0.0343;

/// Ranger configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UltrasonicConfig {
    /// Trigger pulse width
    pub trigger_us: u32,
    /// Longest wait for the echo to start and to end
    pub timeout_us: u32,
}

impl Default for UltrasonicConfig {
    fn default() -> Self {
        Self {
            trigger_us: 10,
            timeout_us: 11_500,
        }
    }
}

/// Ultrasonic ranger on a trigger output and an echo input
pub struct UltrasonicRanger<T, E, C> {
    trigger: T,
    echo: E,
    clock: C,
    config: UltrasonicConfig,
}

impl<T: OutputPin, E: InputPin, C: MicrosClock> UltrasonicRanger<T, E, C> {
    pub fn new(mut trigger: T, echo: E, clock: C, config: UltrasonicConfig) -> Self {
        trigger.set_low();
        Self {
            trigger,
            echo,
            clock,
            config,
        }
    }

    /// Fire one ping and time the echo
    pub fn measure_echo_us(&mut self) -> Result<u32, SensorError> {
        self.trigger.set_low();
        self.clock.delay_us(2);
        self.trigger.set_high();
        self.clock.delay_us(self.config.trigger_us);
        self.trigger.set_low();

        let timeout = self.config.timeout_us as u64;
        let start = self.clock.now_us();
        while self.echo.is_low() {
            if self.clock.now_us().wrapping_sub(start) > timeout {
                return Err(SensorError::OutOfRange);
            }
        }

        let rise = self.clock.now_us();
        while self.echo.is_high() {
            if self.clock.now_us().wrapping_sub(start) > timeout {
                return Err(SensorError::Stuck);
            }
        }
        Ok(self.clock.now_us().wrapping_sub(rise) as u32)
    }

    /// Distance in centimetres with fractional part
    pub fn distance(&mut self) -> Result<f64, SensorError> {
        let pulse = self.measure_echo_us()?;
        Ok(pulse as f64 * SOUND_CM_PER_US / 2.0)
    }
}

impl<T: OutputPin, E: InputPin, C: MicrosClock> DistanceSensor for UltrasonicRanger<T, E, C> {
    fn distance_cm(&mut self) -> Result<u16, SensorError> {
        let cm = self.distance()?;
        Ok(round(cm) as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Clock that moves one microsecond every time it is read
    #[derive(Clone)]
    struct TickClock(Rc<Cell<u64>>);

    impl MicrosClock for TickClock {
        fn now_us(&self) -> u64 {
            let t = self.0.get() + 1;
            self.0.set(t);
            t
        }
    }

    /// Echo high from `rise` until `fall` on the shared clock
    struct Echo {
        now: Rc<Cell<u64>>,
        rise: u64,
        fall: u64,
    }

    impl InputPin for Echo {
        fn is_high(&self) -> bool {
            let t = self.now.get();
            t >= self.rise && t < self.fall
        }
    }

    /// Counts rising edges into a shared cell
    #[derive(Default)]
    struct Trigger {
        high: bool,
        pulses: Rc<Cell<u32>>,
    }

    impl OutputPin for Trigger {
        fn set_high(&mut self) {
            if !self.high {
                self.pulses.set(self.pulses.get() + 1);
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn ranger(rise: u64, fall: u64) -> UltrasonicRanger<Trigger, Echo, TickClock> {
        ranger_with_trigger(Trigger::default(), rise, fall)
    }

    fn ranger_with_trigger(trigger: Trigger, rise: u64, fall: u64) -> UltrasonicRanger<Trigger, Echo, TickClock> {
        let now = Rc::new(Cell::new(0));
        UltrasonicRanger::new(
            trigger,
            Echo {
                now: now.clone(),
                rise,
                fall,
            },
            TickClock(now),
            UltrasonicConfig::default(),
        )
    }

    #[test]
    fn test_distance_from_pulse_width() {
        // 583 µs of echo is 10.0 cm
        let trigger = Trigger::default();
        let pulses = trigger.pulses.clone();
        let mut r = ranger_with_trigger(trigger, 100, 683);
        let pulse = r.measure_echo_us().unwrap();
        assert!((582..=584).contains(&pulse), "pulse {}", pulse);
        assert_eq!(pulses.get(), 1);
    }

    #[test]
    fn test_rounds_to_nearest_cm() {
        let mut r = ranger(100, 683);
        assert_eq!(r.distance_cm(), Ok(10));
    }

    #[test]
    fn test_no_echo_is_out_of_range() {
        let mut r = ranger(u64::MAX, u64::MAX);
        assert_eq!(r.distance_cm(), Err(SensorError::OutOfRange));
        assert_eq!(r.sample(), -1);
    }

    #[test]
    fn test_endless_echo_is_stuck() {
        let mut r = ranger(50, u64::MAX);
        assert_eq!(r.measure_echo_us(), Err(SensorError::Stuck));
    }
}
