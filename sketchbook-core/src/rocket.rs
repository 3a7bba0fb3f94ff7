//! Vertical ascent game
//!
//! The rocket climbs a 170x320 portrait screen. Holding thrust burns fuel for
//! a steady climb, the impulse button spends a tenth of the tank at once.
//! Landing softly after a climb pays out and enlarges the tank, crashing
//! shrinks it. Reaching 1000 m/s wins, running the tank dry far below zero
//! loses.
//!
//! The game runs on three cadences driven by the caller: [`simulate`] every
//! [`SIMULATION_STEP_MS`], [`update_atmosphere`] every [`ATMOSPHERE_STEP_MS`]
//! and [`advance`] every [`MOTION_STEP_MS`].
//!
//! [`simulate`]: RocketGame::simulate
//! [`update_atmosphere`]: RocketGame::update_atmosphere
//! [`advance`]: RocketGame::advance

use libm::round;

pub const SIMULATION_STEP_MS: u64 = 120;
pub const ATMOSPHERE_STEP_MS: u64 = 10;
pub const MOTION_STEP_MS: u64 = 20;

/// Screen width in portrait orientation
pub const X_BOUND: i32 = 170;
/// Screen height in portrait orientation
pub const Y_BOUND: i32 = 320;
/// Height of the ground strip
pub const GROUND_HEIGHT: i32 = 30;
/// Rocket row when parked on the ground
pub const GROUND_Y: i32 = Y_BOUND - GROUND_HEIGHT - 8;
/// Rocket column
pub const ROCKET_X: i32 = X_BOUND / 2;
pub const START_FUEL: i32 = 100;

const WIN_SPEED: i32 = 999;
const GAME_OVER_TICKS: u32 = 50;
const SPEED_CAP: i32 = 200;

/// Button state for one simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Controls {
    pub thrust: bool,
    pub impulse: bool,
}

/// HUD colour band, from a full tank down to far past empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FuelTier {
    Full,
    High,
    Half,
    Low,
    Empty,
    /// HUD blends into the sky and the game-over count runs
    Exhausted,
}

/// Numbers shown after each simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hud {
    pub fuel_percent: f32,
    pub wallet: i32,
    pub altitude: i32,
    pub speed: i32,
}

/// Atmosphere band by altitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sky {
    /// 0 near the ground up to 3 in space
    pub level: u8,
    /// Repaint the whole screen in the new sky colour
    pub level_changed: bool,
    /// Erase the rocket's column down to this row
    pub clear_column_to: Option<i32>,
    /// The pad is in view and has to be repainted after a full repaint
    pub ground_visible: bool,
}

/// Result of touching down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Landing {
    /// Hard landing, `cost` is the (negative) change in fuel and wallet
    Crash { cost: i32 },
    /// Soft landing after a climb. `shown` is the announced payout, `paid`
    /// what was credited (double for a perfect landing).
    Payout { shown: i32, paid: i32, perfect: bool },
    /// Touchdown without a payout
    Settled,
}

/// Ground strip visibility change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GroundStrip {
    Unchanged,
    Hide,
    Show,
}

/// Result of one motion step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Motion {
    pub landing: Option<Landing>,
    pub tier: FuelTier,
    pub ground: GroundStrip,
    /// Row to draw the rocket at
    pub sprite_y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    Won,
    Lost,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct RocketGame {
    y: i32,
    speed: i32,
    gravity: f64,
    accel: f64,
    level: u8,
    prev_level: u8,
    prev_y: i32,
    fuel: i32,
    max_fuel: i32,
    height: i32,
    impulse_held: bool,
    above: bool,
    exhausted_ticks: u32,
    completed: bool,
}

impl Default for RocketGame {
    fn default() -> Self {
        Self::new()
    }
}

impl RocketGame {
    pub const fn new() -> Self {
        Self {
            y: GROUND_Y,
            speed: 0,
            gravity: 1.0,
            accel: 1.0,
            level: 0,
            prev_level: 0,
            prev_y: 0,
            fuel: START_FUEL,
            max_fuel: START_FUEL,
            height: 0,
            impulse_held: false,
            above: false,
            exhausted_ticks: 0,
            completed: false,
        }
    }

    /// Metres above the pad
    pub fn altitude(&self) -> i32 {
        GROUND_Y - self.y
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn fuel(&self) -> i32 {
        self.fuel
    }

    /// Tank size, which doubles as the score
    pub fn max_fuel(&self) -> i32 {
        self.max_fuel
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    fn on_ground(&self) -> bool {
        self.y >= GROUND_Y
    }

    /// Fuel, thrust and gravity for one simulation step
    pub fn simulate(&mut self, controls: Controls) -> Hud {
        if self.on_ground() && self.fuel <= self.max_fuel {
            self.fuel += 10_i32.min(self.max_fuel - self.fuel);
            self.accel = self.gravity;
        }

        if self.fuel > 0 && !self.impulse_held && controls.impulse {
            let tenth = 0.10 * self.max_fuel as f64;
            if (self.fuel as f64) < tenth {
                self.fuel = 0;
            } else {
                self.fuel = (self.fuel as f64 - tenth) as i32;
            }
            self.speed =
                (self.speed as f64 + self.accel.min(5.0) * self.max_fuel as f64 / 20.0) as i32;
            if self.accel > 1.0 {
                self.accel = (self.accel - 1.0).max(1.0);
            }
        }

        if self.fuel > 0 && controls.thrust {
            self.fuel -= 1;
            if self.speed < SPEED_CAP {
                self.speed += 1;
            }
            if self.accel > 1.0 {
                self.accel = (self.accel - 0.1).max(1.0);
            }
        }

        if self.y != GROUND_Y && !self.completed && (self.fuel <= 0 || !controls.thrust) {
            self.accel += 0.02;
            if self.accel < self.gravity {
                self.accel += 0.18;
            }
            self.speed = (self.speed as f64 - round(self.accel)) as i32;
        }

        if self.altitude() < 300 {
            self.accel = self.gravity;
            if self.speed < -16 {
                self.speed += 9;
            } else if self.speed < -7 {
                self.speed += 2;
            } else if self.speed == -7 {
                self.speed += 1;
            }
        }

        self.impulse_held = controls.impulse;

        Hud {
            fuel_percent: self.fuel as f32 * 100.0 / self.max_fuel.max(1) as f32,
            wallet: self.max_fuel,
            altitude: self.altitude(),
            speed: self.speed,
        }
    }

    /// Gravity and sky colour for the current altitude
    pub fn update_atmosphere(&mut self) -> Sky {
        let altitude = self.altitude();
        let (level, gravity) = if altitude < 300 {
            (0, 1.0)
        } else if altitude < 9900 {
            (1, 3.0)
        } else if altitude < 33300 {
            (2, 2.0)
        } else {
            (3, 1.0)
        };
        self.level = level;
        self.gravity = gravity;

        let moved = self.y != self.prev_y;
        let sky = Sky {
            level,
            level_changed: moved && level != self.prev_level,
            clear_column_to: moved.then_some(if self.above {
                Y_BOUND
            } else {
                Y_BOUND - GROUND_HEIGHT
            }),
            ground_visible: !self.above,
        };
        self.prev_y = self.y;
        self.prev_level = level;
        sky
    }

    /// Move the rocket by its speed and resolve touchdown
    pub fn advance(&mut self) -> Motion {
        if self.speed > 0 {
            self.height += self.speed;
        }
        self.y -= self.speed;

        let mut landing = None;
        if self.y > GROUND_Y {
            self.y = GROUND_Y;
            landing = Some(self.touch_down());
            self.height = 0;
            self.speed = 0;
        }

        let tier = self.tier();
        if tier == FuelTier::Exhausted {
            self.exhausted_ticks += 1;
        }

        let mut ground = GroundStrip::Unchanged;
        if !self.above && self.y < 0 {
            self.above = true;
            ground = GroundStrip::Hide;
        }
        if self.y > 0 && self.above {
            self.above = false;
            ground = GroundStrip::Show;
        }

        Motion {
            landing,
            tier,
            ground,
            sprite_y: sprite_row(self.y),
        }
    }

    fn touch_down(&mut self) -> Landing {
        if self.speed <= -7 {
            let cost = (6 + self.speed) * self.max_fuel / 40;
            self.fuel += cost;
            self.max_fuel += cost;
            Landing::Crash { cost }
        } else if self.speed < 0 && self.height > 100 {
            let shown = self.height / 100;
            let perfect = self.speed > -3;
            if perfect {
                self.height *= 2;
            }
            let paid = self.height / 100;
            self.max_fuel += paid;
            self.fuel = self.max_fuel;
            Landing::Payout {
                shown,
                paid,
                perfect,
            }
        } else {
            Landing::Settled
        }
    }

    /// HUD colour band for the current fuel level
    pub fn tier(&self) -> FuelTier {
        let fuel = self.fuel as f64;
        let max = self.max_fuel as f64;
        if fuel > 0.75 * max {
            FuelTier::Full
        } else if fuel > 0.5 * max {
            FuelTier::High
        } else if fuel > 0.25 * max {
            FuelTier::Half
        } else if self.fuel > 0 {
            FuelTier::Low
        } else if self.fuel > -self.max_fuel {
            FuelTier::Empty
        } else {
            FuelTier::Exhausted
        }
    }

    /// Reports the end of the game once
    pub fn check_outcome(&mut self) -> Option<Outcome> {
        if self.speed > WIN_SPEED && !self.completed {
            self.completed = true;
            return Some(Outcome::Won);
        }
        (self.exhausted_ticks > GAME_OVER_TICKS).then_some(Outcome::Lost)
    }
}

/// Screen row for rocket position `y`, wrapping as the rocket leaves the top
pub fn sprite_row(y: i32) -> i32 {
    Y_BOUND - (Y_BOUND - y).abs() % Y_BOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRUST: Controls = Controls {
        thrust: true,
        impulse: false,
    };
    const IMPULSE: Controls = Controls {
        thrust: false,
        impulse: true,
    };
    const IDLE: Controls = Controls {
        thrust: false,
        impulse: false,
    };

    #[test]
    fn test_starts_parked_and_full() {
        let mut game = RocketGame::new();
        assert_eq!(game.altitude(), 0);
        let hud = game.simulate(IDLE);
        assert_eq!(hud.fuel_percent, 100.0);
        assert_eq!(hud.speed, 0);
        assert_eq!(game.tier(), FuelTier::Full);
    }

    #[test]
    fn test_impulse_fires_on_press_edge_only() {
        let mut game = RocketGame::new();
        game.simulate(IMPULSE);
        // 1.0 * 100 / 20
        assert_eq!(game.speed(), 5);
        // a tenth of the tank
        assert_eq!(game.fuel(), 90);
        game.simulate(IMPULSE);
        assert_eq!(game.speed(), 5);
    }

    #[test]
    fn test_thrust_burns_fuel() {
        let mut game = RocketGame::new();
        game.simulate(THRUST);
        assert_eq!(game.fuel(), 99);
        assert_eq!(game.speed(), 1);
    }

    #[test]
    fn test_climb_and_coast() {
        let mut game = RocketGame::new();
        game.simulate(THRUST);
        let motion = game.advance();
        assert_eq!(game.altitude(), 1);
        assert_eq!(motion.landing, None);
        // airborne without thrust: gravity pulls speed down
        game.simulate(IDLE);
        assert_eq!(game.speed(), 0);
    }

    #[test]
    fn test_crash_costs_fuel_and_wallet() {
        let mut game = RocketGame::new();
        game.y = GROUND_Y - 5;
        game.speed = -10;
        let motion = game.advance();
        // (6 - 10) * 100 / 40
        assert_eq!(motion.landing, Some(Landing::Crash { cost: -10 }));
        assert_eq!(game.max_fuel(), 90);
        assert_eq!(game.fuel(), 90);
        assert_eq!(game.speed(), 0);
    }

    #[test]
    fn test_perfect_landing_pays_double() {
        let mut game = RocketGame::new();
        game.y = GROUND_Y - 1;
        game.speed = -2;
        game.height = 450;
        let motion = game.advance();
        assert_eq!(
            motion.landing,
            Some(Landing::Payout {
                shown: 4,
                paid: 9,
                perfect: true
            })
        );
        assert_eq!(game.max_fuel(), 109);
        assert_eq!(game.fuel(), 109);
    }

    #[test]
    fn test_rough_landing_pays_single() {
        let mut game = RocketGame::new();
        game.y = GROUND_Y - 1;
        game.speed = -5;
        game.height = 450;
        let motion = game.advance();
        assert_eq!(
            motion.landing,
            Some(Landing::Payout {
                shown: 4,
                paid: 4,
                perfect: false
            })
        );
    }

    #[test]
    fn test_atmosphere_bands() {
        let mut game = RocketGame::new();
        game.y = GROUND_Y - 9900;
        let sky = game.update_atmosphere();
        assert_eq!(sky.level, 2);
        assert!(sky.level_changed);
        assert_eq!(game.update_atmosphere().clear_column_to, None);
        game.y = GROUND_Y - 40_000;
        assert_eq!(game.update_atmosphere().level, 3);
    }

    #[test]
    fn test_level_change_below_screen_top_keeps_ground() {
        let mut game = RocketGame::new();
        game.y = -28;
        game.above = true;
        game.update_atmosphere();
        game.speed = -30;
        game.fuel = 0;
        // drops from above the screen straight into the lowest band
        assert_eq!(game.advance().ground, GroundStrip::Show);
        let sky = game.update_atmosphere();
        assert!(sky.level_changed);
        assert!(sky.ground_visible);
    }

    #[test]
    fn test_ground_hides_above_screen() {
        let mut game = RocketGame::new();
        game.y = 10;
        game.speed = 20;
        assert_eq!(game.advance().ground, GroundStrip::Hide);
        game.speed = -30;
        game.fuel = 0;
        assert_eq!(game.advance().ground, GroundStrip::Show);
    }

    #[test]
    fn test_tiers() {
        let mut game = RocketGame::new();
        game.fuel = 60;
        assert_eq!(game.tier(), FuelTier::High);
        game.fuel = 30;
        assert_eq!(game.tier(), FuelTier::Half);
        game.fuel = 1;
        assert_eq!(game.tier(), FuelTier::Low);
        game.fuel = -50;
        assert_eq!(game.tier(), FuelTier::Empty);
        game.fuel = -100;
        assert_eq!(game.tier(), FuelTier::Exhausted);
    }

    #[test]
    fn test_outcomes() {
        let mut game = RocketGame::new();
        game.speed = 1000;
        assert_eq!(game.check_outcome(), Some(Outcome::Won));
        assert_eq!(game.check_outcome(), None);

        let mut game = RocketGame::new();
        game.fuel = -100;
        game.y = GROUND_Y - 1000;
        for _ in 0..=GAME_OVER_TICKS {
            game.advance();
        }
        assert_eq!(game.check_outcome(), Some(Outcome::Lost));
    }

    #[test]
    fn test_sprite_row_wraps() {
        assert_eq!(sprite_row(GROUND_Y), GROUND_Y);
        assert_eq!(sprite_row(0), 320);
        assert_eq!(sprite_row(-10), 310);
        assert_eq!(sprite_row(-330), 310);
    }
}
