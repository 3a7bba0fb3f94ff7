//! Snake game against a wandering rival
//!
//! The board is a 17x32 torus. Both snakes leave a trail whose cells count
//! down once per step; a cell is deadly while its count is above zero. The
//! player steers with the two buttons, the rival drifts one direction left
//! or right at random each step.

use crate::rng::RandomSource;

/// Board width in cells
pub const COLS: usize = 17;
/// Board height in cells
pub const ROWS: usize = 32;
/// Cell side in pixels
pub const CELL: i32 = 10;

/// Length of one round of the speed-up timer
pub const ROUND_MS: u64 = 100;
const DEFAULT_PERIOD: u32 = 100;
const DEFAULT_TIMER: i32 = 12;
const MAX_PERIOD: u32 = 500;
const MIN_PERIOD: u32 = 20;
const INVINCIBILITY: u32 = 50;
const SHADE_COUNT: u16 = 32;

const X_DIR: [i32; 4] = [0, 1, 0, -1];
const Y_DIR: [i32; 4] = [1, 0, -1, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fruit {
    /// Plain growth
    Red,
    /// Slows the game down for a while
    GreenYellow,
    /// Temporary invincibility
    Cyan,
    /// Large growth
    Gold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cell {
    #[default]
    Empty,
    Fruit(Fruit),
    /// Trail with steps left; zero is erased on the next paint and then freed
    Trail(u16),
}

/// Button combination mapped to a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Steering {
    /// No button: down the screen
    Down,
    /// Right button
    Right,
    /// Both buttons
    Up,
    /// Left button
    Left,
}

impl Steering {
    pub fn from_buttons(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, true) => Steering::Up,
            (true, false) => Steering::Left,
            (false, true) => Steering::Right,
            (false, false) => Steering::Down,
        }
    }

    const fn index(self) -> usize {
        match self {
            Steering::Down => 0,
            Steering::Right => 1,
            Steering::Up => 2,
            Steering::Left => 3,
        }
    }
}

/// How a trail cell should be painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrailPaint {
    /// Fresh trail
    White,
    /// Index into the 32-step trail ramp, 0 is black
    Shade(u16),
}

/// Invincibility indicator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shield {
    Off,
    On,
    /// Last fifth of the effect
    Fading,
}

/// Status line values, taken at the start of a step
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SnakeHud {
    pub size: u32,
    /// Steps per second
    pub speed: f32,
    /// A slow-down fruit is in effect
    pub slowed: bool,
    pub shield: Shield,
}

/// Outcome of one movement step
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    pub hud: SnakeHud,
    /// Final score if the player crashed
    pub game_over: Option<u32>,
}

/// Fruit placed on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Spawn {
    pub x: usize,
    pub y: usize,
    pub fruit: Fruit,
}

/// Everything that changed during one [`SnakeGame::update`]
#[derive(Debug, Clone, Default)]
pub struct Update {
    pub spawned: heapless::Vec<Spawn, 4>,
    pub step: Option<StepReport>,
}

#[derive(Debug, Clone)]
pub struct SnakeGame {
    board: [[Cell; ROWS]; COLS],
    player: (i32, i32),
    rival: (i32, i32),
    size: u32,
    rival_size: u32,
    rival_heading: i32,
    last_step: u64,
    clock: u64,
    round: i32,
    pending_fruits: u32,
    slowdown: u32,
    speedup: u32,
    invincible: u32,
    treasure: i32,
    period: u32,
    timer: i32,
    finished: bool,
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeGame {
    pub const fn new() -> Self {
        Self {
            board: [[Cell::Empty; ROWS]; COLS],
            player: (9, 0),
            rival: (2, 17),
            size: 8,
            rival_size: 12,
            rival_heading: 0,
            last_step: 0,
            clock: 0,
            round: 0,
            pending_fruits: 1,
            slowdown: 0,
            speedup: 0,
            invincible: 0,
            treasure: 75,
            period: DEFAULT_PERIOD,
            timer: DEFAULT_TIMER,
            finished: false,
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.board
            .get(x)
            .and_then(|col| col.get(y))
            .copied()
            .unwrap_or_default()
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn rival_size(&self) -> u32 {
        self.rival_size
    }

    pub fn period_ms(&self) -> u32 {
        self.period
    }

    pub fn player(&self) -> (usize, usize) {
        (self.player.0 as usize, self.player.1 as usize)
    }

    pub fn is_over(&self) -> bool {
        self.finished
    }

    /// Advance the game clock to `now_ms`
    pub fn update<R: RandomSource>(
        &mut self,
        now_ms: u64,
        steering: Steering,
        rng: &mut R,
    ) -> Update {
        let mut update = Update::default();
        if self.finished {
            return update;
        }

        while self.pending_fruits > 0 && !update.spawned.is_full() {
            let spawn = self.spawn_fruit(rng);
            // capacity checked by the loop condition
            let _ = update.spawned.push(spawn);
        }

        if self.round >= self.timer {
            self.timer = DEFAULT_TIMER * (100 / self.period) as i32 + (self.size / 8) as i32;
            self.period = self.period.saturating_sub(1).max(MIN_PERIOD);
            self.round = 0;
        }

        if now_ms.saturating_sub(self.clock) > ROUND_MS {
            self.round += 1;
            self.clock += ROUND_MS;
        }

        if now_ms.saturating_sub(self.last_step) > self.period as u64 {
            update.step = Some(self.step(steering, rng));
            self.last_step += self.period as u64;
        }
        update
    }

    fn spawn_fruit<R: RandomSource>(&mut self, rng: &mut R) -> Spawn {
        let x = rng.random(0, COLS as i32) as usize;
        let y = rng.random(0, ROWS as i32) as usize;
        let kind = rng.random(0, 100);
        self.pending_fruits -= 1;

        let fruit = if kind > 25 && kind <= 89 {
            Fruit::Red
        } else if kind > 90 && self.invincible == 0 {
            Fruit::Cyan
        } else if kind > self.treasure {
            if self.treasure < 94 {
                self.treasure += 5;
            }
            Fruit::Gold
        } else {
            Fruit::GreenYellow
        };
        self.board[x][y] = Cell::Fruit(fruit);

        if self.slowdown > 0 {
            self.round = -((self.slowdown as i32) * self.timer);
            self.period = (self.period + self.slowdown).min(MAX_PERIOD);
            self.slowdown = 0;
        } else if self.speedup > 0 {
            self.period = (self.period + self.speedup).min(MAX_PERIOD);
            self.speedup = 0;
        } else {
            self.period = (self.period + 1).min(MAX_PERIOD);
        }

        Spawn { x, y, fruit }
    }

    fn step<R: RandomSource>(&mut self, steering: Steering, rng: &mut R) -> StepReport {
        let shield = if self.invincible > 0 {
            // full strength holds until the first hit
            if self.invincible != INVINCIBILITY {
                self.invincible -= 1;
            }
            if self.invincible * 5 >= INVINCIBILITY {
                Shield::On
            } else {
                Shield::Fading
            }
        } else {
            Shield::Off
        };
        let hud = SnakeHud {
            size: self.size,
            speed: 1000.0 / self.period as f32,
            slowed: self.round < 0,
            shield,
        };

        let (px, py) = (self.player.0 as usize, self.player.1 as usize);
        let (rx, ry) = (self.rival.0 as usize, self.rival.1 as usize);

        if let Cell::Fruit(_) = self.board[rx][ry] {
            self.rival_size += 1;
            self.pending_fruits += 1;
        }

        let mut game_over = None;
        match self.board[px][py] {
            Cell::Fruit(fruit) => {
                self.size += 1;
                match fruit {
                    Fruit::GreenYellow => self.slowdown = 10,
                    Fruit::Cyan => {
                        self.invincible = INVINCIBILITY;
                        self.speedup = 5;
                    }
                    Fruit::Gold => {
                        if self.period <= 50 {
                            self.size += 55 - self.period;
                        } else {
                            self.size += 4;
                        }
                        if self.treasure < 95 {
                            self.pending_fruits += 1;
                        }
                    }
                    Fruit::Red => {}
                }
                self.pending_fruits += 1;
            }
            Cell::Trail(left) if left > 0 => {
                if self.invincible == 0 {
                    self.finished = true;
                    game_over = Some(self.size);
                } else {
                    self.invincible -= 1;
                }
                self.board[px][py] = Cell::Empty;
                self.size = self.size.saturating_sub(1).max(4);
            }
            _ => {}
        }

        if game_over.is_some() {
            return StepReport { hud, game_over };
        }

        self.board[rx][ry] = Cell::Trail(self.rival_size.min(u16::MAX as u32) as u16);
        self.board[px][py] = Cell::Trail(self.size.min(u16::MAX as u32) as u16);

        let heading = steering.index();
        self.player = wrap(self.player, heading);
        self.rival_heading = (self.rival_heading + rng.random(-1, 2)).rem_euclid(4);
        self.rival = wrap(self.rival, self.rival_heading as usize);

        StepReport { hud, game_over }
    }

    /// Age every trail cell by one step and report how to repaint it
    ///
    /// Call once after each step. Cells that reach zero are reported in
    /// black and freed on the following call.
    pub fn decay(&mut self) -> impl Iterator<Item = (usize, usize, TrailPaint)> + '_ {
        self.board.iter_mut().enumerate().flat_map(|(x, col)| {
            col.into_iter().enumerate().filter_map(move |(y, cell)| match *cell {
                Cell::Trail(0) => {
                    *cell = Cell::Empty;
                    None
                }
                Cell::Trail(left) => {
                    let aged = left - 1;
                    *cell = Cell::Trail(aged);
                    let paint = if left >= SHADE_COUNT {
                        TrailPaint::White
                    } else {
                        TrailPaint::Shade(aged)
                    };
                    Some((x, y, paint))
                }
                _ => None,
            })
        })
    }
}

fn wrap((x, y): (i32, i32), heading: usize) -> (i32, i32) {
    (
        (x + X_DIR[heading]).rem_euclid(COLS as i32),
        (y + Y_DIR[heading]).rem_euclid(ROWS as i32),
    )
}
