//! Entities and episode state
//!
//! Everything that must survive a tick lives here as plain data. Movement
//! rules that need the rest of the world (collision outcomes, spawning) live
//! in `tick` and `spawn`; the entities only know how to displace themselves.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::spawn::{LOG_LANE_COUNT, VEHICLE_LANE_COUNT};
use crate::config::SimConfig;
use crate::consts::*;

/// Horizontal travel direction for lane entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Signed unit factor applied to per-tick displacement
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Which way the frog is facing, set by the last accepted action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

/// A road vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub pos: Vec2,
    pub size: Vec2,
    pub dir: Direction,
    /// Lane speed multiplier on top of the global game speed
    pub factor: f32,
}

impl Vehicle {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Displace along the lane; `speed` is the global per-tick speed
    pub fn advance(&mut self, speed: f32) {
        self.pos.x += self.dir.sign() * speed * self.factor;
    }
}

/// A floating log the frog can ride across the river
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub pos: Vec2,
    pub size: Vec2,
    pub dir: Direction,
}

impl Log {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Logs move at the global speed, no lane factor
    pub fn advance(&mut self, speed: f32) {
        self.pos.x += self.dir.sign() * speed;
    }
}

/// A lily-pad slot claimed by a frog that made it across. Static.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivedMarker {
    pub slot: usize,
    pub pos: Vec2,
}

/// The player entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frog {
    pub pos: Vec2,
    pub lives: u32,
    pub facing: Facing,
    /// Sub-step counter within the current hop (0..ANIMATIONS_PER_MOVE)
    pub animation_counter: u32,
    /// Hop lock: taken when an action is accepted, released when the hop lands
    pub is_moving: bool,
}

impl Frog {
    pub fn new(lives: u32) -> Self {
        Self {
            pos: Vec2::new(FROG_START_X, FROG_START_Y),
            lives,
            facing: Facing::Up,
            animation_counter: 0,
            is_moving: false,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(FROG_SIZE))
    }

    /// Put the frog back on the start row and cancel any hop in flight
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(FROG_START_X, FROG_START_Y);
        self.animation_counter = 0;
        self.is_moving = false;
    }

    /// Advance one hop sub-step in the facing direction.
    ///
    /// Out-of-range sub-steps are skipped silently, but the hop lock still
    /// runs its full course, so a blocked hop costs the same ticks as a real
    /// one. The last sub-step uses an asymmetric delta so a full hop lands
    /// exactly one cell away.
    pub fn hop_substep(&mut self) {
        if !self.is_moving {
            return;
        }
        let last = self.animation_counter == ANIMATIONS_PER_MOVE - 1;
        match self.facing {
            Facing::Up => {
                if self.pos.y > FROG_UP_LIMIT {
                    self.pos.y -= if last { HOP_LAST_STEP_Y } else { HOP_STEP_Y };
                }
            }
            Facing::Down => {
                if self.pos.y <= FROG_DOWN_LIMIT {
                    self.pos.y += if last { HOP_LAST_STEP_Y } else { HOP_STEP_Y };
                }
            }
            Facing::Left => {
                if self.pos.x > FROG_LEFT_LIMIT {
                    self.pos.x -= if last { HOP_LAST_STEP_X } else { HOP_STEP_X };
                }
            }
            Facing::Right => {
                if self.pos.x <= FROG_RIGHT_LIMIT {
                    self.pos.x += if last { HOP_LAST_STEP_X } else { HOP_STEP_X };
                }
            }
        }
    }

    /// Advance the hop counter; releases the lock when the hop completes
    pub fn animate(&mut self) {
        if !self.is_moving {
            return;
        }
        self.animation_counter += 1;
        if self.animation_counter == ANIMATIONS_PER_MOVE {
            self.animation_counter = 0;
            self.is_moving = false;
        }
    }
}

/// Complete episode state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed this episode was reset with, kept for reproducibility records
    pub seed: u64,
    pub steps_remaining: u32,
    pub max_steps: u32,
    pub level: u32,
    pub speed: u32,
    /// Cumulative score; `tick` returns per-tick deltas of this
    pub score: f32,
    pub frog: Frog,
    /// Live vehicles in spawn order
    pub vehicles: Vec<Vehicle>,
    /// Live logs in spawn order
    pub logs: Vec<Log>,
    /// Claimed goal slots, in arrival order
    pub arrived: Vec<ArrivedMarker>,
    /// Per-lane spawn countdowns. f32 because the reset period
    /// `base * speed / level` is true division.
    pub ticks_vehicles: [f32; VEHICLE_LANE_COUNT],
    pub ticks_logs: [f32; LOG_LANE_COUNT],
}

impl GameState {
    /// Build a fresh episode. The initial countdowns are the only RNG draws
    /// of the whole episode: vehicle lanes first, lane-index ascending.
    pub fn new(seed: u64, config: &SimConfig, rng: &mut Pcg32) -> Self {
        let mut ticks_vehicles = [0.0; VEHICLE_LANE_COUNT];
        for slot in ticks_vehicles.iter_mut() {
            *slot = rng.random_range(0..=VEHICLE_SPAWN_JITTER) as f32;
        }
        let mut ticks_logs = [0.0; LOG_LANE_COUNT];
        for slot in ticks_logs.iter_mut() {
            *slot = rng.random_range(0..=LOG_SPAWN_JITTER) as f32;
        }

        Self {
            seed,
            steps_remaining: config.max_steps,
            max_steps: config.max_steps,
            level: config.level,
            speed: config.speed,
            score: 0.0,
            frog: Frog::new(config.lives),
            vehicles: Vec::new(),
            logs: Vec::new(),
            arrived: Vec::new(),
            ticks_vehicles,
            ticks_logs,
        }
    }

    /// The episode is over exactly when the last life is spent
    #[inline]
    pub fn terminal(&self) -> bool {
        self.frog.lives == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hopping_frog(facing: Facing) -> Frog {
        let mut frog = Frog::new(3);
        frog.facing = facing;
        frog.is_moving = true;
        frog
    }

    fn run_full_hop(frog: &mut Frog) {
        for _ in 0..ANIMATIONS_PER_MOVE {
            frog.hop_substep();
            frog.animate();
        }
    }

    #[test]
    fn full_hop_lands_exactly_one_cell_up() {
        let mut frog = hopping_frog(Facing::Up);
        run_full_hop(&mut frog);
        assert_eq!(frog.pos.y, FROG_START_Y - CELL_HEIGHT);
        assert!(!frog.is_moving);
        assert_eq!(frog.animation_counter, 0);
    }

    #[test]
    fn full_hop_lands_exactly_one_cell_right() {
        let mut frog = hopping_frog(Facing::Right);
        run_full_hop(&mut frog);
        assert_eq!(frog.pos.x, FROG_START_X + CELL_WIDTH);
    }

    #[test]
    fn blocked_hop_still_consumes_the_lock() {
        // Start row: a downward hop is out of range and must be a silent no-op
        let mut frog = hopping_frog(Facing::Down);
        run_full_hop(&mut frog);
        assert_eq!(frog.pos.y, FROG_START_Y);
        assert!(!frog.is_moving);
    }

    #[test]
    fn left_clamp_holds_at_the_playfield_edge() {
        let mut frog = hopping_frog(Facing::Left);
        frog.pos.x = FROG_LEFT_LIMIT;
        run_full_hop(&mut frog);
        assert_eq!(frog.pos.x, FROG_LEFT_LIMIT);
    }

    #[test]
    fn vehicle_advance_applies_lane_factor() {
        let mut vehicle = Vehicle {
            pos: Vec2::new(100.0, 397.0),
            size: Vec2::new(58.0, 30.0),
            dir: Direction::Left,
            factor: 2.0,
        };
        vehicle.advance(3.0);
        assert_eq!(vehicle.pos.x, 94.0);
    }
}
