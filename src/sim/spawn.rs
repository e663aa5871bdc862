//! Lane definitions and entity spawning
//!
//! Each lane is a fixed origin with its own countdown timer. A countdown that
//! reaches zero spawns one entity at the lane origin and resets to
//! `base_period * speed / level`: higher level means more frequent traffic,
//! higher global speed stretches the period so spacing stays playable.

use glam::Vec2;

use super::state::{Direction, GameState, Log, Vehicle};
use crate::consts::WIDTH;

/// Static description of a spawn lane
#[derive(Debug, Clone, Copy)]
pub struct LaneSpec {
    pub origin: Vec2,
    pub dir: Direction,
    /// Speed multiplier for vehicles spawned here; logs ignore it
    pub factor: f32,
    /// Base countdown before level/speed scaling
    pub base_period: f32,
    /// Collision box of entities spawned here
    pub size: Vec2,
}

pub const VEHICLE_LANE_COUNT: usize = 5;
pub const LOG_LANE_COUNT: usize = 5;

/// Road lanes, bottom to top. Origins sit one entity-width off-screen on the
/// side the lane enters from.
pub const VEHICLE_LANES: [LaneSpec; VEHICLE_LANE_COUNT] = [
    LaneSpec {
        origin: Vec2::new(-55.0, 436.0),
        dir: Direction::Right,
        factor: 1.0,
        base_period: 40.0,
        size: Vec2::new(55.0, 30.0),
    },
    LaneSpec {
        origin: Vec2::new(506.0, 397.0),
        dir: Direction::Left,
        factor: 2.0,
        base_period: 30.0,
        size: Vec2::new(58.0, 30.0),
    },
    LaneSpec {
        origin: Vec2::new(-80.0, 357.0),
        dir: Direction::Right,
        factor: 2.0,
        base_period: 40.0,
        size: Vec2::new(80.0, 30.0),
    },
    LaneSpec {
        origin: Vec2::new(516.0, 318.0),
        dir: Direction::Left,
        factor: 1.0,
        base_period: 30.0,
        size: Vec2::new(68.0, 30.0),
    },
    LaneSpec {
        origin: Vec2::new(-56.0, 280.0),
        dir: Direction::Right,
        factor: 1.0,
        base_period: 50.0,
        size: Vec2::new(56.0, 30.0),
    },
];

/// River lanes, bottom to top
pub const LOG_LANES: [LaneSpec; LOG_LANE_COUNT] = [
    LaneSpec {
        origin: Vec2::new(-100.0, 200.0),
        dir: Direction::Right,
        factor: 1.0,
        base_period: 30.0,
        size: Vec2::new(100.0, 35.0),
    },
    LaneSpec {
        origin: Vec2::new(448.0, 161.0),
        dir: Direction::Left,
        factor: 1.0,
        base_period: 30.0,
        size: Vec2::new(100.0, 35.0),
    },
    LaneSpec {
        origin: Vec2::new(-100.0, 122.0),
        dir: Direction::Right,
        factor: 1.0,
        base_period: 40.0,
        size: Vec2::new(100.0, 35.0),
    },
    LaneSpec {
        origin: Vec2::new(448.0, 83.0),
        dir: Direction::Left,
        factor: 1.0,
        base_period: 40.0,
        size: Vec2::new(100.0, 35.0),
    },
    LaneSpec {
        origin: Vec2::new(-100.0, 44.0),
        dir: Direction::Right,
        factor: 1.0,
        base_period: 20.0,
        size: Vec2::new(100.0, 35.0),
    },
];

/// Effective countdown reset for a lane at the current level and speed
#[inline]
fn respawn_period(base: f32, speed: u32, level: u32) -> f32 {
    base * speed as f32 / level as f32
}

/// Decrement every lane countdown and spawn entities for lanes that reached
/// zero. Spawn order is lane-index ascending, vehicle lanes before log lanes;
/// the active lists stay in spawn order, which is the tie-break order the
/// collision resolver relies on.
pub fn tick_spawners(state: &mut GameState) {
    for (i, lane) in VEHICLE_LANES.iter().enumerate() {
        state.ticks_vehicles[i] -= 1.0;
        if state.ticks_vehicles[i] > 0.0 {
            continue;
        }
        state.ticks_vehicles[i] = respawn_period(lane.base_period, state.speed, state.level);
        state.vehicles.push(Vehicle {
            pos: lane.origin,
            size: lane.size,
            dir: lane.dir,
            factor: lane.factor,
        });
    }

    for (i, lane) in LOG_LANES.iter().enumerate() {
        state.ticks_logs[i] -= 1.0;
        if state.ticks_logs[i] > 0.0 {
            continue;
        }
        state.ticks_logs[i] = respawn_period(lane.base_period, state.speed, state.level);
        state.logs.push(Log {
            pos: lane.origin,
            size: lane.size,
            dir: lane.dir,
        });
    }
}

/// Drop entities whose x left the playfield by more than one entity width.
/// Despawn is positional only, never collision-based, and rebuilding via
/// `retain` keeps the surviving entities in spawn order.
pub fn despawn_offscreen(state: &mut GameState) {
    state
        .vehicles
        .retain(|v| v.pos.x >= -v.size.x && v.pos.x <= WIDTH + v.size.x);
    state
        .logs
        .retain(|l| l.pos.x >= -l.size.x && l.pos.x <= WIDTH + l.size.x);
}
