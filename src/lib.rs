//! Riverhop - a deterministic Frogger-style crossing simulation
//!
//! The crate is the simulation core only: a tick-based state machine that an
//! external driver advances through `reset`/`step`, receiving a flat numeric
//! observation vector, a reward delta and a terminal flag each tick. Rendering,
//! input handling and RL-framework bindings live outside and talk to the core
//! exclusively through [`env::Riverhop`].
//!
//! Core modules:
//! - `sim`: deterministic simulation (entities, spawning, collision, tick)
//! - `config`: episode parameters and reward magnitudes
//! - `env`: the reset/step control surface drivers consume
//!
//! Determinism contract: identical seed + identical action sequence yields an
//! identical observation and reward stream. Every instance owns its RNG and
//! state outright, so independent instances can run side by side.

pub mod config;
pub mod env;
pub mod sim;

pub use config::{RewardTable, SimConfig};
pub use env::Riverhop;
pub use sim::obs::{DecodeError, Snapshot};
pub use sim::tick::Action;

/// Playfield constants
///
/// All coordinates are pixels with the origin at the top-left corner and y
/// growing downward, matching the classic screen layout the lane tables in
/// `sim::spawn` are written against.
pub mod consts {
    /// Playfield size
    pub const WIDTH: f32 = 448.0;
    pub const HEIGHT: f32 = 546.0;

    /// Grid cell size; one full hop covers exactly one cell
    pub const CELL_WIDTH: f32 = 41.0;
    pub const CELL_HEIGHT: f32 = 39.0;

    /// Frog collision box (square)
    pub const FROG_SIZE: f32 = 30.0;
    /// Start-row position the frog respawns to
    pub const FROG_START_X: f32 = 207.0;
    pub const FROG_START_Y: f32 = 475.0;

    /// Sub-steps per hop; the lock releases when the last one lands
    pub const ANIMATIONS_PER_MOVE: u32 = 4;
    /// Regular and final sub-step distances. The final step is asymmetric so
    /// four sub-steps total exactly one cell and the frog never drifts off
    /// the grid.
    pub const HOP_STEP_X: f32 = 10.0;
    pub const HOP_LAST_STEP_X: f32 = 11.0;
    pub const HOP_STEP_Y: f32 = 10.0;
    pub const HOP_LAST_STEP_Y: f32 = 9.0;

    /// Hop clamps, checked before each sub-step. A sub-step past a clamp is
    /// skipped silently; the hop lock still runs its course.
    pub const FROG_UP_LIMIT: f32 = 39.0;
    pub const FROG_DOWN_LIMIT: f32 = 471.0;
    pub const FROG_LEFT_LIMIT: f32 = 2.0;
    pub const FROG_RIGHT_LIMIT: f32 = 407.0;

    /// Vertical band thresholds. Goal strip above `BAND_GOAL_MAX_Y`, river
    /// between there and `BAND_RIVER_MAX_Y`, road below that. The median rest
    /// row sits exactly on `BAND_RIVER_MAX_Y` and belongs to no band.
    pub const BAND_GOAL_MAX_Y: f32 = 40.0;
    pub const BAND_RIVER_MAX_Y: f32 = 241.0;
    pub const BAND_ROAD_MAX_Y: f32 = 475.0;

    /// Goal strip
    pub const NUM_GOAL_SLOTS: usize = 5;
    pub const ARRIVAL_POSITIONS: [f32; NUM_GOAL_SLOTS] = [43.0, 125.0, 207.0, 289.0, 371.0];
    /// Half-width of the window a frog must land in to claim a slot
    pub const ARRIVAL_TOLERANCE: f32 = 10.0;
    /// Row arrived markers sit on
    pub const GOAL_ROW_Y: f32 = 7.0;
    /// Row the frog drops back to after missing every slot
    pub const RIVER_TOP_ROW_Y: f32 = 46.0;

    /// Upper bounds for the initial countdown draw per lane kind
    pub const VEHICLE_SPAWN_JITTER: u32 = 50;
    pub const LOG_SPAWN_JITTER: u32 = 40;

    /// Sentinel separating vehicle records from log records in an encoded
    /// observation. Lane origins, speeds and hop distances are all
    /// integer-valued, so no legitimate coordinate can ever equal it.
    pub const OBS_SEPARATOR: f32 = 98.765_432_1;
}
