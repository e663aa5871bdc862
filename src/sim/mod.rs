//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per `step`, fixed resolution order within the tick
//! - Seeded RNG only, drawn from exclusively at reset
//! - Stable iteration order (spawn order / lane-index ascending)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obs;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Band, Rect, classify_band};
pub use obs::{DecodeError, Snapshot};
pub use spawn::{LOG_LANES, LaneSpec, VEHICLE_LANES};
pub use state::{ArrivedMarker, Direction, Facing, Frog, GameState, Log, Vehicle};
pub use tick::{Action, tick};
