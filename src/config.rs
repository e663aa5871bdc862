//! Episode configuration
//!
//! Accepted at construction and never re-read mid-episode. Reward magnitudes
//! mirror the classic tuning; every field has a serde default so a partial
//! JSON document overrides just the knobs it names.

use serde::{Deserialize, Serialize};

/// Reward magnitudes per outcome kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardTable {
    /// Run over by a vehicle on the road
    pub hit_vehicle: f32,
    /// Settled on open water, or carried off-screen by a log
    pub hit_water: f32,
    /// Step budget exhausted
    pub time_up: f32,
    /// Last life spent; applied once when the episode ends
    pub no_lives: f32,
    /// Level cleared; scaled by the level just reached
    pub new_level: f32,
    /// Goal slot claimed; scaled by the current level
    pub arrival: f32,
    /// Flat cost charged on every accepted tick
    pub tick: f32,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            hit_vehicle: -20.0,
            hit_water: -20.0,
            time_up: -20.0,
            no_lives: -50.0,
            new_level: 100.0,
            arrival: 30.0,
            tick: -1.0,
        }
    }
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Step budget per life; restored on every death and level clear
    pub max_steps: u32,
    pub lives: u32,
    pub level: u32,
    /// Global per-tick speed; vehicles additionally apply their lane factor
    pub speed: u32,
    /// Occupied goal slots needed to clear a level
    pub arrival_target: usize,
    pub rewards: RewardTable,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_steps: 300,
            lives: 3,
            level: 1,
            speed: 3,
            arrival_target: 5,
            rewards: RewardTable::default(),
        }
    }
}

impl SimConfig {
    /// Parse a configuration from JSON; omitted fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
