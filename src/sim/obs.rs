//! Observation codec
//!
//! The observation is a flat `f32` vector: a fixed header, one (x, y) record
//! per live vehicle, a separator sentinel, then one record per live log. The
//! sentinel lets the decoder find the vehicle/log boundary without a count
//! field. Sentinel comparison is exact equality; the coordinate grid is
//! integer-valued, so a legitimate value can never equal it (debug-asserted
//! at encode time).

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::GameState;
use crate::consts::{NUM_GOAL_SLOTS, OBS_SEPARATOR};

/// Fixed header length: steps, level, score, lives, slot flags, frog x/y
pub const HEADER_LEN: usize = 4 + NUM_GOAL_SLOTS + 2;

/// Structural faults in an externally supplied observation buffer.
///
/// These fail loudly on purpose: a missing or misplaced sentinel means the
/// buffer is corrupted or foreign, and a partially decoded state would be
/// worse than no state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("observation holds {len} values, the header alone needs {HEADER_LEN}")]
    TooShort { len: usize },
    #[error("separator sentinel missing after the vehicle records")]
    MissingSeparator,
    #[error("dangling half record at offset {offset}")]
    DanglingValue { offset: usize },
}

/// Observation-level projection of the game state.
///
/// This is what external drivers see. Spawn timers and the RNG stream are
/// intentionally absent: they are simulation internals, not observables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub steps_remaining: u32,
    pub level: u32,
    pub score: f32,
    pub lives: u32,
    /// Occupancy per goal slot, slot-index order
    pub arrived: [bool; NUM_GOAL_SLOTS],
    pub frog: Vec2,
    /// Vehicle positions in spawn order
    pub vehicles: Vec<Vec2>,
    /// Log positions in spawn order
    pub logs: Vec<Vec2>,
}

impl Snapshot {
    /// Project the live state down to its observable part
    pub fn capture(state: &GameState) -> Self {
        let mut arrived = [false; NUM_GOAL_SLOTS];
        for marker in &state.arrived {
            arrived[marker.slot] = true;
        }
        Self {
            steps_remaining: state.steps_remaining,
            level: state.level,
            score: state.score,
            lives: state.frog.lives,
            arrived,
            frog: state.frog.pos,
            vehicles: state.vehicles.iter().map(|v| v.pos).collect(),
            logs: state.logs.iter().map(|l| l.pos).collect(),
        }
    }

    /// Serialize into the flat vector contract
    pub fn encode(&self) -> Vec<f32> {
        let records = 2 * (self.vehicles.len() + self.logs.len());
        let mut out = Vec::with_capacity(HEADER_LEN + 1 + records);
        out.push(self.steps_remaining as f32);
        out.push(self.level as f32);
        out.push(self.score);
        out.push(self.lives as f32);
        for &flag in &self.arrived {
            out.push(if flag { 1.0 } else { 0.0 });
        }
        out.push(self.frog.x);
        out.push(self.frog.y);
        for v in &self.vehicles {
            debug_assert!(
                v.x != OBS_SEPARATOR && v.y != OBS_SEPARATOR,
                "vehicle coordinate collides with the separator sentinel"
            );
            out.push(v.x);
            out.push(v.y);
        }
        out.push(OBS_SEPARATOR);
        for l in &self.logs {
            out.push(l.x);
            out.push(l.y);
        }
        out
    }

    /// Rebuild a snapshot from a flat vector.
    ///
    /// Round-trip law: `Snapshot::decode(&s.encode()) == s` for every
    /// reachable snapshot, as long as the sentinel stays unreachable by
    /// legitimate coordinates.
    pub fn decode(obs: &[f32]) -> Result<Self, DecodeError> {
        if obs.len() <= HEADER_LEN {
            return Err(DecodeError::TooShort { len: obs.len() });
        }

        let mut arrived = [false; NUM_GOAL_SLOTS];
        for (i, flag) in arrived.iter_mut().enumerate() {
            *flag = obs[4 + i] != 0.0;
        }
        let frog = Vec2::new(obs[4 + NUM_GOAL_SLOTS], obs[5 + NUM_GOAL_SLOTS]);

        // Exact sentinel comparison is the contract, not an accident
        let mut vehicles = Vec::new();
        let mut idx = HEADER_LEN;
        loop {
            match obs.get(idx) {
                None => return Err(DecodeError::MissingSeparator),
                Some(&v) if v == OBS_SEPARATOR => {
                    idx += 1;
                    break;
                }
                Some(&x) => {
                    let &y = obs
                        .get(idx + 1)
                        .ok_or(DecodeError::DanglingValue { offset: idx })?;
                    if y == OBS_SEPARATOR {
                        return Err(DecodeError::DanglingValue { offset: idx });
                    }
                    vehicles.push(Vec2::new(x, y));
                    idx += 2;
                }
            }
        }
        if !(obs.len() - idx).is_multiple_of(2) {
            return Err(DecodeError::DanglingValue { offset: obs.len() - 1 });
        }
        let logs = obs[idx..]
            .chunks_exact(2)
            .map(|pair| Vec2::new(pair[0], pair[1]))
            .collect();

        Ok(Self {
            steps_remaining: obs[0] as u32,
            level: obs[1] as u32,
            score: obs[2],
            lives: obs[3] as u32,
            arrived,
            frog,
            vehicles,
            logs,
        })
    }
}
