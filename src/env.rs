//! External control surface
//!
//! Drivers (renderers, RL bindings, CLIs) interact with the core only
//! through this type: `reset` to start an episode, `step` to advance one
//! tick, `score`/`is_terminal` for read-only probes. Each instance owns its
//! configuration, state and RNG outright, so any number of instances can run
//! independently in one process.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::SimConfig;
use crate::sim::obs::Snapshot;
use crate::sim::state::GameState;
use crate::sim::tick::{Action, tick};

/// One independent simulation instance with a private RNG
#[derive(Debug, Clone)]
pub struct Riverhop {
    pub config: SimConfig,
    pub state: GameState,
    rng: Pcg32,
}

impl Riverhop {
    /// Build an instance seeded with 0; call [`Riverhop::reset`] to pick the
    /// real episode seed.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(0);
        let state = GameState::new(0, &config, &mut rng);
        Self { config, state, rng }
    }

    /// Reseed the private RNG and rebuild lane timers, entities and episode
    /// counters. Returns the initial observation.
    pub fn reset(&mut self, seed: u64) -> Vec<f32> {
        self.rng = Pcg32::seed_from_u64(seed);
        self.state = GameState::new(seed, &self.config, &mut self.rng);
        log::debug!("episode reset, seed {seed}");
        self.observe()
    }

    /// Advance one tick. Returns the observation, the reward delta for this
    /// tick (not the cumulative score) and the terminal flag.
    pub fn step(&mut self, action: Action) -> (Vec<f32>, f32, bool) {
        let reward = tick(&mut self.state, action, &self.config);
        (self.observe(), reward, self.state.terminal())
    }

    /// Encode the current state without advancing it
    pub fn observe(&self) -> Vec<f32> {
        Snapshot::capture(&self.state).encode()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.terminal()
    }

    /// Cumulative score, for adapters that compute reward deltas themselves
    pub fn score(&self) -> f32 {
        self.state.score
    }
}
