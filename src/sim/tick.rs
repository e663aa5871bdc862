//! One simulation tick
//!
//! Fixed resolution order, every tick: action intake → budget → spawn →
//! entity movement → frog sub-step → despawn → zone resolution → hop
//! bookkeeping → level check. The order is part of the determinism contract;
//! the zone resolver runs before the hop counter advances so the landing
//! sub-step of a hop still counts as airborne.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{self, Band};
use super::spawn;
use super::state::{ArrivedMarker, Facing, GameState};
use crate::config::SimConfig;
use crate::consts::*;

/// Discrete control input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Noop,
}

impl Action {
    /// The full action set in a stable order, for index-based drivers
    pub const ALL: [Action; 5] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Noop,
    ];

    /// Facing a directional action selects; `Noop` selects none
    pub fn facing(self) -> Option<Facing> {
        match self {
            Action::Up => Some(Facing::Up),
            Action::Down => Some(Facing::Down),
            Action::Left => Some(Facing::Left),
            Action::Right => Some(Facing::Right),
            Action::Noop => None,
        }
    }
}

/// Advance the simulation by one tick. Returns the reward delta for the
/// tick; `state.score` accumulates the same amounts.
pub fn tick(state: &mut GameState, action: Action, config: &SimConfig) -> f32 {
    // GameOver is an absorbing state, not an error
    if state.terminal() {
        return 0.0;
    }

    let score_before = state.score;

    // A hop in flight swallows new input; the action is dropped, not queued
    if !state.frog.is_moving
        && let Some(facing) = action.facing()
    {
        state.frog.facing = facing;
        state.frog.is_moving = true;
    }

    state.score += config.rewards.tick;
    state.steps_remaining = state.steps_remaining.saturating_sub(1);
    let timed_out = state.steps_remaining == 0;
    if timed_out {
        state.score += config.rewards.time_up;
        log::debug!("step budget exhausted on level {}", state.level);
        kill_frog(state, config);
    }

    spawn::tick_spawners(state);

    let speed = state.speed as f32;
    for vehicle in &mut state.vehicles {
        vehicle.advance(speed);
    }
    for log_entity in &mut state.logs {
        log_entity.advance(speed);
    }

    state.frog.hop_substep();

    spawn::despawn_offscreen(state);

    // A time-up death already repositioned (or ended) the frog this tick
    if !timed_out && !state.terminal() {
        resolve_zone(state, config);
    }
    state.frog.animate();

    check_level_clear(state, config);

    state.score - score_before
}

/// Death path shared by vehicle hits, drowning and tick exhaustion
fn kill_frog(state: &mut GameState, config: &SimConfig) {
    state.frog.lives -= 1;
    if state.frog.lives == 0 {
        state.score += config.rewards.no_lives;
        log::info!("game over, final score {}", state.score);
        return;
    }
    state.steps_remaining = state.max_steps;
    state.frog.respawn();
    state.frog.facing = Facing::Up;
}

/// Apply the outcome of whichever band the frog is in
fn resolve_zone(state: &mut GameState, config: &SimConfig) {
    let frog_rect = state.frog.rect();
    match collision::classify_band(state.frog.pos.y) {
        Some(Band::Road) => {
            if collision::first_vehicle_hit(&frog_rect, &state.vehicles).is_some() {
                state.score += config.rewards.hit_vehicle;
                log::debug!("frog hit by a vehicle at {}", state.frog.pos);
                kill_frog(state, config);
            }
        }
        Some(Band::River) => {
            let carried = collision::carrying_log(&frog_rect, &state.logs).map(|l| l.dir);
            match carried {
                Some(dir) => {
                    state.frog.pos.x += dir.sign() * state.speed as f32;
                    // Carried past the edge: same fate as missing the log
                    if state.frog.pos.x + FROG_SIZE < 0.0 || state.frog.pos.x > WIDTH {
                        state.score += config.rewards.hit_water;
                        log::debug!("frog carried off-screen");
                        kill_frog(state, config);
                    }
                }
                None => {
                    // Airborne frogs pass over open water; drowning only
                    // happens when the frog settles on it
                    if !state.frog.is_moving {
                        state.score += config.rewards.hit_water;
                        log::debug!("frog drowned at {}", state.frog.pos);
                        kill_frog(state, config);
                    }
                }
            }
        }
        Some(Band::Goal) => resolve_goal(state, config),
        None => {}
    }
}

/// Goal strip outcome: claim a free slot or slide back into the river
fn resolve_goal(state: &mut GameState, config: &SimConfig) {
    match collision::matching_goal_slot(state.frog.pos.x, &state.arrived) {
        Some(slot) => {
            state.arrived.push(ArrivedMarker {
                slot,
                pos: Vec2::new(ARRIVAL_POSITIONS[slot], GOAL_ROW_Y),
            });
            state.score += state.level as f32 * config.rewards.arrival;
            log::debug!(
                "goal slot {slot} claimed ({}/{})",
                state.arrived.len(),
                config.arrival_target
            );
            state.frog.respawn();
        }
        None => {
            // Slid off a lily pad: drop back onto the top river row
            state.frog.pos.y = RIVER_TOP_ROW_Y;
            state.frog.animation_counter = 0;
            state.frog.is_moving = false;
        }
    }
}

/// Enough slots claimed: wipe the strip and advance the level
fn check_level_clear(state: &mut GameState, config: &SimConfig) {
    if state.arrived.len() < config.arrival_target {
        return;
    }
    state.arrived.clear();
    state.frog.respawn();
    state.steps_remaining = state.max_steps;
    state.level += 1;
    state.speed += 1;
    state.score += state.level as f32 * config.rewards.new_level;
    log::info!("level cleared, advancing to level {}", state.level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::LOG_LANE_COUNT;
    use crate::sim::state::{Direction, Log, Vehicle};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn quiet_state(config: &SimConfig) -> GameState {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut state = GameState::new(0, config, &mut rng);
        // silence every lane so tests control the traffic
        state.ticks_vehicles = [1e9; 5];
        state.ticks_logs = [1e9; LOG_LANE_COUNT];
        state
    }

    fn log_at(x: f32, y: f32, dir: Direction) -> Log {
        Log {
            pos: Vec2::new(x, y),
            size: Vec2::new(100.0, 35.0),
            dir,
        }
    }

    #[test]
    fn noop_costs_the_tick_reward_and_one_step() {
        let config = SimConfig::default();
        let mut state = quiet_state(&config);
        let reward = tick(&mut state, Action::Noop, &config);
        assert_eq!(reward, config.rewards.tick);
        assert_eq!(state.steps_remaining, config.max_steps - 1);
    }

    #[test]
    fn action_during_a_hop_is_dropped() {
        let config = SimConfig::default();
        let mut state = quiet_state(&config);
        tick(&mut state, Action::Up, &config);
        assert_eq!(state.frog.facing, Facing::Up);
        assert!(state.frog.is_moving);

        tick(&mut state, Action::Left, &config);
        assert_eq!(state.frog.facing, Facing::Up, "locked hop keeps its facing");
    }

    #[test]
    fn resting_on_open_water_drowns() {
        let config = SimConfig::default();
        let mut state = quiet_state(&config);
        state.frog.pos = Vec2::new(207.0, 202.0);
        let reward = tick(&mut state, Action::Noop, &config);
        assert_eq!(state.frog.lives, config.lives - 1);
        assert_eq!(reward, config.rewards.tick + config.rewards.hit_water);
        assert_eq!(state.steps_remaining, config.max_steps);
        assert_eq!(state.frog.pos, Vec2::new(FROG_START_X, FROG_START_Y));
    }

    #[test]
    fn a_log_carries_the_frog_at_game_speed() {
        let config = SimConfig::default();
        let mut state = quiet_state(&config);
        state.frog.pos = Vec2::new(207.0, 202.0);
        state.logs.push(log_at(180.0, 200.0, Direction::Right));
        tick(&mut state, Action::Noop, &config);
        // log moved 3 to 183, frog rides along to 210
        assert_eq!(state.frog.pos.x, 207.0 + config.speed as f32);
        assert_eq!(state.frog.lives, config.lives);
    }

    #[test]
    fn carried_fully_off_screen_counts_as_drowning() {
        let config = SimConfig::default();
        let mut state = quiet_state(&config);
        state.frog.pos = Vec2::new(447.0, 202.0);
        state.logs.push(log_at(400.0, 200.0, Direction::Right));
        let reward = tick(&mut state, Action::Noop, &config);
        assert_eq!(state.frog.lives, config.lives - 1);
        assert_eq!(reward, config.rewards.tick + config.rewards.hit_water);
    }

    #[test]
    fn time_up_kills_and_restores_the_budget() {
        let config = SimConfig::default();
        let mut state = quiet_state(&config);
        state.steps_remaining = 1;
        let reward = tick(&mut state, Action::Noop, &config);
        assert_eq!(state.frog.lives, config.lives - 1);
        assert_eq!(state.steps_remaining, config.max_steps);
        assert_eq!(reward, config.rewards.tick + config.rewards.time_up);
    }

    #[test]
    fn last_life_ends_the_episode_with_the_terminal_penalty() {
        let config = SimConfig::default();
        let mut state = quiet_state(&config);
        state.frog.lives = 1;
        state.frog.pos = Vec2::new(207.0, 436.0);
        state.vehicles.push(Vehicle {
            pos: Vec2::new(200.0, 436.0),
            size: Vec2::new(55.0, 30.0),
            dir: Direction::Right,
            factor: 1.0,
        });
        let reward = tick(&mut state, Action::Noop, &config);
        assert!(state.terminal());
        assert_eq!(
            reward,
            config.rewards.tick + config.rewards.hit_vehicle + config.rewards.no_lives
        );

        // absorbing: further ticks change nothing
        let after = state.clone();
        assert_eq!(tick(&mut state, Action::Up, &config), 0.0);
        assert_eq!(state, after);
    }

    #[test]
    fn goal_miss_slides_back_to_the_river_row() {
        let config = SimConfig::default();
        let mut state = quiet_state(&config);
        // x = 84 is a reachable column with no slot window around it
        state.frog.pos = Vec2::new(84.0, 7.0);
        tick(&mut state, Action::Noop, &config);
        assert_eq!(state.frog.pos.y, RIVER_TOP_ROW_Y);
        assert_eq!(state.frog.lives, config.lives);
        assert!(!state.frog.is_moving);
    }

    #[test]
    fn arrival_rewards_scale_with_level() {
        let config = SimConfig::default();
        let mut state = quiet_state(&config);
        state.level = 2;
        state.frog.pos = Vec2::new(125.0, 7.0);
        let reward = tick(&mut state, Action::Noop, &config);
        assert_eq!(
            reward,
            config.rewards.tick + 2.0 * config.rewards.arrival
        );
        assert_eq!(state.arrived.len(), 1);
        assert_eq!(state.arrived[0].slot, 1);
    }
}
