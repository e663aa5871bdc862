//! Headless random-policy driver, handy for smoke-testing the core.
//!
//! Usage: `random_agent [seed]`. Set `RIVERHOP_CONFIG` to a JSON file to
//! override the default configuration, and `RUST_LOG=debug` to watch the
//! episode unfold.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use riverhop::{Action, Riverhop, SimConfig};

fn main() {
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);

    let config = match std::env::var("RIVERHOP_CONFIG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("cannot read config {path}: {e}"));
            SimConfig::from_json(&json).unwrap_or_else(|e| panic!("bad config {path}: {e}"))
        }
        Err(_) => SimConfig::default(),
    };

    let mut env = Riverhop::new(config);
    env.reset(seed);

    // The policy RNG is separate from the simulation's private stream
    let mut policy = Pcg32::seed_from_u64(seed ^ 0x5eed_f00d);
    let mut ticks = 0u64;
    let mut total = 0.0f32;
    loop {
        let action = Action::ALL[policy.random_range(0..Action::ALL.len())];
        let (_obs, reward, terminal) = env.step(action);
        total += reward;
        ticks += 1;
        if terminal {
            break;
        }
    }

    println!("seed {seed}: episode over after {ticks} ticks, score {total}");
}
