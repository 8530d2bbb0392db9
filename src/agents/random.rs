//! Uniform random baseline agent

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    ports::Policy,
    types::{Action, GridPos},
};

/// Picks a uniformly random action regardless of state.
#[derive(Debug)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomAgent {
    fn select_greedy_action(&mut self, _state: GridPos) -> Action {
        // Action::ALL is non-empty, so choose cannot fail.
        *Action::ALL.choose(&mut self.rng).unwrap_or(&Action::Up)
    }

    fn name(&self) -> &str {
        "random"
    }
}
