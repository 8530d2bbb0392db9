//! CLI infrastructure for the maze-rl toolkit
//!
//! One command per run mode: the random baseline, the value-iteration
//! solver, Q-learning training, and metrics-log analysis.

pub mod commands;
pub mod output;

use clap::Args;
use rand::{SeedableRng, rngs::StdRng};

use crate::maze::MazeConfig;

/// Maze and seeding flags shared by every run mode.
#[derive(Args, Debug, Clone)]
pub struct MazeArgs {
    /// Grid width (rounded up to the next odd value)
    #[arg(long, default_value_t = 15)]
    pub width: usize,

    /// Grid height (rounded up to the next odd value)
    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// Minimum start-to-goal shortest path enforced by generation
    #[arg(long, default_value_t = 30)]
    pub min_shortest_length: usize,

    /// Generation attempts before giving up
    #[arg(long, default_value_t = 1000)]
    pub max_attempts: usize,

    /// Random seed for reproducible mazes and training
    #[arg(long)]
    pub seed: Option<u64>,
}

impl MazeArgs {
    pub fn config(&self) -> MazeConfig {
        MazeConfig {
            width: self.width,
            height: self.height,
            min_shortest_length: self.min_shortest_length,
            max_attempts: self.max_attempts,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
