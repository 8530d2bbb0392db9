//! Gridworld maze MDP with exact and sample-based solvers
//!
//! This crate provides:
//! - Procedural generation of perfect mazes with a minimum shortest-path
//!   constraint
//! - The maze wrapped as a deterministic, episodic finite MDP with tabular
//!   and tensor observation encodings
//! - An exact value-iteration solver and a tabular Q-learning agent
//! - A greedy-rollout evaluation driver and training-metrics tooling

pub mod agents;
pub mod cli;
pub mod env;
pub mod epsilon;
pub mod error;
pub mod maze;
pub mod pipeline;
pub mod ports;
pub mod types;

pub use agents::{QLearningAgent, QTable, RandomAgent, ValueIterationAgent};
pub use env::{MazeEnv, Observation, ObservationMode, Step, TensorObservation};
pub use epsilon::EpsilonProfile;
pub use error::{Error, Result};
pub use maze::{Cell, Grid, Maze, MazeConfig, generate};
pub use pipeline::{EpisodeStats, Rollout, TrainingResult, greedy_rollout};
pub use ports::{EpisodeObserver, Policy};
pub use types::{Action, GridPos};
