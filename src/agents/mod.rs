//! Solvers and baselines for the maze MDP
//!
//! Three strategies implement the [`Policy`](crate::ports::Policy) port:
//!
//! - [`RandomAgent`]: uniform action sampling, the baseline
//! - [`ValueIterationAgent`]: exact dynamic programming over the full state
//!   space
//! - [`QLearningAgent`](q_learning::QLearningAgent): sample-based tabular
//!   temporal-difference learning

pub mod q_learning;
pub mod random;
pub mod value_iteration;

pub use q_learning::{QLearningAgent, QTable};
pub use random::RandomAgent;
pub use value_iteration::ValueIterationAgent;
