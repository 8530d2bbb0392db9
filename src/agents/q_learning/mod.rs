//! Tabular Q-learning
//!
//! Off-policy temporal-difference control over the maze MDP. The agent owns
//! a [`QTable`] keyed by `(state, action)`, explores with an epsilon-greedy
//! behavior policy whose rate follows an
//! [`EpsilonProfile`](crate::epsilon::EpsilonProfile), and updates toward
//! the Bellman-optimality target
//! `r + gamma * max_a' Q(s', a')` after every step.

pub mod agent;
pub mod q_table;

pub use agent::QLearningAgent;
pub use q_table::QTable;
