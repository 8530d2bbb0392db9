//! Policy port - greedy action selection
//!
//! Every strategy that can drive a rollout implements this one-method
//! capability: the random baseline, the value-iteration policy reader, and
//! the Q-table reader. The evaluation driver works against the trait and
//! stays agnostic of how the action was chosen.

use crate::types::{Action, GridPos};

/// A strategy that can pick an action for a given state.
///
/// `select_greedy_action` takes `&mut self` because the random baseline
/// advances an internal RNG; the learned policies read their tables without
/// mutation.
pub trait Policy {
    /// Select the action to take from `state` when exploiting (no
    /// exploration).
    fn select_greedy_action(&mut self, state: GridPos) -> Action;

    /// Name used in log output and run summaries.
    fn name(&self) -> &str;
}
