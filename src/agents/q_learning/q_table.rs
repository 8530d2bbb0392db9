//! Q-table for temporal difference learning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Action, GridPos};

/// Q-values keyed by `(state, action)`, together with the learning rate and
/// discount used for updates.
///
/// Unset entries read as 0.0 and entries are never removed. The table is
/// owned exclusively by the learning agent; nothing else writes to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QTable {
    q_values: HashMap<(GridPos, Action), f64>,
    /// Learning rate alpha
    learning_rate: f64,
    /// Discount factor gamma
    discount_factor: f64,
}

impl QTable {
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            q_values: HashMap::new(),
            learning_rate,
            discount_factor,
        }
    }

    /// Q-value of a state-action pair, 0.0 when unseen.
    pub fn get(&self, state: GridPos, action: Action) -> f64 {
        self.q_values.get(&(state, action)).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, state: GridPos, action: Action, value: f64) {
        self.q_values.insert((state, action), value);
    }

    /// Maximum Q-value over all actions in a state.
    pub fn max_q(&self, state: GridPos) -> f64 {
        Action::ALL
            .iter()
            .map(|&action| self.get(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Greedy action with ties broken by the fixed Up, Down, Left, Right
    /// priority (first strict maximum wins).
    pub fn greedy_action(&self, state: GridPos) -> Action {
        let mut best_action = Action::Up;
        let mut best_value = f64::NEG_INFINITY;
        for action in Action::ALL {
            let value = self.get(state, action);
            if value > best_value {
                best_value = value;
                best_action = action;
            }
        }
        best_action
    }

    /// Q-learning update: off-policy TD control
    ///
    /// `Q(s,a) <- Q(s,a) + alpha * [r + gamma * max_a' Q(s',a') - Q(s,a)]`,
    /// with the bootstrap term zeroed on terminal transitions.
    pub fn q_learning_update(
        &mut self,
        state: GridPos,
        action: Action,
        reward: f64,
        next_state: GridPos,
        terminated: bool,
    ) {
        let current_q = self.get(state, action);
        let max_next_q = if terminated { 0.0 } else { self.max_q(next_state) };
        let td_target = reward + self.discount_factor * max_next_q;
        let new_q = current_q + self.learning_rate * (td_target - current_q);
        self.set(state, action, new_q);
    }

    /// Number of state-action pairs seen so far.
    pub fn len(&self) -> usize {
        self.q_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_entries_read_as_zero() {
        let table = QTable::new(0.2, 1.0);
        assert_eq!(table.get(GridPos::new(1, 1), Action::Up), 0.0);
        assert!(table.is_empty());
    }

    #[test]
    fn max_q_over_actions() {
        let mut table = QTable::new(0.2, 1.0);
        let s = GridPos::new(1, 1);
        table.set(s, Action::Up, -3.0);
        table.set(s, Action::Right, -1.0);
        table.set(s, Action::Left, -2.0);
        assert_eq!(table.max_q(s), 0.0); // Down is unseen, reads as 0
        table.set(s, Action::Down, -4.0);
        assert_eq!(table.max_q(s), -1.0);
    }

    #[test]
    fn greedy_tie_break_follows_action_priority() {
        let mut table = QTable::new(0.2, 1.0);
        let s = GridPos::new(1, 1);
        // All equal: Up wins by priority.
        assert_eq!(table.greedy_action(s), Action::Up);
        // Down and Right tied at the maximum: Down wins.
        table.set(s, Action::Down, 1.0);
        table.set(s, Action::Right, 1.0);
        assert_eq!(table.greedy_action(s), Action::Down);
    }

    #[test]
    fn update_moves_toward_the_td_target() {
        let mut table = QTable::new(0.5, 1.0);
        let s = GridPos::new(1, 1);
        let s_next = GridPos::new(1, 2);
        table.set(s_next, Action::Right, -2.0);
        table.set(s_next, Action::Up, -5.0);
        table.set(s_next, Action::Down, -5.0);
        table.set(s_next, Action::Left, -5.0);

        table.q_learning_update(s, Action::Right, -1.0, s_next, false);
        // target = -1 + 1.0 * -2 = -3; Q = 0 + 0.5 * (-3 - 0) = -1.5
        assert!((table.get(s, Action::Right) + 1.5).abs() < 1e-12);
    }

    #[test]
    fn terminal_update_ignores_the_bootstrap() {
        let mut table = QTable::new(0.5, 1.0);
        let s = GridPos::new(1, 4);
        let goal = GridPos::new(1, 5);
        table.set(goal, Action::Up, 100.0); // must not leak into the target
        table.q_learning_update(s, Action::Right, -1.0, goal, true);
        assert!((table.get(s, Action::Right) + 0.5).abs() < 1e-12);
    }
}
