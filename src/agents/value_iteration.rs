//! Exact solver: synchronous value iteration
//!
//! Computes the optimal state-value function of a fixed maze by repeated
//! Bellman-optimality backups over all free cells, then extracts the greedy
//! policy. Convergence holds even at gamma = 1 because the goal state is
//! absorbing with value pinned at 0 and every free cell has a finite path
//! to it (perfect mazes are connected).

use std::collections::HashMap;

use tracing::debug;

use crate::{
    maze::Maze,
    ports::Policy,
    types::{Action, GridPos},
};

/// Converged value function and greedy policy for one maze.
#[derive(Debug, Clone)]
pub struct ValueIterationAgent {
    values: HashMap<GridPos, f64>,
    policy: HashMap<GridPos, Action>,
    gamma: f64,
    sweeps: usize,
}

impl ValueIterationAgent {
    /// Run value iteration on `maze` until the largest per-sweep value
    /// change drops below `threshold`.
    ///
    /// Every non-terminal free cell `s` is backed up synchronously with
    /// `V(s) = max_a [-1 + gamma * V(next(s, a))]`; the goal cell is held
    /// at 0 and excluded from updates.
    pub fn solve(maze: &Maze, gamma: f64, threshold: f64) -> Self {
        let goal = maze.goal();
        let states: Vec<GridPos> = maze.grid().free_cells().collect();

        let mut values: HashMap<GridPos, f64> = states.iter().map(|&s| (s, 0.0)).collect();
        let mut sweeps = 0usize;

        loop {
            sweeps += 1;
            let mut next_values = values.clone();
            let mut delta = 0.0f64;

            for &state in &states {
                if state == goal {
                    continue;
                }
                let best = Action::ALL
                    .iter()
                    .map(|&action| {
                        let next = maze.next_location(state, action);
                        -1.0 + gamma * values[&next]
                    })
                    .fold(f64::NEG_INFINITY, f64::max);
                delta = delta.max((best - values[&state]).abs());
                next_values.insert(state, best);
            }

            values = next_values;
            if delta < threshold {
                break;
            }
        }
        debug!(sweeps, states = states.len(), "value iteration converged");

        let mut policy = HashMap::with_capacity(states.len());
        for &state in &states {
            if state == goal {
                continue;
            }
            policy.insert(state, greedy_backup(maze, &values, state, gamma));
        }

        Self {
            values,
            policy,
            gamma,
            sweeps,
        }
    }

    /// Converged value of a state; the goal is always 0.
    pub fn value(&self, state: GridPos) -> f64 {
        self.values.get(&state).copied().unwrap_or(0.0)
    }

    pub fn values(&self) -> &HashMap<GridPos, f64> {
        &self.values
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Number of full sweeps until convergence.
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }
}

/// One-step lookahead argmax with the fixed Up, Down, Left, Right tie-break
/// order.
fn greedy_backup(
    maze: &Maze,
    values: &HashMap<GridPos, f64>,
    state: GridPos,
    gamma: f64,
) -> Action {
    let mut best_action = Action::Up;
    let mut best_value = f64::NEG_INFINITY;
    for action in Action::ALL {
        let next = maze.next_location(state, action);
        let value = -1.0 + gamma * values.get(&next).copied().unwrap_or(0.0);
        if value > best_value {
            best_value = value;
            best_action = action;
        }
    }
    best_action
}

impl Policy for ValueIterationAgent {
    fn select_greedy_action(&mut self, state: GridPos) -> Action {
        // States outside the policy map (the goal, or a wall cell the
        // environment can never report) fall back to the first action.
        self.policy.get(&state).copied().unwrap_or(Action::Up)
    }

    fn name(&self) -> &str {
        "value-iteration"
    }
}
