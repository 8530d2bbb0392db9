//! Core domain types shared across the crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate on the maze grid, `(row, col)` with `(0, 0)` at the
/// top-left corner.
///
/// This is the canonical MDP state: solvers, agents, and tests reason about
/// `GridPos` only; the tensor observation encoding is derived from it on
/// demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four moves available to the agent.
///
/// Discriminant values match the action indices of the environment's
/// discrete action space (0 = Up, 1 = Down, 2 = Left, 3 = Right). The
/// ordering of [`Action::ALL`] is also the fixed tie-break priority used by
/// greedy action selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(usize)]
pub enum Action {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Action {
    /// All actions in tie-break priority order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Number of actions in the discrete action space.
    pub const COUNT: usize = 4;

    /// Stable index of this action (0-3).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row/column displacement of this action.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_indices_are_stable() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
        }
    }

    #[test]
    fn action_deltas_are_unit_moves() {
        for action in Action::ALL {
            let (dr, dc) = action.delta();
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
    }
}
