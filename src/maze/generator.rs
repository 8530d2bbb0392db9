//! Procedural maze generation
//!
//! Mazes are carved with an iterative randomized depth-first backtracker
//! over a lattice of "room" cells at odd coordinates, which guarantees the
//! perfect-maze invariant (the free cells form a spanning tree). A minimum
//! shortest-path constraint is enforced by rejection sampling with a bounded
//! number of attempts.

use std::collections::VecDeque;

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    maze::grid::{Cell, Grid, Maze},
    types::GridPos,
};

/// Generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Requested grid width; rounded up to the next odd value >= 3.
    pub width: usize,

    /// Requested grid height; rounded up to the next odd value >= 3.
    pub height: usize,

    /// Lower bound on the start-to-goal shortest path, enforced by
    /// rejection sampling.
    pub min_shortest_length: usize,

    /// Maximum number of carve-and-check attempts before generation gives
    /// up with [`Error::GenerationInfeasible`].
    pub max_attempts: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            min_shortest_length: 30,
            max_attempts: 1000,
        }
    }
}

/// Round a requested dimension up to the next odd value, with a floor of 3.
fn normalize_dimension(n: usize) -> usize {
    ((n / 2) * 2 + 1).max(3)
}

/// Generate a maze satisfying `config`.
///
/// Each attempt carves a fresh perfect maze, picks two distinct random free
/// cells as start and goal, and measures the shortest path between them by
/// BFS. Attempts whose shortest path falls below
/// `config.min_shortest_length` are discarded.
///
/// # Errors
///
/// Returns [`Error::GenerationInfeasible`] when `config.max_attempts`
/// attempts all fail the shortest-path bound, and
/// [`Error::InvalidConfiguration`] when the grid is too small to hold two
/// distinct free cells or `max_attempts` is zero.
pub fn generate<R: Rng>(config: &MazeConfig, rng: &mut R) -> Result<Maze> {
    let width = normalize_dimension(config.width);
    let height = normalize_dimension(config.height);

    if config.max_attempts == 0 {
        return Err(Error::InvalidConfiguration {
            message: "max_attempts must be at least 1".to_string(),
        });
    }
    // One room per odd coordinate pair; two distinct endpoints need two rooms.
    if (width / 2) * (height / 2) < 2 {
        return Err(Error::InvalidConfiguration {
            message: format!("{width}x{height} grid has fewer than two free cells"),
        });
    }

    for attempt in 1..=config.max_attempts {
        let grid = carve(width, height, rng);
        let (start, goal) = pick_endpoints(&grid, rng);
        let shortest_length = bfs_distance(&grid, start, goal).ok_or(Error::GoalUnreachable)?;

        if shortest_length >= config.min_shortest_length {
            debug!(attempt, shortest_length, "maze generated");
            return Ok(Maze::new(grid, start, goal, shortest_length));
        }
        debug!(
            attempt,
            shortest_length,
            min = config.min_shortest_length,
            "maze rejected, retrying"
        );
    }

    Err(Error::GenerationInfeasible {
        width,
        height,
        min_shortest_length: config.min_shortest_length,
        attempts: config.max_attempts,
    })
}

/// Carve a perfect maze with the randomized depth-first backtracker.
///
/// Rooms live at odd coordinates `(2r + 1, 2c + 1)`; the even cells between
/// them are partitions that get opened as the traversal crosses them.
fn carve<R: Rng>(width: usize, height: usize, rng: &mut R) -> Grid {
    let rooms_wide = width / 2;
    let rooms_high = height / 2;

    let mut grid = Grid::filled_with_walls(width, height);
    let mut visited = vec![false; rooms_wide * rooms_high];
    let mut stack = Vec::with_capacity(rooms_wide * rooms_high);

    let start_room = (
        rng.random_range(0..rooms_high),
        rng.random_range(0..rooms_wide),
    );
    visited[start_room.0 * rooms_wide + start_room.1] = true;
    grid.set(room_cell(start_room), Cell::Free);
    stack.push(start_room);

    while let Some(&(row, col)) = stack.last() {
        let mut neighbors: Vec<(usize, usize)> = [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)]
            .iter()
            .filter_map(|&(dr, dc)| {
                let nr = row.checked_add_signed(dr)?;
                let nc = col.checked_add_signed(dc)?;
                (nr < rooms_high && nc < rooms_wide && !visited[nr * rooms_wide + nc])
                    .then_some((nr, nc))
            })
            .collect();

        if neighbors.is_empty() {
            stack.pop();
            continue;
        }

        neighbors.shuffle(rng);
        let next = neighbors[0];
        visited[next.0 * rooms_wide + next.1] = true;

        let here = room_cell((row, col));
        let there = room_cell(next);
        // Open the partition halfway between the two rooms.
        grid.set(
            GridPos::new((here.row + there.row) / 2, (here.col + there.col) / 2),
            Cell::Free,
        );
        grid.set(there, Cell::Free);
        stack.push(next);
    }

    grid
}

/// Grid cell of a room coordinate.
fn room_cell((room_row, room_col): (usize, usize)) -> GridPos {
    GridPos::new(2 * room_row + 1, 2 * room_col + 1)
}

/// Pick two distinct random free cells as start and goal.
fn pick_endpoints<R: Rng>(grid: &Grid, rng: &mut R) -> (GridPos, GridPos) {
    let free: Vec<GridPos> = grid.free_cells().collect();
    let start_idx = rng.random_range(0..free.len());
    let mut goal_idx = rng.random_range(0..free.len() - 1);
    if goal_idx >= start_idx {
        goal_idx += 1;
    }
    (free[start_idx], free[goal_idx])
}

/// Shortest-path length in steps between two free cells over 4-connected
/// free cells, or `None` if `to` is unreachable from `from`.
pub fn bfs_distance(grid: &Grid, from: GridPos, to: GridPos) -> Option<usize> {
    let mut dist = vec![usize::MAX; grid.width() * grid.height()];
    let index = |pos: GridPos| pos.row * grid.width() + pos.col;

    let mut queue = VecDeque::new();
    dist[index(from)] = 0;
    queue.push_back(from);

    while let Some(pos) = queue.pop_front() {
        if pos == to {
            return Some(dist[index(pos)]);
        }
        for action in crate::types::Action::ALL {
            if let Some(next) = grid.neighbor(pos, action) {
                if grid.is_free(next) && dist[index(next)] == usize::MAX {
                    dist[index(next)] = dist[index(pos)] + 1;
                    queue.push_back(next);
                }
            }
        }
    }

    None
}
