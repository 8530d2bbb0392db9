//! Wall/free grid and the maze built on top of it

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Action, GridPos};

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Free,
}

/// A 2-D grid of cells, row-major.
///
/// Dimensions are always odd and at least 3 (the generator normalizes even
/// requests upward), and the border cells are always `Wall`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell set to `Wall`.
    pub fn filled_with_walls(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, pos: GridPos) -> Cell {
        self.cells[pos.row * self.width + pos.col]
    }

    pub fn set(&mut self, pos: GridPos, cell: Cell) {
        self.cells[pos.row * self.width + pos.col] = cell;
    }

    pub fn is_free(&self, pos: GridPos) -> bool {
        self.get(pos) == Cell::Free
    }

    /// Neighboring cell in the given direction, or `None` at the grid edge.
    pub fn neighbor(&self, pos: GridPos, action: Action) -> Option<GridPos> {
        let (dr, dc) = action.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        if row < self.height && col < self.width {
            Some(GridPos::new(row, col))
        } else {
            None
        }
    }

    /// Iterate over all free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width)
                .map(move |col| GridPos::new(row, col))
                .filter(|&pos| self.is_free(pos))
        })
    }
}

/// A generated maze: the grid plus its designated start and goal cells and
/// the shortest-path length between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    grid: Grid,
    start: GridPos,
    goal: GridPos,
    shortest_length: usize,
}

impl Maze {
    pub(crate) fn new(grid: Grid, start: GridPos, goal: GridPos, shortest_length: usize) -> Self {
        Self {
            grid,
            start,
            goal,
            shortest_length,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> GridPos {
        self.start
    }

    pub fn goal(&self) -> GridPos {
        self.goal
    }

    /// Length in steps of the shortest path from start to goal, computed by
    /// BFS at generation time.
    pub fn shortest_length(&self) -> usize {
        self.shortest_length
    }

    /// Deterministic transition rule of the maze MDP: moving into a wall
    /// (or off the grid, which cannot happen with walled borders) is a
    /// no-op.
    pub fn next_location(&self, from: GridPos, action: Action) -> GridPos {
        match self.grid.neighbor(from, action) {
            Some(next) if self.grid.is_free(next) => next,
            _ => from,
        }
    }

    /// Render the maze with the agent drawn at `location`.
    ///
    /// Walls are `#`, free cells `.`, start `S`, goal `G`, the agent `@`.
    pub fn render(&self, location: Option<GridPos>) -> String {
        let mut out = String::with_capacity((self.grid.width + 1) * self.grid.height);
        for row in 0..self.grid.height {
            for col in 0..self.grid.width {
                let pos = GridPos::new(row, col);
                let ch = if location == Some(pos) {
                    '@'
                } else if pos == self.start {
                    'S'
                } else if pos == self.goal {
                    'G'
                } else if self.grid.is_free(pos) {
                    '.'
                } else {
                    '#'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
