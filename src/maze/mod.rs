//! Maze representation and procedural generation
//!
//! A [`Maze`] is a grid of `Wall`/`Free` cells plus a start cell, a goal
//! cell, and the precomputed length of the shortest path between them. The
//! generator carves *perfect* mazes: the free cells form a spanning tree,
//! so every pair of free cells is connected by exactly one simple path.

pub mod generator;
pub mod grid;

pub use generator::{MazeConfig, generate};
pub use grid::{Cell, Grid, Maze};
