//! The maze as a finite Markov Decision Process
//!
//! States are the free cells, actions the four compass moves, transitions
//! deterministic (walking into a wall is a no-op), and every step costs a
//! reward of -1, including the step that reaches the goal. The episode
//! terminates exactly when the agent's new location is the goal cell.

use rand::Rng;
use tracing::warn;

use crate::{
    error::Result,
    maze::{Maze, MazeConfig, generate},
    types::{Action, GridPos},
};

/// How observations are encoded for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationMode {
    /// Raw `(row, col)` state.
    Tabular,
    /// Three-plane array: wall occupancy, agent one-hot, goal one-hot.
    Tensor,
}

/// Observation returned by `reset`/`step`, in the encoding chosen at
/// construction. Both encodings describe the same canonical state.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    Tabular(GridPos),
    Tensor(TensorObservation),
}

impl Observation {
    /// The canonical agent location, regardless of encoding.
    pub fn location(&self) -> GridPos {
        match self {
            Observation::Tabular(pos) => *pos,
            Observation::Tensor(tensor) => tensor.agent,
        }
    }
}

/// Multi-plane observation encoding, row-major `f32` planes.
///
/// Plane 0 is wall occupancy, plane 1 the agent location one-hot, plane 2
/// the goal location one-hot. Derived on demand from the canonical state;
/// never stored by the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorObservation {
    width: usize,
    height: usize,
    agent: GridPos,
    data: Vec<f32>,
}

impl TensorObservation {
    pub const PLANES: usize = 3;

    fn from_maze(maze: &Maze, agent: GridPos) -> Self {
        let (width, height) = (maze.grid().width(), maze.grid().height());
        let mut data = vec![0.0f32; Self::PLANES * height * width];
        for row in 0..height {
            for col in 0..width {
                if !maze.grid().is_free(GridPos::new(row, col)) {
                    data[row * width + col] = 1.0;
                }
            }
        }
        data[height * width + agent.row * width + agent.col] = 1.0;
        data[2 * height * width + maze.goal().row * width + maze.goal().col] = 1.0;
        Self {
            width,
            height,
            agent,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, plane: usize, row: usize, col: usize) -> f32 {
        self.data[plane * self.height * self.width + row * self.width + col]
    }
}

/// Result of one environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub observation: Observation,
    pub reward: f64,
    pub terminated: bool,
}

/// Episodic maze environment.
///
/// Owns the maze it was constructed or reset with; agents and solvers only
/// ever borrow it. Episode state is the canonical agent location plus a
/// terminated flag.
#[derive(Debug)]
pub struct MazeEnv {
    config: MazeConfig,
    mode: ObservationMode,
    maze: Maze,
    location: GridPos,
    terminated: bool,
}

impl MazeEnv {
    /// Generate an initial maze from `config` and start an episode.
    pub fn new<R: Rng>(config: MazeConfig, mode: ObservationMode, rng: &mut R) -> Result<Self> {
        let maze = generate(&config, rng)?;
        let location = maze.start();
        Ok(Self {
            config,
            mode,
            maze,
            location,
            terminated: false,
        })
    }

    /// Wrap an existing maze. Useful for tests and for replaying a fixed
    /// maze across solvers.
    pub fn from_maze(maze: Maze, mode: ObservationMode) -> Self {
        let location = maze.start();
        Self {
            config: MazeConfig::default(),
            mode,
            maze,
            location,
            terminated: false,
        }
    }

    /// Discard the current maze, generate a fresh one, and reset the
    /// episode.
    pub fn reset_new_maze<R: Rng>(&mut self, rng: &mut R) -> Result<Observation> {
        self.maze = generate(&self.config, rng)?;
        Ok(self.reset_same_maze())
    }

    /// Reset the episode on the existing maze: agent back to start,
    /// terminated flag cleared.
    pub fn reset_same_maze(&mut self) -> Observation {
        self.location = self.maze.start();
        self.terminated = false;
        self.observe()
    }

    /// Apply one action.
    ///
    /// Calling this after the episode has terminated is a caller contract
    /// violation: it is logged as a warning and answered with the unchanged
    /// observation, reward `0.0`, and `terminated = true`. The zero
    /// post-terminal reward is what keeps the absorbing goal state's value
    /// pinned at 0.
    pub fn step(&mut self, action: Action) -> Step {
        if self.terminated {
            warn!("step() called after the episode already terminated");
            return Step {
                observation: self.observe(),
                reward: 0.0,
                terminated: true,
            };
        }

        self.location = self.maze.next_location(self.location, action);
        if self.location == self.maze.goal() {
            self.terminated = true;
        }

        Step {
            observation: self.observe(),
            reward: -1.0,
            terminated: self.terminated,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Canonical agent location. Solvers and the training loop read this
    /// instead of decoding observations.
    pub fn location(&self) -> GridPos {
        self.location
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn observation_mode(&self) -> ObservationMode {
        self.mode
    }

    fn observe(&self) -> Observation {
        match self.mode {
            ObservationMode::Tabular => Observation::Tabular(self.location),
            ObservationMode::Tensor => {
                Observation::Tensor(TensorObservation::from_maze(&self.maze, self.location))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Cell, Grid};

    // 7x3 corridor: S . . . G along row 1, shortest path 4.
    fn corridor() -> Maze {
        let mut grid = Grid::filled_with_walls(7, 3);
        for col in 1..6 {
            grid.set(GridPos::new(1, col), Cell::Free);
        }
        Maze::new(grid, GridPos::new(1, 1), GridPos::new(1, 5), 4)
    }

    #[test]
    fn wall_collision_is_a_no_op_with_step_cost() {
        let mut env = MazeEnv::from_maze(corridor(), ObservationMode::Tabular);
        env.reset_same_maze();
        let step = env.step(Action::Up);
        assert_eq!(env.location(), GridPos::new(1, 1));
        assert_eq!(step.reward, -1.0);
        assert!(!step.terminated);
    }

    #[test]
    fn terminating_step_still_costs_one() {
        let mut env = MazeEnv::from_maze(corridor(), ObservationMode::Tabular);
        env.reset_same_maze();
        for _ in 0..3 {
            let step = env.step(Action::Right);
            assert!(!step.terminated);
            assert_eq!(step.reward, -1.0);
        }
        let last = env.step(Action::Right);
        assert!(last.terminated);
        assert_eq!(last.reward, -1.0);
        assert_eq!(env.location(), GridPos::new(1, 5));
    }

    #[test]
    fn post_terminal_step_is_a_signaled_no_op() {
        let mut env = MazeEnv::from_maze(corridor(), ObservationMode::Tabular);
        env.reset_same_maze();
        for _ in 0..4 {
            env.step(Action::Right);
        }
        assert!(env.is_terminated());

        let violation = env.step(Action::Left);
        assert_eq!(violation.reward, 0.0);
        assert!(violation.terminated);
        assert_eq!(env.location(), GridPos::new(1, 5));
    }

    #[test]
    fn transitions_are_deterministic() {
        let maze = corridor();
        let mut env_a = MazeEnv::from_maze(maze.clone(), ObservationMode::Tabular);
        let mut env_b = MazeEnv::from_maze(maze, ObservationMode::Tabular);
        env_a.reset_same_maze();
        env_b.reset_same_maze();
        for action in [Action::Right, Action::Up, Action::Right, Action::Down] {
            assert_eq!(env_a.step(action), env_b.step(action));
        }
    }

    #[test]
    fn reset_same_maze_restores_the_start() {
        let mut env = MazeEnv::from_maze(corridor(), ObservationMode::Tabular);
        env.step(Action::Right);
        env.step(Action::Right);
        let obs = env.reset_same_maze();
        assert_eq!(obs.location(), GridPos::new(1, 1));
        assert!(!env.is_terminated());
    }

    #[test]
    fn tensor_observation_tracks_the_agent() {
        let mut env = MazeEnv::from_maze(corridor(), ObservationMode::Tensor);
        let obs = env.reset_same_maze();
        let Observation::Tensor(tensor) = obs else {
            panic!("expected tensor observation");
        };
        assert_eq!(tensor.get(0, 0, 0), 1.0); // border wall
        assert_eq!(tensor.get(0, 1, 1), 0.0); // free cell
        assert_eq!(tensor.get(1, 1, 1), 1.0); // agent at start
        assert_eq!(tensor.get(2, 1, 5), 1.0); // goal plane

        let step = env.step(Action::Right);
        let Observation::Tensor(tensor) = step.observation else {
            panic!("expected tensor observation");
        };
        assert_eq!(tensor.get(1, 1, 1), 0.0);
        assert_eq!(tensor.get(1, 1, 2), 1.0);
    }

    #[test]
    fn both_encodings_agree_on_the_canonical_state() {
        let maze = corridor();
        let mut tabular = MazeEnv::from_maze(maze.clone(), ObservationMode::Tabular);
        let mut tensor = MazeEnv::from_maze(maze, ObservationMode::Tensor);
        tabular.reset_same_maze();
        tensor.reset_same_maze();
        for action in [Action::Right, Action::Down, Action::Right, Action::Right] {
            let a = tabular.step(action);
            let b = tensor.step(action);
            assert_eq!(a.observation.location(), b.observation.location());
            assert_eq!(a.reward, b.reward);
            assert_eq!(a.terminated, b.terminated);
        }
    }
}
