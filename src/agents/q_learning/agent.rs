//! Q-learning agent and its training loop

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::info;

use crate::{
    agents::q_learning::q_table::QTable,
    env::MazeEnv,
    epsilon::EpsilonProfile,
    error::{Error, Result},
    pipeline::training::{EpisodeStats, TrainingResult},
    ports::{EpisodeObserver, Policy},
    types::{Action, GridPos},
};

/// Tabular Q-learning agent (off-policy TD control).
///
/// Owns its Q-table exclusively: the table is zero-initialized, mutated
/// only inside [`train`](QLearningAgent::train), and read without mutation
/// by greedy selection.
#[derive(Debug)]
pub struct QLearningAgent {
    q_table: QTable,
    profile: EpsilonProfile,
    epsilon: f64,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl QLearningAgent {
    /// Create an agent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `gamma` or `alpha`
    /// falls outside `(0, 1]`.
    pub fn new(profile: EpsilonProfile, gamma: f64, alpha: f64) -> Result<Self> {
        for (name, value) in [("gamma", gamma), ("alpha", alpha)] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} {value} must be within (0, 1]"),
                });
            }
        }
        Ok(Self {
            q_table: QTable::new(alpha, gamma),
            epsilon: profile.epsilon(0),
            profile,
            rng: StdRng::from_rng(&mut rand::rng()),
            rng_seed: None,
        })
    }

    /// Seed the behavior policy's RNG for reproducible training runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Exploration rate currently in effect.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Epsilon-greedy behavior policy: explore uniformly with probability
    /// epsilon, otherwise exploit the Q-table.
    fn select_action_epsilon_greedy(&mut self, state: GridPos) -> Action {
        if self.rng.random::<f64>() < self.epsilon {
            *Action::ALL.choose(&mut self.rng).unwrap_or(&Action::Up)
        } else {
            self.q_table.greedy_action(state)
        }
    }

    /// Train on the environment's current maze for `episodes` episodes of
    /// at most `max_steps` steps each.
    ///
    /// Every episode resets the same maze, follows the epsilon-greedy
    /// behavior policy with the rate taken from the profile at that episode
    /// index, and applies the Q-learning update after each step. Episodes
    /// that hit the step cap without reaching the goal report
    /// `steps == max_steps`.
    pub fn train(
        &mut self,
        env: &mut MazeEnv,
        episodes: usize,
        max_steps: usize,
        observers: &mut [Box<dyn EpisodeObserver>],
    ) -> Result<TrainingResult> {
        let mut goal_reached = 0usize;
        let mut total_steps = 0usize;
        let mut total_reward = 0.0f64;
        let mut best_steps: Option<usize> = None;

        for episode in 0..episodes {
            self.epsilon = self.profile.epsilon(episode);
            env.reset_same_maze();
            let mut state = env.location();

            let mut steps = max_steps;
            let mut episode_reward = 0.0;
            let mut reached = false;

            for step_index in 0..max_steps {
                let action = self.select_action_epsilon_greedy(state);
                let step = env.step(action);
                let next_state = env.location();
                self.q_table
                    .q_learning_update(state, action, step.reward, next_state, step.terminated);
                episode_reward += step.reward;
                state = next_state;
                if step.terminated {
                    steps = step_index + 1;
                    reached = true;
                    break;
                }
            }

            if reached {
                goal_reached += 1;
                best_steps = Some(best_steps.map_or(steps, |b| b.min(steps)));
            }
            total_steps += steps;
            total_reward += episode_reward;

            let stats = EpisodeStats {
                episode,
                steps,
                total_reward: episode_reward,
                epsilon: self.epsilon,
                reached_goal: reached,
            };
            for observer in observers.iter_mut() {
                observer.on_episode_end(&stats)?;
            }
        }

        let result = TrainingResult::new(
            episodes,
            goal_reached,
            total_steps,
            total_reward,
            best_steps,
            self.epsilon,
        );
        for observer in observers.iter_mut() {
            observer.on_training_end(&result)?;
        }
        info!(
            episodes,
            goal_reached,
            q_entries = self.q_table.len(),
            "training finished"
        );
        Ok(result)
    }
}

impl Policy for QLearningAgent {
    fn select_greedy_action(&mut self, state: GridPos) -> Action {
        self.q_table.greedy_action(state)
    }

    fn name(&self) -> &str {
        "q-learning"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        env::ObservationMode,
        maze::{Cell, Grid, Maze},
    };

    fn corridor() -> Maze {
        let mut grid = Grid::filled_with_walls(7, 3);
        for col in 1..6 {
            grid.set(GridPos::new(1, col), Cell::Free);
        }
        Maze::new(grid, GridPos::new(1, 1), GridPos::new(1, 5), 4)
    }

    #[test]
    fn rejects_out_of_range_hyperparameters() {
        let profile = EpsilonProfile::constant(0.5).unwrap();
        assert!(QLearningAgent::new(profile, 0.0, 0.2).is_err());
        assert!(QLearningAgent::new(profile, 1.0, 1.5).is_err());
        assert!(QLearningAgent::new(profile, 1.0, 0.2).is_ok());
    }

    #[test]
    fn learns_the_corridor() {
        let mut env = MazeEnv::from_maze(corridor(), ObservationMode::Tabular);
        let profile = EpsilonProfile::new(1.0, 0.0, 0.0, 150.0).unwrap();
        let mut agent = QLearningAgent::new(profile, 1.0, 0.2)
            .unwrap()
            .with_seed(3);

        agent.train(&mut env, 300, 100, &mut []).unwrap();

        // Greedy policy must now walk straight to the goal.
        env.reset_same_maze();
        let mut steps = 0;
        for _ in 0..100 {
            let action = agent.select_greedy_action(env.location());
            let step = env.step(action);
            steps += 1;
            if step.terminated {
                break;
            }
        }
        assert_eq!(steps, env.maze().shortest_length());
    }

    #[test]
    fn training_is_reproducible_with_a_seed() {
        let run = |seed| {
            let mut env = MazeEnv::from_maze(corridor(), ObservationMode::Tabular);
            let profile = EpsilonProfile::new(1.0, 0.1, 0.0, 50.0).unwrap();
            let mut agent = QLearningAgent::new(profile, 1.0, 0.2)
                .unwrap()
                .with_seed(seed);
            agent.train(&mut env, 100, 50, &mut []).unwrap()
        };
        let a = run(17);
        let b = run(17);
        assert_eq!(a.total_steps, b.total_steps);
        assert_eq!(a.goal_reached, b.goal_reached);
    }

    #[test]
    fn result_reports_step_cap_for_unfinished_episodes() {
        let mut env = MazeEnv::from_maze(corridor(), ObservationMode::Tabular);
        let profile = EpsilonProfile::constant(1.0).unwrap();
        let mut agent = QLearningAgent::new(profile, 1.0, 0.2)
            .unwrap()
            .with_seed(5);
        // One step per episode cannot reach a goal four steps away.
        let result = agent.train(&mut env, 10, 1, &mut []).unwrap();
        assert_eq!(result.goal_reached, 0);
        assert_eq!(result.total_steps, 10);
    }
}
