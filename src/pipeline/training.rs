//! Training statistics types

use serde::{Deserialize, Serialize};

/// Statistics of a single training episode, streamed to observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    /// Episode index, starting at 0
    pub episode: usize,

    /// Steps taken; equals the step cap when the goal was not reached
    pub steps: usize,

    /// Sum of rewards over the episode
    pub total_reward: f64,

    /// Exploration rate in effect for this episode
    pub epsilon: f64,

    /// Whether the episode ended at the goal
    pub reached_goal: bool,
}

/// Summary of a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Episodes trained
    pub episodes: usize,

    /// Episodes that reached the goal
    pub goal_reached: usize,

    /// Fraction of episodes that reached the goal
    pub goal_rate: f64,

    /// Steps summed over all episodes
    pub total_steps: usize,

    /// Mean steps per episode
    pub mean_steps: f64,

    /// Mean reward per episode
    pub mean_reward: f64,

    /// Fewest steps of any goal-reaching episode
    pub best_steps: Option<usize>,

    /// Exploration rate after the last episode
    pub final_epsilon: f64,
}

impl TrainingResult {
    pub fn new(
        episodes: usize,
        goal_reached: usize,
        total_steps: usize,
        total_reward: f64,
        best_steps: Option<usize>,
        final_epsilon: f64,
    ) -> Self {
        let denominator = episodes.max(1) as f64;
        Self {
            episodes,
            goal_reached,
            goal_rate: goal_reached as f64 / denominator,
            total_steps,
            mean_steps: total_steps as f64 / denominator,
            mean_reward: total_reward / denominator,
            best_steps,
            final_epsilon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_divide_by_episode_count() {
        let result = TrainingResult::new(200, 150, 4000, -4000.0, Some(12), 0.1);
        assert_eq!(result.goal_rate, 0.75);
        assert_eq!(result.mean_steps, 20.0);
        assert_eq!(result.mean_reward, -20.0);
    }

    #[test]
    fn zero_episodes_do_not_divide_by_zero() {
        let result = TrainingResult::new(0, 0, 0, 0.0, None, 1.0);
        assert_eq!(result.goal_rate, 0.0);
        assert_eq!(result.mean_steps, 0.0);
    }
}
