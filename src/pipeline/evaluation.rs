//! Evaluation driver: one greedy rollout

use tracing::debug;

use crate::{env::MazeEnv, ports::Policy};

/// Outcome of one greedy rollout.
#[derive(Debug, Clone, PartialEq)]
pub struct Rollout {
    /// Steps taken; equals `max_steps` when the goal was not reached,
    /// which signals a non-convergent policy.
    pub steps: usize,

    /// Accumulated reward
    pub total_reward: f64,

    /// Whether the rollout terminated at the goal
    pub reached_goal: bool,
}

/// Roll out `policy` greedily on the environment's current maze for at most
/// `max_steps` steps, starting from a same-maze reset.
pub fn greedy_rollout(env: &mut MazeEnv, policy: &mut dyn Policy, max_steps: usize) -> Rollout {
    env.reset_same_maze();
    let mut state = env.location();

    let mut steps = max_steps;
    let mut total_reward = 0.0;
    let mut reached_goal = false;

    for step_index in 0..max_steps {
        let action = policy.select_greedy_action(state);
        let step = env.step(action);
        total_reward += step.reward;
        if step.terminated {
            steps = step_index + 1;
            reached_goal = true;
            break;
        }
        state = env.location();
    }

    debug!(
        policy = policy.name(),
        steps, total_reward, reached_goal, "rollout finished"
    );
    Rollout {
        steps,
        total_reward,
        reached_goal,
    }
}
