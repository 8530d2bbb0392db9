//! Console output helpers shared by the run commands

use crate::{env::MazeEnv, pipeline::Rollout, types::Action};

/// Print the maze and its key facts before a run, mirroring the classic
/// driver banner.
pub fn print_banner(env: &MazeEnv) {
    let maze = env.maze();
    println!("{maze}");
    println!("num_actions: {}", Action::COUNT);
    println!("length of shortest path: {}", maze.shortest_length());
    println!("starting point: {}", maze.start());
    println!("goal: {}", maze.goal());
}

/// Print the outcome of a greedy rollout.
pub fn print_rollout(name: &str, rollout: &Rollout, shortest_length: usize) {
    if rollout.reached_goal {
        println!(
            "{name}: reached the goal in {} steps (shortest {}), total reward {}",
            rollout.steps, shortest_length, rollout.total_reward
        );
    } else {
        println!(
            "{name}: step cap of {} hit without reaching the goal (policy has not converged)",
            rollout.steps
        );
    }
}
