//! Q-learning command - train on a fresh maze, then roll out greedily

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    agents::QLearningAgent,
    cli::{
        MazeArgs,
        output::{print_banner, print_rollout},
    },
    env::{MazeEnv, ObservationMode},
    epsilon::EpsilonProfile,
    pipeline::{JsonlObserver, ProgressObserver, greedy_rollout},
    ports::{EpisodeObserver, Policy},
};

#[derive(Parser, Debug)]
#[command(about = "Train a tabular Q-learning agent and roll out greedily")]
pub struct QLearningArgs {
    #[command(flatten)]
    pub maze: MazeArgs,

    /// Discount factor
    #[arg(long, default_value_t = 1.0)]
    pub gamma: f64,

    /// Learning rate
    #[arg(long, default_value_t = 0.2)]
    pub alpha: f64,

    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 300)]
    pub episodes: usize,

    /// Step cap per episode and for the final rollout
    #[arg(long, default_value_t = 1000)]
    pub max_steps: usize,

    /// Exploration rate at the start of training
    #[arg(long, default_value_t = 1.0)]
    pub epsilon_initial: f64,

    /// Exploration rate after decay
    #[arg(long, default_value_t = 1.0)]
    pub epsilon_final: f64,

    /// Episode at which epsilon starts decaying
    #[arg(long, default_value_t = 0.0)]
    pub decay_start: f64,

    /// Episode by which epsilon has fully decayed
    #[arg(long, default_value_t = 0.0)]
    pub decay_end: f64,

    /// Write per-episode metrics to this JSONL file
    #[arg(long)]
    pub metrics: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: QLearningArgs) -> Result<()> {
    let mut rng = args.maze.rng();
    let mut env = MazeEnv::new(args.maze.config(), ObservationMode::Tabular, &mut rng)?;
    print_banner(&env);

    let profile = EpsilonProfile::new(
        args.epsilon_initial,
        args.epsilon_final,
        args.decay_start,
        args.decay_end,
    )?;
    let mut agent = QLearningAgent::new(profile, args.gamma, args.alpha)?;
    if let Some(seed) = args.maze.seed {
        agent = agent.with_seed(seed);
    }

    let mut observers: Vec<Box<dyn EpisodeObserver>> = Vec::new();
    if !args.quiet {
        observers.push(Box::new(ProgressObserver::new(args.episodes)?));
    }
    if let Some(path) = &args.metrics {
        observers.push(Box::new(JsonlObserver::create(path)?));
    }

    let result = agent.train(&mut env, args.episodes, args.max_steps, &mut observers)?;
    println!(
        "trained {} episodes: goal rate {:.1}%, mean steps {:.1}, best {}",
        result.episodes,
        result.goal_rate * 100.0,
        result.mean_steps,
        result
            .best_steps
            .map_or_else(|| "-".to_string(), |s| s.to_string()),
    );

    let rollout = greedy_rollout(&mut env, &mut agent, args.max_steps);
    print_rollout(agent.name(), &rollout, env.maze().shortest_length());
    Ok(())
}
