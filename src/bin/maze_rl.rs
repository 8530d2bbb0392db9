//! maze-rl CLI - maze MDP solvers and baselines
//!
//! One subcommand per run mode: `random`, `value-iteration`, `q-learning`,
//! and `curves` for metrics-log analysis.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use maze_rl::cli::commands::{curves, q_learning, random, value_iteration};

#[derive(Parser)]
#[command(name = "maze-rl")]
#[command(version, about = "Gridworld maze MDP solvers and baselines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll out the uniform random baseline
    Random(random::RandomArgs),

    /// Solve the maze exactly with value iteration
    ValueIteration(value_iteration::ValueIterationArgs),

    /// Train a tabular Q-learning agent
    QLearning(q_learning::QLearningArgs),

    /// Summarize a training metrics file
    Curves(curves::CurvesArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Random(args) => random::execute(args),
        Commands::ValueIteration(args) => value_iteration::execute(args),
        Commands::QLearning(args) => q_learning::execute(args),
        Commands::Curves(args) => curves::execute(args),
    }
}
