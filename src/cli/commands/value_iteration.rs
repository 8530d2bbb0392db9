//! Value-iteration command - solve the maze exactly, then roll out

use anyhow::Result;
use clap::Parser;

use crate::{
    agents::ValueIterationAgent,
    cli::{
        MazeArgs,
        output::{print_banner, print_rollout},
    },
    env::{MazeEnv, ObservationMode},
    pipeline::greedy_rollout,
    ports::Policy,
};

#[derive(Parser, Debug)]
#[command(about = "Solve the maze with value iteration and roll out greedily")]
pub struct ValueIterationArgs {
    #[command(flatten)]
    pub maze: MazeArgs,

    /// Discount factor
    #[arg(long, default_value_t = 1.0)]
    pub gamma: f64,

    /// Convergence threshold on the largest per-sweep value change
    #[arg(long, default_value_t = 0.01)]
    pub threshold: f64,

    /// Step cap for the rollout
    #[arg(long, default_value_t = 1000)]
    pub max_steps: usize,
}

pub fn execute(args: ValueIterationArgs) -> Result<()> {
    let mut rng = args.maze.rng();
    let mut env = MazeEnv::new(args.maze.config(), ObservationMode::Tabular, &mut rng)?;
    print_banner(&env);

    let mut agent = ValueIterationAgent::solve(env.maze(), args.gamma, args.threshold);
    println!("value iteration converged after {} sweeps", agent.sweeps());

    let rollout = greedy_rollout(&mut env, &mut agent, args.max_steps);
    print_rollout(agent.name(), &rollout, env.maze().shortest_length());
    Ok(())
}
