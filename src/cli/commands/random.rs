//! Random command - roll out the uniform baseline

use anyhow::Result;
use clap::Parser;

use crate::{
    agents::RandomAgent,
    cli::{
        MazeArgs,
        output::{print_banner, print_rollout},
    },
    env::{MazeEnv, ObservationMode},
    pipeline::greedy_rollout,
    ports::Policy,
};

#[derive(Parser, Debug)]
#[command(about = "Run the uniform random baseline on a fresh maze")]
pub struct RandomArgs {
    #[command(flatten)]
    pub maze: MazeArgs,

    /// Step cap for the rollout
    #[arg(long, default_value_t = 1000)]
    pub max_steps: usize,
}

pub fn execute(args: RandomArgs) -> Result<()> {
    let mut rng = args.maze.rng();
    let mut env = MazeEnv::new(args.maze.config(), ObservationMode::Tabular, &mut rng)?;
    print_banner(&env);

    let mut agent = match args.maze.seed {
        Some(seed) => RandomAgent::with_seed(seed),
        None => RandomAgent::new(),
    };
    let rollout = greedy_rollout(&mut env, &mut agent, args.max_steps);
    print_rollout(agent.name(), &rollout, env.maze().shortest_length());
    Ok(())
}
