//! Curves command - summarize a training metrics log
//!
//! Reads the JSONL file produced by the q-learning `--metrics` flag and
//! prints learning-curve summaries; optionally re-exports the series as CSV
//! for external plotting tools.

use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{
    error::Error,
    pipeline::EpisodeStats,
};

#[derive(Parser, Debug)]
#[command(about = "Summarize a JSONL training metrics file")]
pub struct CurvesArgs {
    /// Metrics file written by `q-learning --metrics`
    pub input: PathBuf,

    /// Trailing window for the end-of-training summary
    #[arg(long, default_value_t = 50)]
    pub window: usize,

    /// Also export the full series as CSV
    #[arg(long)]
    pub export_csv: Option<PathBuf>,
}

fn load_episodes(args: &CurvesArgs) -> Result<Vec<EpisodeStats>, Error> {
    let path = args.input.display().to_string();
    let contents = fs::read_to_string(&args.input).map_err(|source| Error::Io {
        operation: format!("read metrics file '{path}'"),
        source,
    })?;

    let mut episodes = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let stats: EpisodeStats =
            serde_json::from_str(line).map_err(|e| Error::MalformedMetrics {
                line: index + 1,
                message: e.to_string(),
            })?;
        episodes.push(stats);
    }
    if episodes.is_empty() {
        return Err(Error::EmptyMetrics { path });
    }
    Ok(episodes)
}

struct SeriesSummary {
    mean_steps: f64,
    min_steps: usize,
    max_steps: usize,
    mean_reward: f64,
    goal_rate: f64,
}

fn summarize(episodes: &[EpisodeStats]) -> SeriesSummary {
    let n = episodes.len() as f64;
    SeriesSummary {
        mean_steps: episodes.iter().map(|e| e.steps as f64).sum::<f64>() / n,
        min_steps: episodes.iter().map(|e| e.steps).min().unwrap_or(0),
        max_steps: episodes.iter().map(|e| e.steps).max().unwrap_or(0),
        mean_reward: episodes.iter().map(|e| e.total_reward).sum::<f64>() / n,
        goal_rate: episodes.iter().filter(|e| e.reached_goal).count() as f64 / n,
    }
}

fn print_summary(label: &str, summary: &SeriesSummary) {
    println!(
        "{label}: mean steps {:.1} (min {}, max {}), mean reward {:.1}, goal rate {:.1}%",
        summary.mean_steps,
        summary.min_steps,
        summary.max_steps,
        summary.mean_reward,
        summary.goal_rate * 100.0
    );
}

pub fn execute(args: CurvesArgs) -> Result<()> {
    let episodes = load_episodes(&args)?;

    println!("{} episodes loaded from {}", episodes.len(), args.input.display());
    print_summary("overall", &summarize(&episodes));

    let window = args.window.min(episodes.len());
    if window > 0 {
        let tail = &episodes[episodes.len() - window..];
        print_summary(&format!("last {window}"), &summarize(tail));
    }

    if let Some(csv_path) = &args.export_csv {
        let mut writer = csv::Writer::from_path(csv_path).map_err(Error::Csv)?;
        for stats in &episodes {
            writer.serialize(stats).map_err(Error::Csv)?;
        }
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush CSV export '{}'", csv_path.display()),
            source,
        })?;
        println!("exported CSV to {}", csv_path.display());
    }

    Ok(())
}
