//! Observers for training pipelines
//!
//! Observers allow composable metrics collection during training without
//! coupling the training loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error::{Error, Result},
    pipeline::training::{EpisodeStats, TrainingResult},
    ports::EpisodeObserver,
};

/// Progress bar observer - shows training progress on the terminal.
pub struct ProgressObserver {
    progress_bar: ProgressBar,
}

impl ProgressObserver {
    pub fn new(episodes: usize) -> Result<Self> {
        let progress_bar = ProgressBar::new(episodes as u64);
        let style = ProgressStyle::with_template(
            "{bar:40.cyan/blue} {pos}/{len} episodes {msg}",
        )
        .map_err(|e| Error::ProgressBarTemplate {
            message: e.to_string(),
        })?;
        progress_bar.set_style(style);
        Ok(Self { progress_bar })
    }
}

impl EpisodeObserver for ProgressObserver {
    fn on_episode_end(&mut self, stats: &EpisodeStats) -> Result<()> {
        self.progress_bar.set_message(format!(
            "steps={} eps={:.3}",
            stats.steps, stats.epsilon
        ));
        self.progress_bar.inc(1);
        Ok(())
    }

    fn on_training_end(&mut self, result: &TrainingResult) -> Result<()> {
        self.progress_bar.finish_with_message(format!(
            "done, goal rate {:.1}%",
            result.goal_rate * 100.0
        ));
        Ok(())
    }
}

/// In-memory observer collecting the full episode series.
#[derive(Debug, Default)]
pub struct MetricsObserver {
    episodes: Vec<EpisodeStats>,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn episodes(&self) -> &[EpisodeStats] {
        &self.episodes
    }
}

impl EpisodeObserver for MetricsObserver {
    fn on_episode_end(&mut self, stats: &EpisodeStats) -> Result<()> {
        self.episodes.push(stats.clone());
        Ok(())
    }
}

/// Writes one JSON object per episode to a file, for later analysis with
/// the `curves` command.
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|source| Error::Io {
            operation: format!("create metrics file '{}'", path.as_ref().display()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl EpisodeObserver for JsonlObserver {
    fn on_episode_end(&mut self, stats: &EpisodeStats) -> Result<()> {
        serde_json::to_writer(&mut self.writer, stats)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn on_training_end(&mut self, _result: &TrainingResult) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
