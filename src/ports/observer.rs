//! Observer port - training metrics collection
//!
//! Observers let the training loop stream per-episode statistics to
//! progress bars, in-memory collectors, or log files without coupling the
//! loop to any output format.

use crate::{
    error::Result,
    pipeline::training::{EpisodeStats, TrainingResult},
};

/// Receives per-episode statistics during Q-learning training.
pub trait EpisodeObserver {
    /// Called once at the end of every training episode.
    fn on_episode_end(&mut self, stats: &EpisodeStats) -> Result<()>;

    /// Called once after the last episode.
    ///
    /// The default implementation does nothing, suitable for observers that
    /// only care about individual episodes.
    fn on_training_end(&mut self, _result: &TrainingResult) -> Result<()> {
        Ok(())
    }
}
