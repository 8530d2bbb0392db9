//! Training and evaluation drivers

pub mod evaluation;
pub mod observers;
pub mod training;

pub use evaluation::{Rollout, greedy_rollout};
pub use observers::{JsonlObserver, MetricsObserver, ProgressObserver};
pub use training::{EpisodeStats, TrainingResult};
