//! Error types for the maze-rl crate

use thiserror::Error;

/// Main error type for the maze-rl crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(
        "no {width}x{height} maze with shortest path >= {min_shortest_length} found in {attempts} attempts"
    )]
    GenerationInfeasible {
        width: usize,
        height: usize,
        min_shortest_length: usize,
        attempts: usize,
    },

    #[error("goal cell is unreachable from start cell")]
    GoalUnreachable,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("metrics file '{path}' contains no episodes")]
    EmptyMetrics { path: String },

    #[error("malformed metrics record at line {line}: {message}")]
    MalformedMetrics { line: usize, message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
