use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a game configuration can be rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("grid size {actual} is too small, need at least {minimum}")]
    GridTooSmall { actual: u16, minimum: u16 },

    #[error("grid size {actual} is too large, at most {maximum} is supported")]
    GridTooLarge { actual: u16, maximum: u16 },

    #[error("initial snake length must be 2 or 3, got {0}")]
    InitialLength(usize),

    #[error("{name} must be greater than zero")]
    ZeroInterval { name: &'static str },

    #[error("power-up spawn chance must be within 0.0..=1.0, got {0}")]
    SpawnChance(f64),
}

/// Failures of the high-score persistence collaborator.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("high score file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("high score file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Top-level errors surfaced by the terminal binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
