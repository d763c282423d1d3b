//! Error types for level generation and configuration

use std::path::PathBuf;

use thiserror::Error;

/// Failures of a generation attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("route walk did not reach the bottom row within {max_steps} steps")]
    RouteDidNotTerminate { max_steps: u32 },

    #[error("level generation failed after {attempts} attempts")]
    RetriesExhausted {
        attempts: u32,
        /// Failure of the final attempt
        #[source]
        last: Box<GenerationError>,
    },
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("walk weights must have a non-zero total that fits in a u32")]
    InvalidWeights,

    #[error("max_walk_steps must be at least 1")]
    ZeroSteps,

    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
}
