//! Error types for rapid-pagerank

use thiserror::Error;

/// Result type alias using RankError
pub type Result<T> = std::result::Result<T, RankError>;

/// Main error type for ranking runs and corpus loading
#[derive(Debug, Error)]
pub enum RankError {
    #[error("Graph has no pages")]
    EmptyGraph,

    #[error("Damping factor must lie strictly between 0 and 1, got {0}")]
    InvalidDampingFactor(f64),

    #[error("Sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),

    #[error("Convergence tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    #[error("Page not found in graph: {0}")]
    UnknownPage(String),

    #[error("PageRank did not converge after {iterations} iterations (last delta {delta})")]
    NotConverged { iterations: usize, delta: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Checks that a damping factor lies in the open interval (0, 1).
pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidDampingFactor(damping))
    }
}
