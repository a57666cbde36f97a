//! Error types for the trip planner.

use thiserror::Error;

/// Failure to obtain a point list from a file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read points file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse points file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid point #{index}: {reason}")]
    Invalid { index: usize, reason: String },
}

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid trip budget: {0}")]
    InvalidBudget(String),

    #[error("invalid tour permutation: {0}")]
    InvalidPermutation(String),

    #[error("distance matrix has {actual} rows, expected {expected}")]
    MatrixSizeMismatch { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
