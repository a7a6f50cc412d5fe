// File: crates/chart-dashboard/src/error.rs
// Summary: Load-time error taxonomy; the Display text is what the error page shows.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to fetch data: {0}")]
    Status(u16),
    #[error("Failed to fetch data: {0}")]
    Transport(String),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid data format: expected an array")]
    NotAnArray,
    #[error("Invalid chart format at index {0}")]
    InvalidChart(usize),
    #[error("Invalid data point at index {index}, point {point}")]
    InvalidPoint { index: usize, point: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The resource could not be retrieved.
    Transport,
    /// The resource was retrieved but is not a valid chart list.
    Format,
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::Status(_) | LoadError::Transport(_) => ErrorKind::Transport,
            _ => ErrorKind::Format,
        }
    }
}
