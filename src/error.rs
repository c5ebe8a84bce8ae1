use thiserror::Error;

#[derive(Error, Debug)]
pub enum FintrackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("No suggestion at position {index} (only {available} shown)")]
    NoSuchSuggestion { index: usize, available: usize },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FintrackError>;
