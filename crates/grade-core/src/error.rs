use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid score: {0:?} is not a number")]
    InvalidScore(String),

    #[error("Score must be finite, got {0}")]
    NonFiniteScore(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
