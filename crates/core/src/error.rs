//! Error types for the Rollbook core crate.

use thiserror::Error;

/// Top-level error type for all Rollbook core operations.
#[derive(Debug, Error)]
pub enum RollbookError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("validation error: {0}")]
    Validation(String),
}

/// A convenience Result alias that defaults to [`RollbookError`].
pub type Result<T> = std::result::Result<T, RollbookError>;
