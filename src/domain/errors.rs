//! Domain errors. Used by ports and adapters at the I/O edges.
//!
//! The scoring services never return these; they are total over their input.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown gift key: {0}")]
    UnknownGift(String),

    #[error("Score source error: {0}")]
    ScoreSource(String),

    #[error("Ministry catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    /// Interactive prompt was cancelled or failed.
    #[error("Input error: {0}")]
    Input(String),
}
