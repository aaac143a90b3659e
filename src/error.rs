//! Error types for the carousel

use thiserror::Error;

/// Errors surfaced by the carousel core and its browser glue
#[derive(Debug, Error)]
pub enum CarouselError {
    /// A drag event carried a NaN or infinite coordinate
    #[error("non-finite drag coordinate: {0}")]
    NonFiniteCoordinate(f64),

    /// The mount element's options could not be parsed
    #[error("invalid carousel options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// A browser object the carousel needs was missing
    #[error("dom error: {0}")]
    Dom(String),
}
