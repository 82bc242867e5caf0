//! Figurelab CLI — error types.

use figurelab_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the generator.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The engine or one of its stores failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
