//! Error types for the woodgrainer.

use thiserror::Error;

/// Errors that can occur while woodgraining a program.
#[derive(Error, Debug)]
pub enum WoodgrainError {
    /// The program already carries the woodgrain marker.
    #[error("G-code has already been woodgrained")]
    AlreadyProcessed,

    /// Invalid grain settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for woodgrain operations.
pub type Result<T> = std::result::Result<T, WoodgrainError>;
