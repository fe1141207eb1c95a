//! Error taxonomy for the vigil workspace.
//!
//! Only [`VigilError::InvalidDeadline`] is a caller contract violation that
//! propagates out of an evaluation; probe timeouts and probe faults are
//! recovered locally and reported as data inside the aggregate.

/// Result alias used across the workspace.
pub type VigilResult<T> = Result<T, VigilError>;

#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    /// `evaluate` was called with a zero or negative deadline.
    #[error("invalid deadline: {millis} ms (must be positive)")]
    InvalidDeadline { millis: i64 },

    /// A probe was registered under an empty name.
    #[error("probe name must not be empty")]
    EmptyProbeName,

    /// A probe was registered under a name that is already taken.
    #[error("duplicate probe name: {name}")]
    DuplicateProbe { name: String },

    /// A shared lock was poisoned by a panicking writer.
    #[error("concurrency error: {0}")]
    ConcurrencyError(String),

    /// Configuration could not be parsed or failed validation.
    #[error("config error: {0}")]
    ConfigError(String),
}
