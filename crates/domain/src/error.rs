//! Error types shared across scriptdeck.
//!
//! A failed run is not an error: it travels through the `Ok` channel as
//! [`RunOutcome::Failure`](crate::outcome::RunOutcome::Failure). The variants
//! here cover invariant violations and infrastructure failures only.

use thiserror::Error;

/// Top-level error type for scriptdeck operations.
#[derive(Debug, Error)]
pub enum ScriptDeckError {
    /// A domain invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A positional lookup fell outside the loaded catalog.
    #[error(transparent)]
    IndexOutOfRange(#[from] IndexOutOfRangeError),

    /// The script source could not deliver a catalog.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Domain validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Scripts must carry a non-empty name.
    #[error("script name must not be empty")]
    EmptyName,
}

/// A catalog index outside `[0, len)`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("index {index} is out of range for a catalog of {len} scripts")]
pub struct IndexOutOfRangeError {
    /// The requested index.
    pub index: usize,
    /// The catalog length at lookup time.
    pub len: usize,
}

/// A script source failed to deliver its catalog.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("failed to fetch scripts: {reason}")]
pub struct FetchError {
    /// Source-specific description of the failure.
    pub reason: String,
}

impl FetchError {
    /// Create a fetch error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
