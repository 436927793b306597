//! Error types shared across the crate.

use thiserror::Error;

/// Errors produced while configuring a code or running data through it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Caller-supplied data is malformed (ragged matrix, wrong word length, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An operation required a generating matrix, but none has been configured
    #[error("No generating matrix has been configured")]
    NotConfigured,

    /// A syndrome has no entry in the coset leader weight table, so the word
    /// it belongs to cannot be decoded
    #[error("Syndrome {0} has no coset leader weight entry")]
    UnknownSyndrome(String),
}

/// Result type for linear code operations
pub type Result<T> = std::result::Result<T, Error>;
