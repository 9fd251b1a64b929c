//! Errors for everything around the rank transform. The transform itself is
//! total and never fails; only reading, generating and configuring input can.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A token in a value list was not an integer.
    #[error("invalid value {token:?} at position {position}")]
    InvalidValue { position: usize, token: String },

    /// Uniform generation was asked for an empty range.
    #[error("empty range: min {min} is larger than max {max}")]
    EmptyRange { min: i64, max: i64 },

    /// Parameters rejected by a random distribution.
    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),

    /// Bad command line arguments.
    #[error("usage error: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
