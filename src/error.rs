//! Error types.

use thiserror::Error;

/// Result type of fallible interval operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors during interval construction and conversion
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum Error {
    /// The lower bound exceeds the upper bound under the comparer
    #[error("invalid interval: lower bound exceeds upper bound")]
    InvalidInterval,

    /// A required piece of input is missing or malformed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The text of a bound could not be parsed
    #[error("invalid bound: {0}")]
    InvalidBound(String),
}
