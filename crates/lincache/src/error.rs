//! Error types for lincache

use std::fmt;

/// Result type alias for lincache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache and container operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Dereferencing or stepping a position that does not refer to a live node
    InvalidIterator,

    /// Direct access (`at`) on a key that is not present
    KeyNotFound,

    /// Removal given the end sentinel or an invalidated position
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidIterator => write!(f, "Invalid iterator: position has no backing node"),
            Error::KeyNotFound => write!(f, "Key not found"),
            Error::OutOfRange => write!(f, "Position out of range"),
        }
    }
}

impl std::error::Error for Error {}
