//! Error types for linkdeque

use std::fmt;

/// Result type alias for deque operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for deque operations
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Index resolves outside `[0, len)` after negative-index normalization
    OutOfRange {
        /// The signed index as requested by the caller
        index: i128,
        /// Deque length at the time of the call
        len: usize,
    },

    /// The deque held no elements at call time
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { index, len } => {
                write!(f, "index {} out of range for deque of length {}", index, len)
            }
            Error::Empty => write!(f, "deque is empty"),
        }
    }
}

impl std::error::Error for Error {}
