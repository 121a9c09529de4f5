// ============================================================================
// Buffer Errors
// Error types for growable buffer operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coarse classification shared by every error in this crate.
///
/// Callers that only care about the category of a failure (rather than the
/// exact position or value involved) can match on this instead of the
/// individual error enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// Storage could not be grown
    Allocation,
    /// A position lies outside the writable range
    OutOfBounds,
    /// A numeric argument is outside its accepted range
    InvalidArgument,
    /// A supplied string is not a valid digit string
    InvalidOperand,
}

/// Errors that can occur while mutating a [`DynamicString`](super::DynamicString).
///
/// A buffer that reports one of these is left exactly as it was before the
/// call: content, length and capacity are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BufferError {
    /// The allocator refused to provide `requested` bytes of storage
    AllocationFailed {
        /// Total capacity that was asked for
        requested: usize,
    },
    /// Write position is past the end of the meaningful content
    OutOfBounds {
        /// Position that was written to
        pos: usize,
        /// Length of the buffer at the time of the call
        length: usize,
    },
    /// Inserting an empty text is rejected rather than silently ignored
    EmptyInsert,
}

impl BufferError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BufferError::AllocationFailed { .. } => ErrorKind::Allocation,
            BufferError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            BufferError::EmptyInsert => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::AllocationFailed { requested } => {
                write!(f, "allocation failed: could not grow buffer to {} bytes", requested)
            },
            BufferError::OutOfBounds { pos, length } => write!(
                f,
                "position {} is out of bounds for buffer of length {}",
                pos, length
            ),
            BufferError::EmptyInsert => write!(f, "cannot insert an empty text"),
        }
    }
}

impl std::error::Error for BufferError {}

/// Result type alias for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;
