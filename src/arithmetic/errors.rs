// ============================================================================
// Arithmetic Errors
// Error types for digit-string arithmetic operations
// ============================================================================

use crate::buffer::{BufferError, ErrorKind};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during digit-string arithmetic.
///
/// Every operation that returns one of these leaves its result buffer as it
/// was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithmeticError {
    /// Operand is not a digit string; `position` is the first offending byte
    /// (equal to the operand length when it has no digits at all)
    InvalidOperand { position: usize },
    /// Single-digit multiplier outside [-9, 9]
    DigitOutOfRange { digit: i8 },
    /// Addition offset does not fall inside the first operand
    OffsetOutOfRange { offset: usize, len: usize },
    /// Operand longer than the configured limit
    OperandTooLong { len: usize, max: usize },
    /// Writing the result buffer failed
    Buffer(BufferError),
}

impl ArithmeticError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArithmeticError::InvalidOperand { .. } => ErrorKind::InvalidOperand,
            ArithmeticError::DigitOutOfRange { .. }
            | ArithmeticError::OffsetOutOfRange { .. }
            | ArithmeticError::OperandTooLong { .. } => ErrorKind::InvalidArgument,
            ArithmeticError::Buffer(err) => err.kind(),
        }
    }
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::InvalidOperand { position } => {
                write!(f, "invalid operand: not a digit string at byte {}", position)
            },
            ArithmeticError::DigitOutOfRange { digit } => {
                write!(f, "digit {} is outside the range -9..=9", digit)
            },
            ArithmeticError::OffsetOutOfRange { offset, len } => write!(
                f,
                "offset {} exceeds operand of length {}",
                offset, len
            ),
            ArithmeticError::OperandTooLong { len, max } => write!(
                f,
                "operand of length {} exceeds the limit of {}",
                len, max
            ),
            ArithmeticError::Buffer(err) => write!(f, "buffer error: {}", err),
        }
    }
}

impl std::error::Error for ArithmeticError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArithmeticError::Buffer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BufferError> for ArithmeticError {
    fn from(err: BufferError) -> Self {
        ArithmeticError::Buffer(err)
    }
}

/// Result type alias for arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
