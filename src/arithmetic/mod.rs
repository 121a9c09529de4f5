// ============================================================================
// Arithmetic Module
// Exact decimal arithmetic on digit strings
// ============================================================================
//
// This module provides:
// - DigitStr / Sign: validated sign + magnitude view of a digit string
// - multiply_by_digit: scale a digit string by a single signed digit
// - add: carry-propagating addition with a positional offset
// - multiply_strings: schoolbook long multiplication of two digit strings
// - ArithmeticError: error types for the operations above
//
// Design principles:
// - Unbounded magnitudes, carry-bounded single-digit steps (no overflow)
// - Every result is written through a DynamicString
// - A failed call leaves its result buffer untouched

mod addition;
mod digit_string;
mod errors;
mod multiply;

pub use addition::add;
pub use digit_string::{is_valid_digit_string, DigitStr, Sign};
pub use errors::{ArithmeticError, ArithmeticResult};
pub use multiply::{multiply_by_digit, multiply_strings};

pub(crate) use addition::add_with;
pub(crate) use multiply::{multiply_by_digit_with, multiply_strings_with};
