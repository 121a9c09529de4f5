// ============================================================================
// Decimal Strings Library
// Exact unbounded-precision decimal arithmetic on digit strings
// ============================================================================

//! # Decimal Strings
//!
//! Exact integer arithmetic on decimal digit strings of any length, written
//! through a growable, exclusively owned character buffer.
//!
//! ## Features
//!
//! - **Growable buffer** (`DynamicString`) with exact-fit growth and a
//!   clean-failure guarantee on every mutation
//! - **Schoolbook long multiplication** built from single-digit partial
//!   products and carry-propagating offset addition
//! - **Signed operands** with the product sign resolved up front and a
//!   canonical `"0"` for zero
//! - **Structured errors** for every rejected call, plus `tracing` diagnostics
//! - **Observable engine** that numbers calls and reports them to a
//!   pluggable event handler
//!
//! ## Example
//!
//! ```rust
//! use decimal_strings::prelude::*;
//! use std::sync::Arc;
//!
//! let engine = DecimalEngine::new(EngineConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
//! let mut product = engine.new_buffer(None).unwrap();
//!
//! engine
//!     .multiply(
//!         &mut product,
//!         "9999999999999999999999999999999999",
//!         "9999999999999999999999999999999999",
//!     )
//!     .unwrap();
//! assert_eq!(
//!     product,
//!     "99999999999999999999999999999999980000000000000000000000000000000001"
//! );
//!
//! // The free functions work without an engine
//! multiply_strings(&mut product, "-123", "55").unwrap();
//! assert_eq!(product, "-6765");
//! ```

pub mod arithmetic;
pub mod buffer;
pub mod config;
pub mod engine;
pub mod interfaces;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::arithmetic::{
        add, is_valid_digit_string, multiply_by_digit, multiply_strings, ArithmeticError,
        ArithmeticResult, DigitStr, Sign,
    };
    pub use crate::buffer::{BufferError, BufferResult, DynamicString, ErrorKind};
    pub use crate::config::EngineConfig;
    pub use crate::engine::DecimalEngine;
    pub use crate::interfaces::{
        ArithmeticEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, Operation,
        RecordingEventHandler,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_long_multiplication() {
        let handler = Arc::new(RecordingEventHandler::new());
        let engine = DecimalEngine::new(EngineConfig::default(), handler.clone()).unwrap();
        let mut result = engine.new_buffer(None).unwrap();

        // Build 2^100 by repeated doubling, each step fed back as an operand
        engine.multiply(&mut result, "1", "1").unwrap();
        for _ in 0..100 {
            let previous = result.to_string();
            engine.multiply(&mut result, &previous, "2").unwrap();
        }
        assert_eq!(result, "1267650600228229401496703205376");

        // Undo the last step by hand with single-digit rows and offset addition
        let mut row = engine.new_buffer(None).unwrap();
        engine
            .multiply_by_digit(&mut row, "633825300114114700748351602688", 2, false)
            .unwrap();
        assert_eq!(row, result.to_string().as_str());

        let mut sum = engine.new_buffer(None).unwrap();
        engine.add(&mut sum, &result.to_string(), "0", 5, false).unwrap();
        assert_eq!(sum, result.to_string().as_str());

        assert_eq!(handler.len(), 103);
        assert!(handler.events().iter().all(|e| !e.is_rejected()));
    }

    #[test]
    fn test_error_kinds_map_to_taxonomy() {
        let mut buffer = DynamicString::init(Some("12")).unwrap();

        let out_of_bounds = buffer.set_char(b'3', 7).unwrap_err();
        assert_eq!(out_of_bounds.kind(), ErrorKind::OutOfBounds);

        let invalid_operand = multiply_strings(&mut buffer, "1x", "2").unwrap_err();
        assert_eq!(invalid_operand.kind(), ErrorKind::InvalidOperand);

        let invalid_digit = multiply_by_digit(&mut buffer, "1", -12, false).unwrap_err();
        assert_eq!(invalid_digit.kind(), ErrorKind::InvalidArgument);

        let invalid_offset = add(&mut buffer, "1", "1", 3, false).unwrap_err();
        assert_eq!(invalid_offset.kind(), ErrorKind::InvalidArgument);

        assert_eq!(buffer, "12");
    }

    #[test]
    fn test_validation_gate() {
        assert!(is_valid_digit_string("-123"));
        assert!(!is_valid_digit_string("12-3"));

        let parsed = DigitStr::parse("+9001").unwrap();
        assert_eq!(parsed.sign(), Sign::Positive);
        assert_eq!(parsed.magnitude(), b"9001");
    }
}
