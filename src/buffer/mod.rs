// ============================================================================
// Buffer Module
// Growable character storage that every digit-string operation writes through
// ============================================================================
//
// This module provides:
// - DynamicString: owned byte buffer with an explicit capacity/length pair
// - BufferError: error types for buffer mutation
// - ErrorKind: crate-wide error classification
//
// Design principles:
// - Exact-fit growth, capacity never shrinks
// - All mutation returns Result (no panics, no partial writes)
// - Bytes past the meaningful content are always the terminator

mod dynamic_string;
mod errors;

pub use dynamic_string::{DynamicString, DEFAULT_CAPACITY, TERMINATOR};
pub use errors::{BufferError, BufferResult, ErrorKind};
