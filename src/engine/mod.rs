// ============================================================================
// Engine Module
// Configured, observable entry point to the arithmetic operations
// ============================================================================

pub mod decimal_engine;

pub use decimal_engine::DecimalEngine;
