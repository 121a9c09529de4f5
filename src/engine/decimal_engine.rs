// ============================================================================
// Decimal Engine
// Configured front door for digit-string arithmetic
// ============================================================================

use crate::arithmetic::{add_with, multiply_by_digit_with, multiply_strings_with, ArithmeticResult};
use crate::buffer::{BufferResult, DynamicString};
use crate::config::EngineConfig;
use crate::interfaces::{ArithmeticEvent, EventHandler, NoOpEventHandler, Operation};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Runs arithmetic operations under one configuration and reports each call
/// to an [`EventHandler`].
///
/// The engine holds no per-call state, so a single instance can be shared
/// between threads as long as every call gets its own result buffer.
pub struct DecimalEngine {
    /// Buffer sizing and operand limits
    config: EngineConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,

    /// Sequence counter for operation numbering
    operation_counter: AtomicU64,
}

impl DecimalEngine {
    /// Create a new engine
    ///
    /// # Errors
    /// Returns the validation message if `config` is rejected.
    pub fn new(config: EngineConfig, event_handler: Arc<dyn EventHandler>) -> Result<Self, String> {
        config.validate()?;

        Ok(Self {
            config,
            event_handler,
            operation_counter: AtomicU64::new(0),
        })
    }

    /// Engine with the default configuration and no event reporting
    pub fn with_defaults() -> Self {
        Self {
            config: EngineConfig::default(),
            event_handler: Arc::new(NoOpEventHandler),
            operation_counter: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of operations started so far
    pub fn operation_count(&self) -> u64 {
        self.operation_counter.load(Ordering::Acquire)
    }

    /// Allocate a buffer with the configured starting capacity
    pub fn new_buffer(&self, text: Option<&str>) -> BufferResult<DynamicString> {
        let mut buffer = DynamicString::with_capacity(self.config.initial_capacity)?;
        buffer.set_text(text.unwrap_or(""))?;
        Ok(buffer)
    }

    /// Multiply two digit strings into `result`
    pub fn multiply(&self, result: &mut DynamicString, lhs: &str, rhs: &str) -> ArithmeticResult<()> {
        self.run(Operation::Multiply, result, |result, config| {
            multiply_strings_with(result, lhs, rhs, config)
        })
    }

    /// Multiply a digit string by a single digit in [-9, 9]
    pub fn multiply_by_digit(
        &self,
        result: &mut DynamicString,
        operand: &str,
        digit: i8,
        keep_reversed: bool,
    ) -> ArithmeticResult<()> {
        self.run(Operation::MultiplyByDigit, result, |result, config| {
            multiply_by_digit_with(result, operand, digit, keep_reversed, config)
        })
    }

    /// Add `b` into `a` at `offset` places from the least significant end
    pub fn add(
        &self,
        result: &mut DynamicString,
        a: &str,
        b: &str,
        offset: usize,
        using_reversed: bool,
    ) -> ArithmeticResult<()> {
        self.run(Operation::Add, result, |result, config| {
            add_with(result, a, b, offset, using_reversed, config)
        })
    }

    /// Number the call, run it, and report the outcome
    fn run<F>(&self, operation: Operation, result: &mut DynamicString, op: F) -> ArithmeticResult<()>
    where
        F: FnOnce(&mut DynamicString, &EngineConfig) -> ArithmeticResult<()>,
    {
        let operation_id = self.operation_counter.fetch_add(1, Ordering::AcqRel);
        let outcome = op(&mut *result, &self.config);

        let event = match &outcome {
            Ok(()) => {
                tracing::debug!(operation_id, %operation, digits = result.len(), "operation completed");
                ArithmeticEvent::Completed {
                    operation_id,
                    operation,
                    digits: result.len(),
                    timestamp: Utc::now(),
                }
            },
            Err(error) => {
                tracing::debug!(operation_id, %operation, %error, "operation rejected");
                ArithmeticEvent::Rejected {
                    operation_id,
                    operation,
                    error: *error,
                    timestamp: Utc::now(),
                }
            },
        };
        self.event_handler.on_event(event);

        outcome
    }
}
