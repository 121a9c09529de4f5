// ============================================================================
// Event Handler Interface
// Defines the contract for observing arithmetic operations
// ============================================================================

use crate::arithmetic::ArithmeticError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operations the engine reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    /// Whole-number multiplication of two digit strings
    Multiply,
    /// Multiplication by a single signed digit
    MultiplyByDigit,
    /// Offset addition
    Add,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Multiply => write!(f, "multiply"),
            Operation::MultiplyByDigit => write!(f, "multiply_by_digit"),
            Operation::Add => write!(f, "add"),
        }
    }
}

/// Events emitted by the decimal engine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithmeticEvent {
    /// Operation finished and its result buffer was written
    Completed {
        operation_id: u64,
        operation: Operation,
        /// Length of the result text, sign included
        digits: usize,
        timestamp: DateTime<Utc>,
    },

    /// Operation rejected; the result buffer was left untouched
    Rejected {
        operation_id: u64,
        operation: Operation,
        error: ArithmeticError,
        timestamp: DateTime<Utc>,
    },
}

impl ArithmeticEvent {
    /// Sequence number of the call that produced this event
    pub fn operation_id(&self) -> u64 {
        match self {
            ArithmeticEvent::Completed { operation_id, .. }
            | ArithmeticEvent::Rejected { operation_id, .. } => *operation_id,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            ArithmeticEvent::Completed { operation, .. }
            | ArithmeticEvent::Rejected { operation, .. } => *operation,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ArithmeticEvent::Rejected { .. })
    }
}

/// Event handler trait for processing engine events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an arithmetic event
    fn on_event(&self, event: ArithmeticEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ArithmeticEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ArithmeticEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ArithmeticEvent) {
        tracing::debug!("Decimal engine event: {:?}", event);
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<ArithmeticEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> Vec<ArithmeticEvent> {
        self.events.lock().clone()
    }

    /// Drain the recorded events
    pub fn take(&self) -> Vec<ArithmeticEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: ArithmeticEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<ArithmeticEvent>) {
        self.events.lock().extend(events);
    }
}
