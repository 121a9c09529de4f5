// ============================================================================
// Interfaces Module
// Observation hooks for the decimal engine
// ============================================================================

pub mod event_handler;

pub use event_handler::{
    ArithmeticEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, Operation,
    RecordingEventHandler,
};
