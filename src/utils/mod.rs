// ============================================================================
// Utilities Module
// Helper functions for embedding the crate
// ============================================================================

mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
