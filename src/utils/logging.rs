// ============================================================================
// Logging Setup
// Optional tracing subscriber for binaries, demos and benchmarks
// ============================================================================
//
// The library itself only emits `tracing` events:
// - trace: buffer growth, finished multiplications
// - debug: engine operation outcomes, LoggingEventHandler output
// - warn:  rejected operands, out-of-range arguments, failed growth
//
// Nothing is printed unless the embedding application installs a
// subscriber. With the `logging` feature enabled, `init_logging` installs a
// plain fmt subscriber.

/// Install a global fmt subscriber at `level`.
///
/// Returns `false` if a global subscriber was already installed, which makes
/// repeated calls (e.g. from several tests) harmless.
#[cfg(feature = "logging")]
pub fn init_logging(level: tracing::Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
