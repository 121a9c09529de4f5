// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_strings::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Decimal Strings Example ===\n");

    #[cfg(feature = "logging")]
    decimal_strings::utils::init_logging(tracing::Level::DEBUG);

    // Create an engine that logs every operation
    let engine = DecimalEngine::new(EngineConfig::default(), Arc::new(LoggingEventHandler))
        .expect("default configuration is valid");
    let mut result = engine.new_buffer(None).expect("buffer allocation");

    println!("Long multiplication:");
    for (lhs, rhs) in [
        ("123", "55"),
        ("11111", "11111"),
        ("-12", "12"),
        ("9999999999999999999999999999999999", "9999999999999999999999999999999999"),
    ] {
        match engine.multiply(&mut result, lhs, rhs) {
            Ok(()) => println!("  {} * {} = {}", lhs, rhs, result),
            Err(err) => println!("  {} * {} failed: {}", lhs, rhs, err),
        }
    }

    println!("\nSingle-digit rows (least significant digit first):");
    for digit in [9, -9] {
        engine
            .multiply_by_digit(&mut result, "123456789", digit, true)
            .expect("valid operands");
        println!("  123456789 * {} -> {}", digit, result);
    }

    println!("\nOffset addition:");
    engine.add(&mut result, "1000", "1", 1, false).expect("valid operands");
    println!("  1000 + 1 at offset 1 = {}", result);

    println!("\nRejected input:");
    if let Err(err) = engine.multiply(&mut result, "12a", "3") {
        println!("  12a * 3 -> {} ({:?}); buffer still holds {}", err, err.kind(), result);
    }

    println!("\nOperations run: {}", engine.operation_count());
}
