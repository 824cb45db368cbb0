// ============================================================================
// Basic Usage Example
// ============================================================================

use calculator::prelude::*;

fn main() {
    println!("=== Calculator Example ===\n");

    // Every operation on the same operands
    for op in Operation::ALL {
        match op.apply(20, 4) {
            Ok(result) => println!("  20 {} 4 = {}", op.symbol(), result),
            Err(e) => println!("  20 {} 4 failed: {}", op.symbol(), e),
        }
    }

    // Parse an operation by name or symbol
    println!("\n=== Parsed Operations ===");
    for input in ["add", "/", "modulo"] {
        match input.parse::<Operation>() {
            Ok(op) => println!("  {:?} -> {} = {:?}", input, op, op.apply(5, 2)),
            Err(e) => println!("  {:?} rejected: {}", input, e),
        }
    }

    // Failures are values, not panics
    println!("\n=== Rejected Inputs ===");
    println!("  divide(10, 0)  -> {:?}", divide(10, 0));
    println!("  add(\"a\", 2)    -> {:?}", add("a", 2));

    // Custom cases on a runner
    println!();
    let config = HarnessConfig::new("Custom Cases");
    let reporter = ConsoleReporter::new(config.show_failure_details);
    let mut runner = TestRunner::with_config(config, Box::new(reporter))
        .expect("default settings are valid");

    runner.test("multiply: negative times positive", || {
        assert_equal(multiply(-3, 7)?, -21.0)
    });
    runner.test("divide: deliberately wrong expectation", || {
        assert_equal(divide(1, 3)?, 0.33)
    });

    let summary = runner.finish();
    println!("\nExit status would be {}", summary.exit_status());
}
