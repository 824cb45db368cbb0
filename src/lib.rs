// ============================================================================
// Calculator Library
// Validated binary arithmetic with a sequential self-test harness
// ============================================================================

//! # Calculator
//!
//! Four binary operations over dynamically typed operands, plus a small
//! test harness that exercises them.
//!
//! ## Features
//!
//! - **Validated operands**: non-numeric input is rejected with
//!   [`CalcError::InvalidArgument`](numeric::CalcError)
//! - **Checked division**: a zero divisor yields
//!   [`CalcError::DivisionByZero`](numeric::CalcError)
//! - **Result-based harness**: cases return `Result`, failures are counted,
//!   never fatal to the run
//! - **Pluggable reporting**: console, `tracing`, or no-op
//!
//! ## Example
//!
//! ```rust
//! use calculator::prelude::*;
//!
//! assert_eq!(add(2, 3), Ok(5.0));
//! assert_eq!(divide(5, 2), Ok(2.5));
//! assert_eq!(divide(10, 0), Err(CalcError::DivisionByZero));
//! assert_eq!(add("a", 2), Err(CalcError::InvalidArgument));
//!
//! let mut runner = TestRunner::new(Box::new(NoOpReporter));
//! run_calculator_suite(&mut runner);
//! let summary = runner.finish();
//! assert!(summary.is_success());
//! ```

pub mod arithmetic;
pub mod harness;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::arithmetic::{add, divide, multiply, subtract, Operation};
    pub use crate::harness::{
        assert_approx_eq, assert_equal, assert_throws, run_calculator_suite, CompositeReporter,
        ConsoleReporter, HarnessConfig, HarnessError, HarnessResult, LoggingReporter, NoOpReporter,
        Reporter, RunEvent, RunSummary, TestOutcome, TestRunner, TestStatus,
    };
    pub use crate::numeric::{CalcError, CalcResult, Value};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_suite() {
        let config = HarnessConfig::quiet();
        let mut runner = TestRunner::with_config(config, Box::new(NoOpReporter)).unwrap();

        run_calculator_suite(&mut runner);

        // A deliberately broken case is isolated from the rest
        runner.test("broken: 2 + 2 is not 5", || assert_equal(add(2, 2)?, 5.0));
        runner.test("after broken case", || assert_equal(subtract(4, 10)?, -6.0));

        let summary = runner.finish();
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.passed, summary.total() - 1);
        assert_eq!(summary.exit_status(), 1);

        let failure = summary.failures().next().unwrap();
        assert_eq!(failure.name, "broken: 2 + 2 is not 5");
    }

    #[test]
    fn test_operations_through_selector() {
        let results: Vec<_> = Operation::ALL
            .iter()
            .map(|op| op.apply(20, 4))
            .collect();
        assert_eq!(results, vec![Ok(24.0), Ok(16.0), Ok(80.0), Ok(5.0)]);
    }
}
