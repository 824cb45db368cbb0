// ============================================================================
// Calculator Suite
// The fixed sequence of named cases shipped with the crate
// ============================================================================

use super::assertions::{assert_approx_eq, assert_equal, assert_throws};
use super::runner::TestRunner;
use crate::arithmetic::{add, divide, multiply, subtract};

/// Register and run every calculator case on `runner`.
pub fn run_calculator_suite(runner: &mut TestRunner) {
    let tolerance = runner.config().float_tolerance;

    // Addition
    runner.test("add: should add two positive numbers", || {
        assert_equal(add(2, 3)?, 5.0)
    });
    runner.test("add: should add negative numbers", || {
        assert_equal(add(-1, -2)?, -3.0)
    });
    runner.test("add: should handle zero", || assert_equal(add(5, 0)?, 5.0));
    runner.test("add: should throw on non-number input", || {
        assert_throws(|| add("a", 2), Some("must be numbers"))
    });

    // Subtraction
    runner.test("subtract: should subtract two numbers", || {
        assert_equal(subtract(10, 4)?, 6.0)
    });
    runner.test("subtract: should handle negative results", || {
        assert_equal(subtract(4, 10)?, -6.0)
    });
    runner.test("subtract: should throw on non-number input", || {
        assert_throws(|| subtract(1, "b"), Some("must be numbers"))
    });

    // Multiplication
    runner.test("multiply: should multiply two numbers", || {
        assert_equal(multiply(5, 6)?, 30.0)
    });
    runner.test("multiply: should handle zero", || {
        assert_equal(multiply(5, 0)?, 0.0)
    });
    runner.test("multiply: should throw on non-number input", || {
        assert_throws(|| multiply(true, 2), Some("must be numbers"))
    });

    // Division
    runner.test("divide: should divide two numbers", || {
        assert_equal(divide(20, 4)?, 5.0)
    });
    runner.test("divide: should throw on division by zero", || {
        assert_throws(|| divide(10, 0), Some("Cannot divide by zero"))
    });
    runner.test("divide: should handle decimal results", || {
        assert_equal(divide(5, 2)?, 2.5)
    });
    runner.test("divide: should throw on non-number input", || {
        assert_throws(|| divide(None::<f64>, 2), Some("must be numbers"))
    });
    runner.test("divide: multiplying back should recover the dividend", || {
        assert_approx_eq(multiply(divide(1, 3)?, 3)?, 1.0, tolerance)
    });
}
