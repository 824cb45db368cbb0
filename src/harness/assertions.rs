// ============================================================================
// Assertion Helpers
// Value checks that fail the enclosing test case
// ============================================================================

use super::errors::{HarnessError, HarnessResult};
use std::fmt::Display;

/// Fail unless `actual == expected`.
///
/// The failure message reads `Expected <expected>, got <actual>`.
pub fn assert_equal<T>(actual: T, expected: T) -> HarnessResult
where
    T: PartialEq + Display,
{
    if actual != expected {
        return Err(HarnessError::assertion(format!(
            "Expected {}, got {}",
            expected, actual
        )));
    }
    Ok(())
}

/// Fail unless `|actual - expected| <= tolerance`.
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) -> HarnessResult {
    let delta = (actual - expected).abs();
    // NaN never compares <= so a NaN on either side fails
    if delta <= tolerance {
        Ok(())
    } else {
        Err(HarnessError::assertion(format!(
            "Expected {} (within {}), got {}",
            expected, tolerance, actual
        )))
    }
}

/// Fail unless `f` returns an error.
///
/// When `expected_message` is given, the error's `Display` output must also
/// contain it.
pub fn assert_throws<T, E, F>(f: F, expected_message: Option<&str>) -> HarnessResult
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
{
    let err = match f() {
        Ok(_) => return Err(HarnessError::assertion("Expected function to throw")),
        Err(err) => err.to_string(),
    };

    match expected_message {
        Some(expected) if !err.contains(expected) => Err(HarnessError::assertion(format!(
            "Expected error message to include \"{}\", got \"{}\"",
            expected, err
        ))),
        _ => Ok(()),
    }
}
