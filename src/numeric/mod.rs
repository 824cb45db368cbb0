// ============================================================================
// Numeric Module
// Operand model and error types for the calculator
// ============================================================================
//
// This module provides:
// - Value: Dynamically typed operand (number, text, bool, null)
// - CalcError: Error types for calculator operations
//
// Design principles:
// - IEEE-754 f64 arithmetic, no rounding beyond native precision
// - All operations return Result (no panics)
// - Type validation happens before any arithmetic

mod errors;
mod value;

pub use errors::{CalcError, CalcResult};
pub use value::Value;
