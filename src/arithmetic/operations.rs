// ============================================================================
// Binary Operations
// add / subtract / multiply / divide with operand validation
// ============================================================================

use crate::numeric::{CalcError, CalcResult, Value};

/// Extract both operands as `f64`, rejecting anything non-numeric.
#[inline]
fn numeric_operands(a: Value, b: Value) -> CalcResult<(f64, f64)> {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => {
            tracing::debug!(
                lhs = a.kind(),
                rhs = b.kind(),
                "rejected non-numeric operand"
            );
            Err(CalcError::InvalidArgument)
        },
    }
}

/// Add two numbers.
///
/// # Errors
/// Returns `InvalidArgument` if either operand is not a number.
///
/// # Example
/// ```
/// use calculator::arithmetic::add;
///
/// assert_eq!(add(2, 3), Ok(5.0));
/// assert!(add("a", 2).is_err());
/// ```
pub fn add(a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<f64> {
    let (a, b) = numeric_operands(a.into(), b.into())?;
    Ok(a + b)
}

/// Subtract `b` from `a`.
///
/// # Errors
/// Returns `InvalidArgument` if either operand is not a number.
pub fn subtract(a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<f64> {
    let (a, b) = numeric_operands(a.into(), b.into())?;
    Ok(a - b)
}

/// Multiply two numbers.
///
/// # Errors
/// Returns `InvalidArgument` if either operand is not a number.
pub fn multiply(a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<f64> {
    let (a, b) = numeric_operands(a.into(), b.into())?;
    Ok(a * b)
}

/// Divide `a` by `b`.
///
/// Operand types are validated before the divisor is inspected. Both `0.0`
/// and `-0.0` count as zero.
///
/// # Errors
/// - `InvalidArgument` if either operand is not a number
/// - `DivisionByZero` if `b` is zero
///
/// # Example
/// ```
/// use calculator::arithmetic::divide;
/// use calculator::numeric::CalcError;
///
/// assert_eq!(divide(5, 2), Ok(2.5));
/// assert_eq!(divide(10, 0), Err(CalcError::DivisionByZero));
/// ```
pub fn divide(a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<f64> {
    let (a, b) = numeric_operands(a.into(), b.into())?;
    if b == 0.0 {
        tracing::debug!(dividend = a, "rejected division by zero");
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}
