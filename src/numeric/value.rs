// ============================================================================
// Operand Value
// Dynamically typed input accepted by the calculator operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single operand handed to a calculator operation.
///
/// Operations accept anything convertible into a `Value`, so callers can pass
/// literals directly. Only [`Value::Number`] is numeric; every other variant
/// is rejected with [`CalcError::InvalidArgument`](super::CalcError).
///
/// `NaN` and the infinities are numbers: they pass validation and follow
/// IEEE-754 rules.
///
/// # Example
/// ```
/// use calculator::numeric::Value;
///
/// assert!(Value::from(2).is_numeric());
/// assert!(Value::from(2.5).is_numeric());
/// assert!(!Value::from("a").is_numeric());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Numeric operand
    Number(f64),
    /// Text operand (never numeric, even if it looks like a number)
    Text(String),
    /// Boolean operand
    Bool(bool),
    /// Missing operand
    Null,
}

impl Value {
    /// Get the numeric payload, if any.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if the value is numeric.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Bool(_) => "bool",
            Value::Null => "null",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

// Wide integers are rounded to the nearest f64.
number_from!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
