// ============================================================================
// Operation Selector
// Names the four binary operations and dispatches to them
// ============================================================================

use super::operations::{add, divide, multiply, subtract};
use crate::numeric::{CalcError, CalcResult, Value};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation, in declaration order
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Apply the operation to two operands.
    ///
    /// # Errors
    /// Same as the underlying function (`add`, `subtract`, `multiply`, `divide`).
    pub fn apply(self, a: impl Into<Value>, b: impl Into<Value>) -> CalcResult<f64> {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
            Operation::Divide => divide(a, b),
        }
    }

    /// Lowercase operation name.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Infix symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse either the name (`"add"`) or the symbol (`"+"`).
impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s) || op.symbol() == s)
            .ok_or(CalcError::InvalidArgument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_dispatches() {
        assert_eq!(Operation::Add.apply(2, 3), Ok(5.0));
        assert_eq!(Operation::Subtract.apply(4, 10), Ok(-6.0));
        assert_eq!(Operation::Multiply.apply(5, 0), Ok(0.0));
        assert_eq!(Operation::Divide.apply(20, 4), Ok(5.0));
        assert_eq!(Operation::Divide.apply(1, 0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_apply_validates_every_operation() {
        for op in Operation::ALL {
            assert_eq!(op.apply("a", 1), Err(CalcError::InvalidArgument), "{}", op);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("add".parse(), Ok(Operation::Add));
        assert_eq!(" Divide ".parse(), Ok(Operation::Divide));
        assert_eq!("*".parse(), Ok(Operation::Multiply));
        assert_eq!("-".parse(), Ok(Operation::Subtract));
        assert_eq!("modulo".parse::<Operation>(), Err(CalcError::InvalidArgument));
        assert_eq!("+-".parse::<Operation>(), Err(CalcError::InvalidArgument));
    }

    #[test]
    fn test_display_and_symbol() {
        assert_eq!(Operation::Multiply.to_string(), "multiply");
        assert_eq!(Operation::Divide.symbol(), "/");
    }
}
