// ============================================================================
// Harness Errors
// Failure signals raised inside a test case
// ============================================================================

use crate::numeric::CalcError;
use std::fmt;

/// Why a single test case failed.
#[derive(Debug, Clone, PartialEq)]
pub enum HarnessError {
    /// An assertion helper rejected a value
    Assertion(String),
    /// A calculator error propagated out of the case with `?`
    Calc(CalcError),
    /// The case panicked
    Panicked(String),
}

impl HarnessError {
    /// Create an assertion failure with the given message.
    pub fn assertion(message: impl Into<String>) -> Self {
        HarnessError::Assertion(message.into())
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Assertion(message) => f.write_str(message),
            HarnessError::Calc(err) => write!(f, "{}", err),
            HarnessError::Panicked(message) => write!(f, "panicked: {}", message),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Calc(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CalcError> for HarnessError {
    fn from(err: CalcError) -> Self {
        HarnessError::Calc(err)
    }
}

/// Result type alias for test case bodies
pub type HarnessResult<T = ()> = Result<T, HarnessError>;
