// ============================================================================
// Run Summary
// Per-case outcomes and aggregate counts of a finished run
// ============================================================================

use chrono::{DateTime, Utc};
use std::process::ExitCode;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a single test case
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TestStatus {
    Passed,
    Failed { message: String },
}

/// Recorded outcome of a single test case
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TestOutcome {
    pub name: String,
    pub status: TestStatus,
    pub duration: Duration,
}

impl TestOutcome {
    #[inline]
    pub fn is_passed(&self) -> bool {
        matches!(self.status, TestStatus::Passed)
    }
}

/// Aggregate result of a test run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunSummary {
    /// Number of cases that passed
    pub passed: u32,

    /// Number of cases that failed
    pub failed: u32,

    /// Outcomes in execution order
    pub outcomes: Vec<TestOutcome>,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Wall-clock time from start to finish
    pub elapsed: Duration,
}

impl RunSummary {
    /// Total number of cases that ran
    #[inline]
    pub fn total(&self) -> u32 {
        self.passed.saturating_add(self.failed)
    }

    /// True when no case failed
    #[inline]
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status: 1 if any case failed, 0 otherwise
    #[inline]
    pub fn exit_status(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Exit code for returning from `main`
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Iterate over the failed outcomes
    pub fn failures(&self) -> impl Iterator<Item = &TestOutcome> {
        self.outcomes.iter().filter(|o| !o.is_passed())
    }

    /// Render the summary as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
