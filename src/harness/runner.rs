// ============================================================================
// Test Runner
// Sequential execution of named cases with per-case failure isolation
// ============================================================================

use super::config::HarnessConfig;
use super::errors::{HarnessError, HarnessResult};
use super::reporter::{Reporter, RunEvent};
use super::summary::{RunSummary, TestOutcome, TestStatus};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::time::Instant;

thread_local! {
    /// Set while a case body runs on this thread
    static IN_CASE: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Runs test cases one after another and counts the results.
///
/// A failing case (assertion, propagated calculator error or panic) is
/// recorded and the run continues with the next case.
///
/// # Example
/// ```
/// use calculator::arithmetic::add;
/// use calculator::harness::{assert_equal, NoOpReporter, TestRunner};
///
/// let mut runner = TestRunner::new(Box::new(NoOpReporter));
/// runner.test("add: 2 + 3", || assert_equal(add(2, 3)?, 5.0));
/// runner.test("add: broken", || assert_equal(add(2, 2)?, 5.0));
///
/// let summary = runner.finish();
/// assert_eq!((summary.passed, summary.failed), (1, 1));
/// assert_eq!(summary.exit_status(), 1);
/// ```
pub struct TestRunner {
    config: HarnessConfig,
    reporter: Box<dyn Reporter>,

    /// Counters only ever increase
    passed: u32,
    failed: u32,

    outcomes: Vec<TestOutcome>,
    started_at: DateTime<Utc>,
    clock: Instant,
}

impl TestRunner {
    /// Create a runner with the default configuration
    pub fn new(reporter: Box<dyn Reporter>) -> Self {
        Self::start(HarnessConfig::default(), reporter)
    }

    /// Create a runner from a configuration
    ///
    /// # Returns
    /// * `Err` with the validation message if the configuration is invalid
    pub fn with_config(
        config: HarnessConfig,
        reporter: Box<dyn Reporter>,
    ) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::start(config, reporter))
    }

    fn start(config: HarnessConfig, reporter: Box<dyn Reporter>) -> Self {
        reporter.on_event(&RunEvent::SuiteStarted {
            title: config.title.clone(),
        });

        Self {
            config,
            reporter,
            passed: 0,
            failed: 0,
            outcomes: Vec::new(),
            started_at: Utc::now(),
            clock: Instant::now(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Cases passed so far
    pub fn passed(&self) -> u32 {
        self.passed
    }

    /// Cases failed so far
    pub fn failed(&self) -> u32 {
        self.failed
    }

    /// Run a single named case.
    ///
    /// Returns `true` if the case passed.
    pub fn test<F>(&mut self, name: &str, case: F) -> bool
    where
        F: FnOnce() -> HarnessResult,
    {
        let start = Instant::now();
        let result = run_isolated(case);
        let duration = start.elapsed();

        let (status, event) = match result {
            Ok(()) => {
                self.passed = self.passed.saturating_add(1);
                (
                    TestStatus::Passed,
                    RunEvent::CasePassed {
                        name: name.to_string(),
                        duration,
                    },
                )
            },
            Err(err) => {
                self.failed = self.failed.saturating_add(1);
                let message = err.to_string();
                (
                    TestStatus::Failed {
                        message: message.clone(),
                    },
                    RunEvent::CaseFailed {
                        name: name.to_string(),
                        message,
                        duration,
                    },
                )
            },
        };

        self.reporter.on_event(&event);

        let passed = status == TestStatus::Passed;
        self.outcomes.push(TestOutcome {
            name: name.to_string(),
            status,
            duration,
        });
        passed
    }

    /// Report the totals and hand back the summary
    pub fn finish(self) -> RunSummary {
        self.reporter.on_event(&RunEvent::SuiteFinished {
            passed: self.passed,
            failed: self.failed,
        });

        RunSummary {
            passed: self.passed,
            failed: self.failed,
            outcomes: self.outcomes,
            started_at: self.started_at,
            elapsed: self.clock.elapsed(),
        }
    }
}

/// Wrap the current panic hook once so it stays quiet for panics raised
/// inside a case. Panics elsewhere, including on other threads, still reach it.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !in_case() {
                previous(info);
            }
        }));
    });
}

#[inline]
fn in_case() -> bool {
    IN_CASE.with(Cell::get)
}

/// Run a case, turning a panic into a failure.
///
/// The panic message is reported once, through the runner, instead of also
/// being printed by the panic hook.
fn run_isolated<F>(case: F) -> HarnessResult
where
    F: FnOnce() -> HarnessResult,
{
    install_quiet_hook();

    IN_CASE.with(|flag| flag.set(true));
    let result = panic::catch_unwind(AssertUnwindSafe(case));
    IN_CASE.with(|flag| flag.set(false));

    result.unwrap_or_else(|payload| Err(HarnessError::Panicked(panic_message(payload.as_ref()))))
}

/// Extract the message from a panic payload
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
