// ============================================================================
// Harness Module
// Sequential test runner, assertion helpers and reporting
// ============================================================================

mod assertions;
mod errors;
mod reporter;
mod runner;
mod summary;

pub mod config;
pub mod suite;

pub use assertions::{assert_approx_eq, assert_equal, assert_throws};
pub use config::HarnessConfig;
pub use errors::{HarnessError, HarnessResult};
pub use reporter::{
    CompositeReporter, ConsoleReporter, LoggingReporter, NoOpReporter, Reporter, RunEvent,
};
pub use runner::TestRunner;
pub use suite::run_calculator_suite;
pub use summary::{RunSummary, TestOutcome, TestStatus};
