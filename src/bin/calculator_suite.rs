// ============================================================================
// Calculator Suite Binary
// Runs the built-in cases and exits non-zero if any failed
// ============================================================================

use calculator::harness::{
    run_calculator_suite, CompositeReporter, ConsoleReporter, HarnessConfig, TestRunner,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = HarnessConfig::default();
    let reporter = CompositeReporter::new().with(Box::new(ConsoleReporter::new(
        config.show_failure_details,
    )));

    // Mirror run events into tracing when a subscriber is installed
    #[cfg(feature = "logging")]
    let reporter = reporter.with(Box::new(calculator::harness::LoggingReporter));

    let mut runner = match TestRunner::with_config(config, Box::new(reporter)) {
        Ok(runner) => runner,
        Err(reason) => {
            eprintln!("invalid harness configuration: {}", reason);
            return ExitCode::FAILURE;
        },
    };

    run_calculator_suite(&mut runner);

    let summary = runner.finish();
    tracing::debug!(
        total = summary.total(),
        elapsed_us = summary.elapsed.as_micros() as u64,
        "calculator suite complete"
    );
    summary.exit_code()
}
