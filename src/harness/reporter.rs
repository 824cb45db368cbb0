// ============================================================================
// Reporter Interface
// Receives run events and turns them into output
// ============================================================================

use std::cell::Cell;
use std::time::Duration;

/// Rule width used before a title has been seen
const DEFAULT_RULE_WIDTH: usize = 16;

/// Events emitted by the test runner
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// Run started
    SuiteStarted { title: String },

    /// A case finished without error
    CasePassed { name: String, duration: Duration },

    /// A case failed
    CaseFailed {
        name: String,
        message: String,
        duration: Duration,
    },

    /// All cases have run
    SuiteFinished { passed: u32, failed: u32 },
}

/// Reporter trait for processing runner events.
/// Implementations can print, log, collect, etc.
pub trait Reporter {
    /// Handle a run event
    fn on_event(&self, event: &RunEvent);
}

/// No-op reporter for testing
pub struct NoOpReporter;

impl Reporter for NoOpReporter {
    fn on_event(&self, _event: &RunEvent) {}
}

/// Logging reporter
pub struct LoggingReporter;

impl Reporter for LoggingReporter {
    fn on_event(&self, event: &RunEvent) {
        match event {
            RunEvent::CaseFailed { name, message, .. } => {
                tracing::warn!(case = %name, %message, "test case failed");
            },
            RunEvent::SuiteFinished { passed, failed } => {
                tracing::info!(passed, failed, "test run finished");
            },
            other => tracing::debug!("Test runner event: {:?}", other),
        }
    }
}

/// Forwards every event to each of its reporters, in insertion order.
#[derive(Default)]
pub struct CompositeReporter {
    reporters: Vec<Box<dyn Reporter>>,
}

impl CompositeReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Add a reporter
    pub fn with(mut self, reporter: Box<dyn Reporter>) -> Self {
        self.reporters.push(reporter);
        self
    }

    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl Reporter for CompositeReporter {
    fn on_event(&self, event: &RunEvent) {
        for reporter in &self.reporters {
            reporter.on_event(event);
        }
    }
}

/// Prints the human-readable report to stdout.
///
/// ```text
/// Calculator Tests
/// ================
///
/// ✓ add: should add two positive numbers
/// ✗ divide: should divide two numbers
///   Error: Expected 5, got 4
///
/// ================
/// Results: 1 passed, 1 failed
/// ```
pub struct ConsoleReporter {
    show_failure_details: bool,

    /// Header underline width, reused for the footer rule
    rule_width: Cell<usize>,
}

impl ConsoleReporter {
    pub fn new(show_failure_details: bool) -> Self {
        Self {
            show_failure_details,
            rule_width: Cell::new(DEFAULT_RULE_WIDTH),
        }
    }

    /// Render an event as the text the console would show.
    pub fn render(&self, event: &RunEvent) -> String {
        match event {
            RunEvent::SuiteStarted { title } => {
                let width = title.chars().count().max(1);
                self.rule_width.set(width);
                format!("{}\n{}\n", title, "=".repeat(width))
            },
            RunEvent::CasePassed { name, .. } => format!("✓ {}", name),
            RunEvent::CaseFailed { name, message, .. } => {
                if self.show_failure_details {
                    format!("✗ {}\n  Error: {}", name, message)
                } else {
                    format!("✗ {}", name)
                }
            },
            RunEvent::SuiteFinished { passed, failed } => {
                format!(
                    "\n{}\nResults: {} passed, {} failed",
                    "=".repeat(self.rule_width.get()),
                    passed,
                    failed
                )
            },
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn on_event(&self, event: &RunEvent) {
        println!("{}", self.render(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed_case() -> RunEvent {
        RunEvent::CaseFailed {
            name: "divide: should divide two numbers".to_string(),
            message: "Expected 5, got 4".to_string(),
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_noop_reporter() {
        NoOpReporter.on_event(&RunEvent::SuiteFinished {
            passed: 1,
            failed: 0,
        });
        // Should not panic
    }

    #[test]
    fn test_logging_reporter_handles_every_event() {
        let events = [
            RunEvent::SuiteStarted {
                title: "Calculator Tests".to_string(),
            },
            RunEvent::CasePassed {
                name: "add: should handle zero".to_string(),
                duration: Duration::ZERO,
            },
            failed_case(),
            RunEvent::SuiteFinished {
                passed: 1,
                failed: 2,
            },
        ];
        for event in &events {
            LoggingReporter.on_event(event);
        }
        // Should not panic
    }

    #[test]
    fn test_composite_forwards_in_order() {
        use std::rc::Rc;

        struct Tagged(&'static str, Rc<std::cell::RefCell<Vec<String>>>);

        impl Reporter for Tagged {
            fn on_event(&self, event: &RunEvent) {
                let kind = match event {
                    RunEvent::SuiteStarted { .. } => "started",
                    RunEvent::CasePassed { .. } => "passed",
                    RunEvent::CaseFailed { .. } => "failed",
                    RunEvent::SuiteFinished { .. } => "finished",
                };
                self.1.borrow_mut().push(format!("{}:{}", self.0, kind));
            }
        }

        let log = Rc::new(std::cell::RefCell::new(Vec::new()));
        let composite = CompositeReporter::new()
            .with(Box::new(Tagged("a", Rc::clone(&log))))
            .with(Box::new(LoggingReporter))
            .with(Box::new(Tagged("b", Rc::clone(&log))));
        assert_eq!(composite.len(), 3);

        composite.on_event(&failed_case());
        assert_eq!(*log.borrow(), vec!["a:failed", "b:failed"]);
        assert!(CompositeReporter::new().is_empty());
    }

    #[test]
    fn test_console_footer_matches_custom_title() {
        let console = ConsoleReporter::default();
        let header = console.render(&RunEvent::SuiteStarted {
            title: "Custom Cases".to_string(),
        });
        let footer = console.render(&RunEvent::SuiteFinished {
            passed: 1,
            failed: 1,
        });

        let header_rule = header.lines().nth(1).unwrap();
        let footer_rule = footer.lines().nth(1).unwrap();
        assert_eq!(header_rule, "=".repeat(12));
        assert_eq!(footer_rule, header_rule);
    }

    #[test]
    fn test_console_header() {
        let console = ConsoleReporter::default();
        let header = console.render(&RunEvent::SuiteStarted {
            title: "Calculator Tests".to_string(),
        });
        assert_eq!(header, "Calculator Tests\n================\n");
    }

    #[test]
    fn test_console_cases() {
        let console = ConsoleReporter::default();
        let passed = console.render(&RunEvent::CasePassed {
            name: "add: should handle zero".to_string(),
            duration: Duration::ZERO,
        });
        assert_eq!(passed, "✓ add: should handle zero");

        assert_eq!(
            console.render(&failed_case()),
            "✗ divide: should divide two numbers\n  Error: Expected 5, got 4"
        );
    }

    #[test]
    fn test_console_hides_details() {
        let console = ConsoleReporter::new(false);
        assert_eq!(
            console.render(&failed_case()),
            "✗ divide: should divide two numbers"
        );
    }

    #[test]
    fn test_console_summary() {
        let console = ConsoleReporter::default();
        let summary = console.render(&RunEvent::SuiteFinished {
            passed: 11,
            failed: 0,
        });
        assert!(summary.ends_with("Results: 11 passed, 0 failed"));
    }
}
