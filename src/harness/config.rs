// ============================================================================
// Harness Configuration
// Presentation and comparison settings for a test run
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default suite title printed above the results
pub const DEFAULT_TITLE: &str = "Calculator Tests";

/// Default absolute tolerance for approximate float comparisons
pub const DEFAULT_FLOAT_TOLERANCE: f64 = 1e-9;

/// Settings for a [`TestRunner`](super::TestRunner).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HarnessConfig {
    /// Heading printed when the run starts
    pub title: String,

    /// Print the error message under each failed case
    pub show_failure_details: bool,

    /// Absolute tolerance used by approximate assertions in the suite
    pub float_tolerance: f64,
}

impl HarnessConfig {
    /// Create a configuration with the given title and default settings
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            show_failure_details: true,
            float_tolerance: DEFAULT_FLOAT_TOLERANCE,
        }
    }

    /// Builder method: Toggle failure messages in the report
    pub fn with_failure_details(mut self, show: bool) -> Self {
        self.show_failure_details = show;
        self
    }

    /// Builder method: Set the approximate comparison tolerance
    pub fn with_float_tolerance(mut self, tolerance: f64) -> Self {
        self.float_tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }

        if !self.float_tolerance.is_finite() || self.float_tolerance < 0.0 {
            return Err("Float tolerance must be a finite, non-negative number".to_string());
        }

        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl HarnessConfig {
    /// Terse output for pipelines: names only, no failure messages
    pub fn quiet() -> Self {
        Self::default().with_failure_details(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.title, "Calculator Tests");
        assert!(config.show_failure_details);
        assert_eq!(config.float_tolerance, DEFAULT_FLOAT_TOLERANCE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = HarnessConfig::new("Smoke")
            .with_failure_details(false)
            .with_float_tolerance(1e-6);

        assert_eq!(config.title, "Smoke");
        assert!(!config.show_failure_details);
        assert_eq!(config.float_tolerance, 1e-6);
    }

    #[test]
    fn test_validation() {
        assert!(HarnessConfig::new("  ").validate().is_err());
        assert!(HarnessConfig::default()
            .with_float_tolerance(-1.0)
            .validate()
            .is_err());
        assert!(HarnessConfig::default()
            .with_float_tolerance(f64::NAN)
            .validate()
            .is_err());
        assert!(HarnessConfig::default()
            .with_float_tolerance(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_preset_configs() {
        let quiet = HarnessConfig::quiet();
        assert!(!quiet.show_failure_details);
        assert_eq!(quiet.title, DEFAULT_TITLE);
    }
}
