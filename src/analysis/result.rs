//! Common test outcome type.

/// Outcome of a single randomness test.
///
/// A test passes when its p-value exceeds the configured significance
/// level, i.e. the data shows no significant departure from randomness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    /// The test's p-value, in [0, 1].
    pub p_value: f64,
    /// True when the p-value exceeds the significance level.
    pub passed: bool,
}

impl TestResult {
    /// Derives a result from a p-value and significance level.
    pub fn from_p_value(p_value: f64, significance_level: f64) -> Self {
        Self {
            p_value,
            passed: p_value > significance_level,
        }
    }

    /// A conservative "no significant finding" default, used when a
    /// test lacks the data to say anything.
    pub fn inconclusive() -> Self {
        Self {
            p_value: 1.0,
            passed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(!TestResult::from_p_value(0.05, 0.05).passed);
        assert!(TestResult::from_p_value(0.051, 0.05).passed);
        assert!(!TestResult::from_p_value(0.0001, 0.05).passed);
    }

    #[test]
    fn test_inconclusive_passes() {
        let result = TestResult::inconclusive();
        assert_eq!(result.p_value, 1.0);
        assert!(result.passed);
    }
}
