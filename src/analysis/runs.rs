//! Runs test for pattern detection.
//!
//! A run is a maximal contiguous subsequence of an unchanged digit.
//! Under randomness the run count concentrates around an expectation
//! determined by the per-digit probabilities; too few runs indicate
//! clustering, too many indicate alternation.

use super::distributions::normal_two_sided;
use super::result::TestResult;
use crate::stream::DigitCounts;

/// Result of the runs test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunsTest {
    /// Observed run count from the incremental pass.
    pub observed: u64,
    /// Expected run count under the null hypothesis.
    pub expected: f64,
    /// Variance of the run count; non-positive means degenerate input.
    pub variance: f64,
    /// Pass/fail outcome.
    pub result: TestResult,
}

impl RunsTest {
    /// Tests the observed run count against the multinomial expectation.
    pub fn evaluate(counts: &DigitCounts, observed: u64, significance_level: f64) -> Self {
        let n = counts.total() as f64;
        let p = counts.probabilities();

        let s2: f64 = p.iter().map(|p| p.powi(2)).sum();
        let s3: f64 = p.iter().map(|p| p.powi(3)).sum();
        let s4: f64 = p.iter().map(|p| p.powi(4)).sum();

        let expected = 1.0 + (n - 1.0) * (1.0 - s2);
        let variance = (n - 1.0) * (s2 - s3 - s2 * s2 + s4);

        // All mass on one digit collapses the variance; report the
        // conservative default instead of dividing by zero.
        let p_value = if variance <= 0.0 {
            1.0
        } else {
            normal_two_sided((observed as f64 - expected) / variance.sqrt())
        };

        Self {
            observed,
            expected,
            variance,
            result: TestResult::from_p_value(p_value, significance_level),
        }
    }
}
