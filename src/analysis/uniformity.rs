//! Chi-square test of digit uniformity.

use super::distributions::chi_square_survival;
use super::result::TestResult;
use crate::stream::DigitCounts;

/// Degrees of freedom for ten digit categories.
const DEGREES_OF_FREEDOM: f64 = 9.0;

/// Result of the digit-uniformity chi-square test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformityTest {
    /// Chi-square statistic over the ten digit counts.
    pub statistic: f64,
    /// Degrees of freedom (always 9).
    pub degrees_of_freedom: u32,
    /// Pass/fail outcome.
    pub result: TestResult,
}

impl UniformityTest {
    /// Tests the digit counts against the uniform expectation n/10.
    pub fn evaluate(counts: &DigitCounts, significance_level: f64) -> Self {
        let expected = counts.expected();
        let statistic = if expected > 0.0 {
            (0..10u8)
                .map(|d| {
                    let diff = counts.count(d) as f64 - expected;
                    diff * diff / expected
                })
                .sum()
        } else {
            0.0
        };

        let p_value = chi_square_survival(statistic, DEGREES_OF_FREEDOM);

        Self {
            statistic,
            degrees_of_freedom: DEGREES_OF_FREEDOM as u32,
            result: TestResult::from_p_value(p_value, significance_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_from(digits: impl IntoIterator<Item = u8>) -> DigitCounts {
        let mut counts = DigitCounts::new();
        for d in digits {
            counts.tally(d);
        }
        counts
    }

    #[test]
    fn test_perfectly_uniform() {
        let counts = counts_from((0..10_000).map(|i| (i % 10) as u8));
        let test = UniformityTest::evaluate(&counts, 0.05);

        assert_eq!(test.statistic, 0.0);
        assert!((test.result.p_value - 1.0).abs() < 1e-12);
        assert!(test.result.passed);
    }

    #[test]
    fn test_skewed_sequence_rejected() {
        // 90% zeros, the rest spread across 1-9.
        let counts = counts_from((0..10_000).map(|i| if i % 10 == 0 { (i / 10 % 9 + 1) as u8 } else { 0 }));
        let test = UniformityTest::evaluate(&counts, 0.05);

        assert!(test.result.p_value < 0.01);
        assert!(!test.result.passed);
    }

    #[test]
    fn test_empty_counts_degrade() {
        let test = UniformityTest::evaluate(&DigitCounts::new(), 0.05);
        assert_eq!(test.statistic, 0.0);
        assert!(test.result.passed);
    }
}
