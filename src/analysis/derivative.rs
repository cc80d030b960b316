//! Binary-derivative periodicity test.
//!
//! Each populated derivative level is tested for uniformity over the
//! 16-symbol XOR alphabet; the per-level p-values are then combined
//! with Fisher's method into one periodicity verdict.

use super::combine::fisher_combine;
use super::distributions::chi_square_survival;
use super::result::TestResult;
use crate::accumulator::DerivativeTable;

/// Size of the XOR-derivative alphabet.
const BINS: usize = 16;

/// Result of the binary-derivative test.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeTest {
    /// Per-level p-values, in level order, for levels that met the
    /// tally floor.
    pub level_p_values: Vec<f64>,
    /// Fisher-combined outcome across all included levels.
    pub combined: TestResult,
}

impl DerivativeTest {
    /// Tests every qualifying level and combines the p-values.
    ///
    /// Levels with fewer than `min_total` observations are skipped;
    /// if none qualify the combined outcome is the conservative
    /// default. Derivative values outside the 16-bin alphabet are
    /// excluded from the histogram but still count toward the level
    /// tally, matching the defensive filter on the chi-square input.
    pub fn evaluate(table: &DerivativeTable, min_total: u64, significance_level: f64) -> Self {
        let mut level_p_values = Vec::new();

        for level in table.levels() {
            let total: u64 = level.values().sum();
            if total < min_total {
                continue;
            }

            let mut observed = [0.0f64; BINS];
            for (&value, &count) in level {
                if usize::from(value) < BINS {
                    observed[usize::from(value)] = count as f64;
                }
            }

            let expected = total as f64 / BINS as f64;
            let statistic: f64 = observed
                .iter()
                .map(|&o| (o - expected) * (o - expected) / expected)
                .sum();

            level_p_values.push(chi_square_survival(statistic, (BINS - 1) as f64));
        }

        let combined = if level_p_values.is_empty() {
            TestResult::inconclusive()
        } else {
            TestResult::from_p_value(fisher_combine(&level_p_values), significance_level)
        };

        Self {
            level_p_values,
            combined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_levels_are_skipped() {
        let mut table = DerivativeTable::new(3);
        table.record(0, 1);
        table.record(1, 2);

        let test = DerivativeTest::evaluate(&table, 100, 0.05);
        assert!(test.level_p_values.is_empty());
        assert_eq!(test.combined.p_value, 1.0);
        assert!(test.combined.passed);
    }

    #[test]
    fn test_concentrated_level_rejected() {
        let mut table = DerivativeTable::new(1);
        for _ in 0..200 {
            table.record(0, 0);
        }

        let test = DerivativeTest::evaluate(&table, 100, 0.05);
        assert_eq!(test.level_p_values.len(), 1);
        assert!(test.combined.p_value < 0.01);
        assert!(!test.combined.passed);
    }

    #[test]
    fn test_uniform_level_passes() {
        let mut table = DerivativeTable::new(1);
        for value in 0..16u8 {
            for _ in 0..20 {
                table.record(0, value);
            }
        }

        let test = DerivativeTest::evaluate(&table, 100, 0.05);
        assert_eq!(test.level_p_values.len(), 1);
        assert!((test.level_p_values[0] - 1.0).abs() < 1e-9);
        assert!(test.combined.passed);
    }

    #[test]
    fn test_out_of_range_values_excluded_from_bins() {
        // 200 observations, all outside the alphabet: the histogram is
        // empty but the tally still qualifies, so every bin deviates
        // maximally from its expectation.
        let mut table = DerivativeTable::new(1);
        for _ in 0..200 {
            table.record(0, 20);
        }

        let test = DerivativeTest::evaluate(&table, 100, 0.05);
        assert_eq!(test.level_p_values.len(), 1);
        assert!(!test.combined.passed);
    }
}
