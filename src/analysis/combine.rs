//! Fisher's method for combining independent p-values.

use super::distributions::chi_square_survival;

/// Combines independent p-values into one via Fisher's method.
///
/// The statistic -2 * sum(ln p_i) follows a chi-square distribution
/// with 2k degrees of freedom under the joint null hypothesis. An
/// empty slice yields the conservative 1.0.
pub fn fisher_combine(p_values: &[f64]) -> f64 {
    if p_values.is_empty() {
        return 1.0;
    }

    let statistic = -2.0 * p_values.iter().map(|p| p.ln()).sum::<f64>();
    chi_square_survival(statistic, 2.0 * p_values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_conservative() {
        assert_eq!(fisher_combine(&[]), 1.0);
    }

    #[test]
    fn test_known_value() {
        // -2 * (ln 0.5 + ln 0.5) = 2.7726 with df 4; closed form gives
        // exp(-x/2) * (1 + x/2) = 0.25 * 2.3863 = 0.5966.
        let combined = fisher_combine(&[0.5, 0.5]);
        assert!((combined - 0.5966).abs() < 1e-3);
    }

    #[test]
    fn test_uninformative_inputs() {
        // p = 1 contributes nothing; the statistic stays at zero.
        assert!((fisher_combine(&[1.0, 1.0, 1.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_small_p_dominates() {
        let combined = fisher_combine(&[1e-12, 0.8]);
        assert!(combined < 1e-8);
    }
}
