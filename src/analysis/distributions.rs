//! Survival-function helpers over the statrs distributions.

use statrs::distribution::{ChiSquared, ContinuousCDF, Normal};

/// Chi-square survival function: P(X >= statistic) with `df` degrees
/// of freedom. Falls back to the conservative 1.0 if the distribution
/// cannot be constructed.
pub fn chi_square_survival(statistic: f64, df: f64) -> f64 {
    // An unbounded statistic (e.g. a combined zero p-value) has no
    // surviving mass.
    if statistic == f64::INFINITY {
        return 0.0;
    }
    match ChiSquared::new(df) {
        Ok(dist) => dist.sf(statistic),
        Err(_) => 1.0,
    }
}

/// Two-sided p-value for a standard-normal z score.
pub fn normal_two_sided(z: f64) -> f64 {
    match Normal::new(0.0, 1.0) {
        Ok(dist) => 2.0 * dist.sf(z.abs()),
        Err(_) => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chi_square_survival_at_zero() {
        assert!((chi_square_survival(0.0, 9.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_chi_square_survival_decreases() {
        let near = chi_square_survival(1.0, 9.0);
        let far = chi_square_survival(50.0, 9.0);
        assert!(near > far);
        assert!(far < 1e-6);
    }

    #[test]
    fn test_normal_two_sided() {
        assert!((normal_two_sided(0.0) - 1.0).abs() < 1e-12);

        // ~4.55% of the mass lies beyond |z| = 2.
        let p = normal_two_sided(2.0);
        assert!((p - 0.0455).abs() < 1e-3);

        // Symmetric in the sign of z.
        assert_eq!(normal_two_sided(-1.5), normal_two_sided(1.5));
    }
}
