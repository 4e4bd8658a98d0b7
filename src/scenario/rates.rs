//! Rate-unit helpers
//!
//! Rates live as annual fractions throughout the engine. Two different
//! monthly conversions are in use and are deliberately not unified:
//! the compound and two-tier calculators divide the annual rate by 12
//! (simple monthly accrual), while the three-tier simulator compounds
//! at the monthly-equivalent rate so that twelve steps reproduce the
//! annual figure exactly.

/// Simple monthly accrual rate: annual / 12
pub fn monthly_simple(annual: f64) -> f64 {
    annual / 12.0
}

/// Monthly-equivalent compound rate: (1 + annual)^(1/12) - 1
pub fn monthly_equivalent(annual: f64) -> f64 {
    (1.0 + annual).powf(1.0 / 12.0) - 1.0
}

/// Whole-number percentage to fraction (18.0 -> 0.18)
pub fn pct_to_fraction(pct: f64) -> f64 {
    pct / 100.0
}

/// Fraction to whole-number percentage (0.18 -> 18.0)
pub fn fraction_to_pct(fraction: f64) -> f64 {
    fraction * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_simple() {
        assert_relative_eq!(monthly_simple(0.18), 0.015, epsilon = 1e-12);
        assert_eq!(monthly_simple(0.0), 0.0);
    }

    #[test]
    fn test_monthly_equivalent_compounds_to_annual() {
        let m = monthly_equivalent(0.12);
        assert_relative_eq!((1.0 + m).powi(12), 1.12, epsilon = 1e-12);
    }

    #[test]
    fn test_monthly_equivalent_zero() {
        assert_relative_eq!(monthly_equivalent(0.0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_pct_round_trip() {
        assert_relative_eq!(fraction_to_pct(pct_to_fraction(37.5)), 37.5, epsilon = 1e-12);
    }
}
