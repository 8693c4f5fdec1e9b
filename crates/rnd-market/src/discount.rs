//! Present-value discounting.
//!
//! The whole pricing layer assumes continuous compounding; the closed-form
//! mixture expressions are only consistent with `exp(-r·t)` discounting,
//! so no other compounding basis is offered here.

use rnd_core::{ensure, DiscountFactor, Rate, Result, Time};

/// Discount factor for an annualized rate over a horizon in years.
///
/// `factor = exp(-rate * years)`.  Negative rates are accepted;
/// `years == 0` returns 1 regardless of the rate; negative horizons are
/// rejected.
pub fn discount_factor(rate: Rate, years: Time) -> Result<DiscountFactor> {
    ensure!(rate.is_finite(), "rate must be finite, got {rate}");
    ensure!(
        years.is_finite() && years >= 0.0,
        "years must be non-negative, got {years}"
    );
    if years == 0.0 {
        return Ok(1.0);
    }
    Ok((-rate * years).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn zero_horizon_is_one() {
        assert_eq!(discount_factor(0.05, 0.0).unwrap(), 1.0);
        assert_eq!(discount_factor(-0.01, 0.0).unwrap(), 1.0);
        assert_eq!(discount_factor(10.0, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn continuous_compounding() {
        assert_relative_eq!(
            discount_factor(0.05, 2.0).unwrap(),
            (-0.1_f64).exp(),
            max_relative = 1e-15
        );
    }

    #[test]
    fn negative_rates_are_accepted() {
        let df = discount_factor(-0.005, 1.0).unwrap();
        assert!(df > 1.0);
    }

    #[test]
    fn negative_horizon_is_rejected() {
        assert!(discount_factor(0.05, -1.0).is_err());
    }

    proptest! {
        #[test]
        fn strictly_decreasing_in_years(
            rate in 0.001..0.2f64,
            years in 0.01..30.0f64,
            bump in 0.01..5.0f64,
        ) {
            let near = discount_factor(rate, years).unwrap();
            let far = discount_factor(rate, years + bump).unwrap();
            prop_assert!(far < near);
        }

        #[test]
        fn in_unit_interval_for_nonnegative_rates(
            rate in 0.0..0.5f64,
            years in 0.0..30.0f64,
        ) {
            let df = discount_factor(rate, years).unwrap();
            prop_assert!(df > 0.0 && df <= 1.0);
        }
    }
}
