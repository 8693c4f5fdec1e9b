//! Rate quotes and term-rate construction.
//!
//! Overnight benchmark rates (SOFR-style) are published as annualized
//! *simple* rates.  `RateSeries::term_rate` compounds the daily accruals
//! over a horizon and restates the result as the continuously-compounded
//! rate the pricing formulas require.

use chrono::{Days, NaiveDate};
use rnd_core::{ensure, DiscountFactor, Error, Rate, Result, Time};
use std::collections::BTreeMap;

/// Day-count basis for simple-rate accrual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayCountBasis {
    /// Actual/360 (the usual money-market convention).
    #[default]
    Act360,
    /// Actual/365.
    Act365,
}

impl DayCountBasis {
    /// Days per year under this basis.
    pub fn days_per_year(&self) -> f64 {
        match self {
            DayCountBasis::Act360 => 360.0,
            DayCountBasis::Act365 => 365.0,
        }
    }
}

/// An annualized rate observed on a reference date.  Immutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateQuote {
    value: Rate,
    reference_date: NaiveDate,
}

impl RateQuote {
    /// Create a rate quote.
    pub fn new(value: Rate, reference_date: NaiveDate) -> Result<Self> {
        ensure!(value.is_finite(), "rate must be finite, got {value}");
        Ok(Self {
            value,
            reference_date,
        })
    }

    /// The annualized rate as a decimal fraction.
    pub fn value(&self) -> Rate {
        self.value
    }

    /// The date the rate was observed.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }
}

/// A date-keyed series of annualized simple rates.
///
/// Lookups forward-fill over calendar gaps (weekends, holidays), matching
/// how overnight benchmark fixings apply until the next publication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSeries {
    data: BTreeMap<NaiveDate, Rate>,
}

impl RateSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an iterator of `(date, rate)` pairs.
    pub fn from_pairs(iter: impl IntoIterator<Item = (NaiveDate, Rate)>) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }

    /// Insert or overwrite a fixing.
    pub fn insert(&mut self, date: NaiveDate, rate: Rate) {
        self.data.insert(date, rate);
    }

    /// Number of fixings.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The fixing applying on `date`: the most recent entry on or before it.
    pub fn fixing(&self, date: NaiveDate) -> Option<Rate> {
        self.data.range(..=date).next_back().map(|(_, &r)| r)
    }

    /// Compound the daily simple accruals over `horizon_days` starting at
    /// `start`, and restate the result as a continuously-compounded
    /// annualized rate.
    ///
    /// Each calendar day accrues `rate_d / basis` where `rate_d` is the
    /// forward-filled fixing for that day.  The implied discount factor is
    /// the inverse of the compounded growth, and the returned quote is
    /// `r = -ln(df) / tau` with `tau = horizon_days / basis`, exactly the
    /// rate the `exp(-r·t)` pricing convention expects.
    pub fn term_rate(
        &self,
        start: NaiveDate,
        horizon_days: u32,
        basis: DayCountBasis,
    ) -> Result<RateQuote> {
        ensure!(horizon_days > 0, "horizon must be at least one day");
        let dt = 1.0 / basis.days_per_year();

        let mut growth = 1.0;
        for offset in 0..horizon_days {
            let day = start
                .checked_add_days(Days::new(offset as u64))
                .ok_or_else(|| Error::InvalidInput("horizon overflows the calendar".into()))?;
            let rate = self.fixing(day).ok_or_else(|| {
                Error::InvalidInput(format!("no fixing on or before {day}"))
            })?;
            growth *= 1.0 + rate * dt;
        }

        let df: DiscountFactor = 1.0 / growth;
        let tau: Time = horizon_days as f64 * dt;
        RateQuote::new(-df.ln() / tau, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn constant_series_round_trips() {
        // Flat 5% simple fixings: the continuous term rate must reproduce
        // the compounded growth exactly.
        let start = date(2025, 3, 3);
        let mut series = RateSeries::new();
        series.insert(start, 0.05);

        let quote = series.term_rate(start, 90, DayCountBasis::Act360).unwrap();
        let tau = 90.0 / 360.0;
        let growth = (1.0 + 0.05 / 360.0_f64).powi(90);
        assert_relative_eq!((quote.value() * tau).exp(), growth, max_relative = 1e-12);
        assert_eq!(quote.reference_date(), start);
    }

    #[test]
    fn forward_fills_over_weekends() {
        // Friday fixing applies through the weekend.
        let friday = date(2025, 3, 7);
        let monday = date(2025, 3, 10);
        let series = RateSeries::from_pairs([(friday, 0.04), (monday, 0.06)]);

        assert_eq!(series.fixing(date(2025, 3, 8)), Some(0.04));
        assert_eq!(series.fixing(date(2025, 3, 9)), Some(0.04));
        assert_eq!(series.fixing(monday), Some(0.06));

        let quote = series.term_rate(friday, 4, DayCountBasis::Act360).unwrap();
        let growth = (1.0 + 0.04 / 360.0_f64).powi(3) * (1.0 + 0.06 / 360.0);
        let tau = 4.0 / 360.0;
        assert_relative_eq!((quote.value() * tau).exp(), growth, max_relative = 1e-12);
    }

    #[test]
    fn missing_history_is_rejected() {
        let series = RateSeries::from_pairs([(date(2025, 3, 10), 0.05)]);
        let err = series
            .term_rate(date(2025, 3, 1), 30, DayCountBasis::Act360)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let series = RateSeries::from_pairs([(date(2025, 3, 10), 0.05)]);
        assert!(series
            .term_rate(date(2025, 3, 10), 0, DayCountBasis::Act360)
            .is_err());
    }

    #[test]
    fn act365_basis() {
        let start = date(2025, 1, 1);
        let series = RateSeries::from_pairs([(start, 0.03)]);
        let quote = series.term_rate(start, 365, DayCountBasis::Act365).unwrap();
        let growth = (1.0 + 0.03 / 365.0_f64).powi(365);
        assert_relative_eq!(quote.value().exp(), growth, max_relative = 1e-12);
    }
}
