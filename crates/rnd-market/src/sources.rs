//! Data-source collaborator traits.
//!
//! The core performs no I/O of its own: rates, spot prices, and option
//! chains are obtained through these traits before calibration starts and
//! passed into the engine as plain values.

use crate::chain::OptionChain;
use crate::rates::RateSeries;
use chrono::NaiveDate;
use rnd_core::{Error, Price, Rate, Result};

/// Supplies a term risk-free rate queryable by date.
pub trait RateSource: std::fmt::Debug + Send + Sync {
    /// The annualized rate observed on `date`.
    fn rate(&self, date: NaiveDate) -> Result<Rate>;
}

impl RateSource for RateSeries {
    fn rate(&self, date: NaiveDate) -> Result<Rate> {
        self.fixing(date)
            .ok_or_else(|| Error::InvalidInput(format!("no fixing on or before {date}")))
    }
}

/// Supplies spot prices and option chains for an underlying.
pub trait MarketSource: std::fmt::Debug + Send + Sync {
    /// Current spot price of `ticker`.
    fn spot(&self, ticker: &str) -> Result<Price>;

    /// Option chain of `ticker` for the given expiration date.
    fn chain(&self, ticker: &str, expiry: NaiveDate) -> Result<OptionChain>;
}
