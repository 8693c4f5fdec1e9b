//! Option quotes and the strike-indexed option chain.

use rnd_core::{ensure, Price, Result, Size};

/// Observed call and/or put prices at a single strike.
///
/// A quote may carry one side only; the calibration objective simply drops
/// the missing side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionQuote {
    strike: Price,
    call: Option<Price>,
    put: Option<Price>,
}

impl OptionQuote {
    /// Create a quote with both sides optional.
    pub fn new(strike: Price, call: Option<Price>, put: Option<Price>) -> Result<Self> {
        ensure!(
            strike.is_finite() && strike > 0.0,
            "strike must be positive, got {strike}"
        );
        for (side, price) in [("call", call), ("put", put)] {
            if let Some(p) = price {
                ensure!(
                    p.is_finite() && p >= 0.0,
                    "{side} price must be non-negative, got {p}"
                );
            }
        }
        Ok(Self { strike, call, put })
    }

    /// The strike price.
    pub fn strike(&self) -> Price {
        self.strike
    }

    /// The observed call price, if any.
    pub fn call(&self) -> Option<Price> {
        self.call
    }

    /// The observed put price, if any.
    pub fn put(&self) -> Option<Price> {
        self.put
    }

    /// Number of observed sides (0, 1, or 2).
    pub fn observations(&self) -> Size {
        self.call.iter().count() + self.put.iter().count()
    }
}

/// A collection of option quotes with unique strikes, kept sorted by
/// strike.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionChain {
    quotes: Vec<OptionQuote>,
}

impl OptionChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain from quotes.  Quotes sharing a strike are merged,
    /// with later sides overwriting earlier ones.
    pub fn from_quotes(quotes: impl IntoIterator<Item = OptionQuote>) -> Self {
        let mut chain = Self::new();
        for q in quotes {
            chain.merge(q);
        }
        chain
    }

    fn merge(&mut self, quote: OptionQuote) {
        match self
            .quotes
            .binary_search_by(|q| q.strike.total_cmp(&quote.strike))
        {
            Ok(i) => {
                let existing = &mut self.quotes[i];
                if quote.call.is_some() {
                    existing.call = quote.call;
                }
                if quote.put.is_some() {
                    existing.put = quote.put;
                }
            }
            Err(i) => self.quotes.insert(i, quote),
        }
    }

    /// Record an observed call price at `strike`.
    pub fn insert_call(&mut self, strike: Price, price: Price) -> Result<()> {
        self.merge(OptionQuote::new(strike, Some(price), None)?);
        Ok(())
    }

    /// Record an observed put price at `strike`.
    pub fn insert_put(&mut self, strike: Price, price: Price) -> Result<()> {
        self.merge(OptionQuote::new(strike, None, Some(price))?);
        Ok(())
    }

    /// The quotes in ascending strike order.
    pub fn quotes(&self) -> &[OptionQuote] {
        &self.quotes
    }

    /// Number of distinct strikes.
    pub fn len(&self) -> Size {
        self.quotes.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Total number of price observations (calls plus puts).
    pub fn observation_count(&self) -> Size {
        self.quotes.iter().map(|q| q.observations()).sum()
    }

    /// The quote whose strike is closest to `spot`, if the chain is
    /// non-empty.
    pub fn at_the_money(&self, spot: Price) -> Option<&OptionQuote> {
        self.quotes.iter().min_by(|a, b| {
            (a.strike - spot)
                .abs()
                .total_cmp(&(b.strike - spot).abs())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_validation() {
        assert!(OptionQuote::new(0.0, Some(1.0), None).is_err());
        assert!(OptionQuote::new(-5.0, Some(1.0), None).is_err());
        assert!(OptionQuote::new(100.0, Some(-1.0), None).is_err());
        assert!(OptionQuote::new(100.0, None, Some(f64::NAN)).is_err());
        assert!(OptionQuote::new(100.0, None, None).is_ok());
    }

    #[test]
    fn chain_stays_sorted_with_unique_strikes() {
        let mut chain = OptionChain::new();
        chain.insert_call(110.0, 2.0).unwrap();
        chain.insert_call(90.0, 12.0).unwrap();
        chain.insert_put(100.0, 4.0).unwrap();
        chain.insert_call(100.0, 6.0).unwrap();

        let strikes: Vec<f64> = chain.quotes().iter().map(|q| q.strike()).collect();
        assert_eq!(strikes, vec![90.0, 100.0, 110.0]);

        // Both sides merged onto the shared strike.
        let atm = &chain.quotes()[1];
        assert_eq!(atm.call(), Some(6.0));
        assert_eq!(atm.put(), Some(4.0));
    }

    #[test]
    fn observation_count_counts_sides() {
        let chain = OptionChain::from_quotes([
            OptionQuote::new(90.0, Some(12.0), Some(1.0)).unwrap(),
            OptionQuote::new(100.0, Some(6.0), None).unwrap(),
            OptionQuote::new(110.0, None, Some(9.0)).unwrap(),
        ]);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.observation_count(), 4);
    }

    #[test]
    fn at_the_money_picks_nearest_strike() {
        let chain = OptionChain::from_quotes([
            OptionQuote::new(90.0, Some(12.0), None).unwrap(),
            OptionQuote::new(100.0, Some(6.0), None).unwrap(),
            OptionQuote::new(110.0, Some(2.0), None).unwrap(),
        ]);
        assert_eq!(chain.at_the_money(103.0).unwrap().strike(), 100.0);
        assert_eq!(chain.at_the_money(108.0).unwrap().strike(), 110.0);
        assert!(OptionChain::new().at_the_money(100.0).is_none());
    }
}
