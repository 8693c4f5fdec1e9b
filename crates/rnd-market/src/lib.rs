//! # rnd-market
//!
//! Market-side value types for the rnd workspace: rate quotes and term-rate
//! construction, discount factors, option chains, and the collaborator
//! traits through which rate and market data enter the core.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Option quotes and the strike-indexed option chain.
pub mod chain;

/// Present-value discounting.
pub mod discount;

/// Rate quotes and term-rate construction from overnight series.
pub mod rates;

/// Data-source collaborator traits.
pub mod sources;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use chain::{OptionChain, OptionQuote};
pub use discount::discount_factor;
pub use rates::{DayCountBasis, RateQuote, RateSeries};
pub use sources::{MarketSource, RateSource};
