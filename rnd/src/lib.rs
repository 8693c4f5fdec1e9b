//! # rnd
//!
//! Estimation of the risk-neutral probability distribution of a future
//! asset price implied by observed option prices, following the
//! two-lognormal-mixture methodology of Bahra (1996).
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `rnd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use rnd::core::OptionType;
//! use rnd::market::{discount_factor, OptionChain, OptionQuote};
//! use rnd::model::{price, CalibrationConfig, Calibrator, MixtureDistribution, MixtureParameters};
//!
//! // Discount a 3-month horizon at a 4% continuous rate.
//! let years = 0.25;
//! let df = discount_factor(0.04, years).unwrap();
//!
//! // An observed chain (here: synthetic prices from known parameters).
//! let truth = MixtureParameters::new(4.55, 0.12, 4.75, 0.25, 0.4).unwrap();
//! let chain = OptionChain::from_quotes([80.0, 90.0, 100.0, 110.0, 120.0].map(|strike| {
//!     let call = price(&truth, strike, df, OptionType::Call).unwrap();
//!     let put = price(&truth, strike, df, OptionType::Put).unwrap();
//!     OptionQuote::new(strike, Some(call), Some(put)).unwrap()
//! }));
//!
//! // Calibrate the five mixture parameters to the chain.
//! let spot = df * truth.mixture_forward();
//! let calibrator = Calibrator::new(spot, df, years, CalibrationConfig::default()).unwrap();
//! let result = calibrator.calibrate(&chain).unwrap();
//!
//! // Query the implied distribution.
//! let dist = MixtureDistribution::new(result.parameters).unwrap();
//! let median = dist.quantile(0.5).unwrap();
//! assert!(median > 0.0);
//! assert!(dist.cdf(median) > 0.49 && dist.cdf(median) < 0.51);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use rnd_core as core;

/// Numerical utilities: arrays, distributions, solvers, optimization.
pub use rnd_math as math;

/// Market-side value types: rates, discounting, option chains.
pub use rnd_market as market;

/// The mixture model: pricing, calibration, distribution queries.
pub use rnd_model as model;
