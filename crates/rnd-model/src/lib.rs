//! # rnd-model
//!
//! The two-lognormal mixture model of Bahra (1996): closed-form European
//! option pricing under the mixture density, nonlinear least-squares
//! calibration of the five mixture parameters to an observed option chain,
//! and distribution queries (pdf, cdf, quantiles) over the calibrated
//! parameters.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Least-squares calibration to an option chain.
pub mod calibration;

/// Risk-neutral distribution queries.
pub mod distribution;

/// Mixture parameters.
pub mod parameters;

/// Closed-form mixture pricing.
pub mod pricer;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calibration::{CalibrationConfig, CalibrationResult, Calibrator, Status};
pub use distribution::MixtureDistribution;
pub use parameters::MixtureParameters;
pub use pricer::{lognormal_price, price};
