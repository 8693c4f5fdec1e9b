//! # rnd-core
//!
//! Core types and error definitions for the rnd workspace.
//!
//! Provides the primitive type aliases shared by all other crates, the
//! error enum, and the `ensure!` input-validation macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Call/put option-type enum.
pub mod option_type;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// An annualized rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A present-value discount factor in (0, 1] for non-negative rates.
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use option_type::OptionType;
