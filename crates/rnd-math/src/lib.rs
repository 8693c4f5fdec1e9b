//! # rnd-math
//!
//! Numerical utilities for the rnd workspace: the `Array` parameter vector
//! (over nalgebra), floating-point comparison helpers, the standard normal
//! distribution, a 1-D bisection solver, and a bounded Nelder–Mead
//! optimizer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional vector of reals.
pub mod array;

/// Floating-point comparison utilities.
pub mod comparison;

/// Standard normal distribution functions.
pub mod distributions;

/// Multivariate minimization.
pub mod optimization;

/// 1-D root finding.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use comparison::close;
pub use distributions::{normal_cdf, normal_cdf_inverse, normal_pdf};
pub use optimization::{
    Constraint, CostFunction, EndCriteria, EndCriteriaType, NoConstraint, OptimizationResult,
    Simplex,
};
pub use solvers1d::bisection;
