//! Error types for the rnd workspace.
//!
//! A single `thiserror`-derived enum covers the failure modes of the
//! calibration engine.  Non-convergence of the optimizer is deliberately
//! *not* an error: it is reported as a status on the calibration result so
//! the caller can decide whether to accept a best-effort fit.

use thiserror::Error;

/// The top-level error type used throughout rnd.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A caller-supplied value violated an input precondition
    /// (non-positive strike, negative horizon, malformed chain, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A computation became numerically singular (zero/near-zero log-scale,
    /// ill-defined standardization, failed root bracket).
    #[error("numerical degeneracy: {0}")]
    NumericalDegeneracy(String),

    /// Too few price observations to identify the free parameters.
    #[error("underdetermined system: {observations} observation(s) for {required} free parameters")]
    UnderdeterminedSystem {
        /// Number of usable call/put observations supplied.
        observations: usize,
        /// Minimum number of observations required.
        required: usize,
    },
}

/// Shorthand `Result` type used throughout rnd.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate an input precondition.
///
/// Returns `Err(Error::InvalidInput(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rnd_core::ensure;
/// fn positive(x: f64) -> rnd_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ));
        }
    };
}
