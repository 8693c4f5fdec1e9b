//! Risk-neutral distribution queries over calibrated mixture parameters.
//!
//! All queries are pure and stateless: the distribution is fully
//! determined by the parameter set validated at construction.

use crate::parameters::MixtureParameters;
use rnd_core::{ensure, Error, Real, Result, Size};
use rnd_math::{bisection, close, normal_cdf_inverse};
use statrs::distribution::{Continuous, ContinuousCDF, LogNormal};

const QUANTILE_ACCURACY: Real = 1e-10;

/// The risk-neutral density implied by a calibrated parameter set:
/// a weighted mixture of two lognormal distributions.
#[derive(Debug, Clone)]
pub struct MixtureDistribution {
    params: MixtureParameters,
    component1: LogNormal,
    component2: LogNormal,
}

impl MixtureDistribution {
    /// Build the distribution for a parameter set.
    pub fn new(params: MixtureParameters) -> Result<Self> {
        let component = |alpha: Real, beta: Real| {
            LogNormal::new(alpha, beta).map_err(|e| {
                Error::NumericalDegeneracy(format!("lognormal component: {e}"))
            })
        };
        Ok(Self {
            params,
            component1: component(params.alpha1(), params.beta1())?,
            component2: component(params.alpha2(), params.beta2())?,
        })
    }

    /// The underlying parameter set.
    pub fn parameters(&self) -> &MixtureParameters {
        &self.params
    }

    /// The density `q(s)`, zero for non-positive `s`.
    pub fn pdf(&self, s: Real) -> Real {
        if s <= 0.0 {
            return 0.0;
        }
        let w = self.params.weight();
        w * self.component1.pdf(s) + (1.0 - w) * self.component2.pdf(s)
    }

    /// The cumulative distribution function, zero for non-positive `s`.
    ///
    /// A convex combination of cdfs is itself a valid cdf, so this is
    /// monotone non-decreasing by construction.
    pub fn cdf(&self, s: Real) -> Real {
        if s <= 0.0 {
            return 0.0;
        }
        let w = self.params.weight();
        w * self.component1.cdf(s) + (1.0 - w) * self.component2.cdf(s)
    }

    /// The `p`-quantile, for `p` in the open interval (0, 1).
    ///
    /// The mixture cdf lies between the two component cdfs, so the mixture
    /// quantile lies between the component quantiles; those bracket the
    /// bisection of the closed-form cdf.
    pub fn quantile(&self, p: Real) -> Result<Real> {
        ensure!(
            p.is_finite() && p > 0.0 && p < 1.0,
            "probability must lie in (0, 1), got {p}"
        );
        let z = normal_cdf_inverse(p);
        let q1 = (self.params.alpha1() + self.params.beta1() * z).exp();
        let q2 = (self.params.alpha2() + self.params.beta2() * z).exp();
        let lo = q1.min(q2) * (1.0 - 1e-7);
        let hi = q1.max(q2) * (1.0 + 1e-7);
        if close(lo, hi, QUANTILE_ACCURACY) {
            return Ok(0.5 * (lo + hi));
        }
        bisection(|s| self.cdf(s) - p, lo, hi, QUANTILE_ACCURACY)
    }

    /// The mean of the distribution, `weight·F_1 + (1-weight)·F_2`.
    pub fn mean(&self) -> Real {
        self.params.mixture_forward()
    }

    /// Evaluate the density on an evenly spaced grid of `n` points over
    /// `[lo, hi]`, for charting.
    pub fn sample_density(&self, lo: Real, hi: Real, n: Size) -> Result<Vec<(Real, Real)>> {
        ensure!(n >= 2, "grid needs at least 2 points, got {n}");
        ensure!(
            lo.is_finite() && hi.is_finite() && lo < hi,
            "grid bounds must satisfy lo < hi, got [{lo}, {hi}]"
        );
        let step = (hi - lo) / (n - 1) as Real;
        Ok((0..n)
            .map(|i| {
                let s = lo + i as Real * step;
                (s, self.pdf(s))
            })
            .collect())
    }
}
