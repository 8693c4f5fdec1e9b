//! Mixture parameters.

use rnd_core::{ensure, Real, Result};

/// Parameters of a weighted mixture of two lognormal distributions.
///
/// The future asset price is modeled as lognormal with log-location
/// `alpha_i` and log-scale `beta_i` in component `i`, with component 1
/// receiving probability `weight` and component 2 the remainder.
///
/// Invariants: `beta1, beta2 > 0` and `weight ∈ [0, 1]`.  Instances are
/// immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureParameters {
    alpha1: Real,
    beta1: Real,
    alpha2: Real,
    beta2: Real,
    weight: Real,
}

impl MixtureParameters {
    /// Create a parameter set, validating the invariants.
    pub fn new(
        alpha1: Real,
        beta1: Real,
        alpha2: Real,
        beta2: Real,
        weight: Real,
    ) -> Result<Self> {
        for (name, v) in [
            ("alpha1", alpha1),
            ("beta1", beta1),
            ("alpha2", alpha2),
            ("beta2", beta2),
            ("weight", weight),
        ] {
            ensure!(v.is_finite(), "{name} must be finite, got {v}");
        }
        ensure!(beta1 > 0.0, "beta1 must be positive, got {beta1}");
        ensure!(beta2 > 0.0, "beta2 must be positive, got {beta2}");
        ensure!(
            (0.0..=1.0).contains(&weight),
            "weight must lie in [0, 1], got {weight}"
        );
        Ok(Self {
            alpha1,
            beta1,
            alpha2,
            beta2,
            weight,
        })
    }

    /// Log-location of the first component.
    pub fn alpha1(&self) -> Real {
        self.alpha1
    }

    /// Log-scale of the first component.
    pub fn beta1(&self) -> Real {
        self.beta1
    }

    /// Log-location of the second component.
    pub fn alpha2(&self) -> Real {
        self.alpha2
    }

    /// Log-scale of the second component.
    pub fn beta2(&self) -> Real {
        self.beta2
    }

    /// Mixing weight of the first component.
    pub fn weight(&self) -> Real {
        self.weight
    }

    /// Effective forward value of the first component,
    /// `F_1 = exp(alpha1 + beta1²/2)`.
    pub fn forward1(&self) -> Real {
        (self.alpha1 + 0.5 * self.beta1 * self.beta1).exp()
    }

    /// Effective forward value of the second component,
    /// `F_2 = exp(alpha2 + beta2²/2)`.
    pub fn forward2(&self) -> Real {
        (self.alpha2 + 0.5 * self.beta2 * self.beta2).exp()
    }

    /// Implied forward (mean) of the mixture,
    /// `weight·F_1 + (1-weight)·F_2`.
    pub fn mixture_forward(&self) -> Real {
        self.weight * self.forward1() + (1.0 - self.weight) * self.forward2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn invariants_are_enforced() {
        assert!(MixtureParameters::new(4.6, 0.2, 4.7, 0.3, 0.5).is_ok());
        assert!(MixtureParameters::new(4.6, 0.0, 4.7, 0.3, 0.5).is_err());
        assert!(MixtureParameters::new(4.6, 0.2, 4.7, -0.3, 0.5).is_err());
        assert!(MixtureParameters::new(4.6, 0.2, 4.7, 0.3, 1.5).is_err());
        assert!(MixtureParameters::new(4.6, 0.2, 4.7, 0.3, -0.1).is_err());
        assert!(MixtureParameters::new(f64::NAN, 0.2, 4.7, 0.3, 0.5).is_err());
    }

    #[test]
    fn forwards() {
        let p = MixtureParameters::new(100.0_f64.ln(), 0.2, 110.0_f64.ln(), 0.3, 0.25).unwrap();
        assert_relative_eq!(p.forward1(), 100.0 * (0.02_f64).exp(), max_relative = 1e-12);
        assert_relative_eq!(p.forward2(), 110.0 * (0.045_f64).exp(), max_relative = 1e-12);
        assert_relative_eq!(
            p.mixture_forward(),
            0.25 * p.forward1() + 0.75 * p.forward2(),
            max_relative = 1e-15
        );
    }
}
