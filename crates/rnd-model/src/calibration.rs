//! Least-squares calibration of the mixture parameters to an option chain.
//!
//! The objective is the sum of squared call-price errors, squared
//! put-price errors, and a forward-consistency penalty tying the mixture's
//! implied mean to the no-arbitrage forward `spot / df`.  Minimization is
//! delegated to the constrained Nelder–Mead simplex in `rnd-math`.
//!
//! The objective has multiple local minima in general (the two components
//! can swap roles, and flat regions appear when one weight collapses), so
//! results are deterministic for a fixed initial guess and configuration
//! but may differ across initial guesses.

use crate::parameters::MixtureParameters;
use crate::pricer;
use rnd_core::{ensure, Error, OptionType, Price, Real, Result, Time};
use rnd_market::OptionChain;
use rnd_math::{
    Array, Constraint, CostFunction, EndCriteria, EndCriteriaType, Simplex,
};
use std::f64::consts::PI;

/// Number of free parameters identified by the calibration.
const FREE_PARAMETERS: usize = 5;

/// Lower bound on the log-scales enforced during the search, strictly
/// above the pricer's degeneracy threshold.
const LOG_SCALE_FLOOR: Real = 1e-6;

/// Substitute for non-finite objective evaluations: large enough to repel
/// the simplex, finite so the search keeps moving.
const NON_FINITE_PENALTY: Real = 1e10;

/// Offset applied symmetrically to the two log-locations in the default
/// initial guess, to break the component symmetry.
const ALPHA_OFFSET: Real = 0.05;

/// Convergence status of a calibration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The optimizer satisfied one of its convergence criteria.
    Converged,
    /// The iteration budget ran out first; the parameters are the best
    /// point visited, not a converged fit.
    NotConverged,
}

/// Terminal artifact of a calibration run.
#[derive(Debug, Clone)]
pub struct CalibrationResult {
    /// The fitted mixture parameters.
    pub parameters: MixtureParameters,
    /// Achieved objective value (price errors plus forward penalty).
    pub objective: Real,
    /// Whether the optimizer converged.
    pub status: Status,
    /// Optimizer iterations performed.
    pub iterations: usize,
}

/// Calibration configuration.
///
/// All tunables are explicit values threaded into the run — there is no
/// process-wide state — so runs are independently reproducible.
#[derive(Debug, Clone)]
pub struct CalibrationConfig {
    /// Weight λ of the forward-consistency penalty.
    pub forward_penalty: Real,
    /// Annualized volatility used to seed the log-scales when no
    /// at-the-money estimate is available.
    pub default_volatility: Real,
    /// Initial simplex step size.
    pub simplex_step: Real,
    /// Termination criteria for the minimizer.  Also the only way to
    /// bound a run's wall-clock: the search has no cancellation point.
    pub end_criteria: EndCriteria,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            forward_penalty: 1.0,
            default_volatility: 0.2,
            simplex_step: 0.1,
            end_criteria: EndCriteria {
                max_iterations: 5000,
                max_stationary_iterations: 500,
                root_epsilon: 1e-14,
                function_epsilon: 1e-14,
            },
        }
    }
}

// ── Objective ─────────────────────────────────────────────────────────────────

struct ChainObjective<'a> {
    chain: &'a OptionChain,
    discount_factor: Real,
    forward: Real,
    lambda: Real,
}

impl ChainObjective<'_> {
    fn squared_error(
        &self,
        params: &MixtureParameters,
        strike: Price,
        observed: Price,
        option_type: OptionType,
    ) -> Option<Real> {
        let model = pricer::price(params, strike, self.discount_factor, option_type).ok()?;
        Some((model - observed) * (model - observed))
    }
}

impl CostFunction for ChainObjective<'_> {
    fn value(&self, x: &Array) -> Real {
        let Ok(params) = MixtureParameters::new(x[0], x[1], x[2], x[3], x[4]) else {
            return NON_FINITE_PENALTY;
        };

        let mut total = 0.0;
        for quote in self.chain.quotes() {
            if let Some(observed) = quote.call() {
                match self.squared_error(&params, quote.strike(), observed, OptionType::Call) {
                    Some(e) => total += e,
                    None => return NON_FINITE_PENALTY,
                }
            }
            if let Some(observed) = quote.put() {
                match self.squared_error(&params, quote.strike(), observed, OptionType::Put) {
                    Some(e) => total += e,
                    None => return NON_FINITE_PENALTY,
                }
            }
        }

        let gap = params.mixture_forward() - self.forward;
        total += self.lambda * gap * gap;

        if total.is_finite() {
            total
        } else {
            NON_FINITE_PENALTY
        }
    }
}

// ── Constraint ────────────────────────────────────────────────────────────────

/// Feasible region of the search: `beta_i >= LOG_SCALE_FLOOR`,
/// `weight ∈ [0, 1]`, log-locations unbounded.
struct MixtureConstraint;

impl Constraint for MixtureConstraint {
    fn test(&self, x: &Array) -> bool {
        x[1] >= LOG_SCALE_FLOOR
            && x[3] >= LOG_SCALE_FLOOR
            && (0.0..=1.0).contains(&x[4])
    }
}

// ── Calibrator ────────────────────────────────────────────────────────────────

/// Fits mixture parameters to an observed option chain.
#[derive(Debug, Clone)]
pub struct Calibrator {
    spot: Price,
    discount_factor: Real,
    years: Time,
    config: CalibrationConfig,
}

impl Calibrator {
    /// Create a calibrator for one expiration.
    ///
    /// `discount_factor` must come from the continuous-compounding
    /// convention (`rnd_market::discount_factor`); `years` is the time to
    /// expiration and must be strictly positive.
    pub fn new(
        spot: Price,
        discount_factor: Real,
        years: Time,
        config: CalibrationConfig,
    ) -> Result<Self> {
        ensure!(
            spot.is_finite() && spot > 0.0,
            "spot must be positive, got {spot}"
        );
        ensure!(
            discount_factor.is_finite() && discount_factor > 0.0,
            "discount factor must be positive, got {discount_factor}"
        );
        ensure!(
            years.is_finite() && years > 0.0,
            "time to expiration must be positive, got {years}"
        );
        ensure!(
            config.forward_penalty.is_finite() && config.forward_penalty >= 0.0,
            "forward penalty must be non-negative"
        );
        ensure!(
            config.default_volatility.is_finite() && config.default_volatility > 0.0,
            "default volatility must be positive"
        );
        ensure!(
            config.simplex_step.is_finite() && config.simplex_step > 0.0,
            "simplex step must be positive"
        );
        Ok(Self {
            spot,
            discount_factor,
            years,
            config,
        })
    }

    /// The no-arbitrage forward implied by spot and discounting.
    pub fn forward(&self) -> Real {
        self.spot / self.discount_factor
    }

    /// Calibrate starting from the canonical default guess.
    pub fn calibrate(&self, chain: &OptionChain) -> Result<CalibrationResult> {
        let guess = self.default_initial_guess(chain);
        self.calibrate_from(chain, &guess)
    }

    /// Calibrate starting from a caller-supplied guess.
    pub fn calibrate_from(
        &self,
        chain: &OptionChain,
        initial: &MixtureParameters,
    ) -> Result<CalibrationResult> {
        let observations = chain.observation_count();
        if observations < FREE_PARAMETERS {
            return Err(Error::UnderdeterminedSystem {
                observations,
                required: FREE_PARAMETERS,
            });
        }

        let objective = ChainObjective {
            chain,
            discount_factor: self.discount_factor,
            forward: self.forward(),
            lambda: self.config.forward_penalty,
        };
        let start = Array::from_slice(&[
            initial.alpha1(),
            initial.beta1(),
            initial.alpha2(),
            initial.beta2(),
            initial.weight(),
        ]);

        let simplex = Simplex::new(self.config.simplex_step);
        let outcome = simplex.minimize(
            &objective,
            &MixtureConstraint,
            &start,
            &self.config.end_criteria,
        )?;

        let x = outcome.x;
        let parameters = MixtureParameters::new(x[0], x[1], x[2], x[3], x[4])?;
        let status = match outcome.end_type {
            EndCriteriaType::MaxIterations => Status::NotConverged,
            EndCriteriaType::RootEpsilon | EndCriteriaType::StationaryPoint => Status::Converged,
        };
        Ok(CalibrationResult {
            parameters,
            objective: outcome.value,
            status,
            iterations: outcome.iterations,
        })
    }

    /// The canonical default initial guess: both components centered on
    /// the forward with a small symmetric log-location offset, equal
    /// weights, and log-scales seeded from an at-the-money implied-vol
    /// estimate.
    pub fn default_initial_guess(&self, chain: &OptionChain) -> MixtureParameters {
        let beta = self.seed_log_scale(chain);
        // A component with log-location `ln(forward) - beta²/2` has its
        // effective forward exactly on the no-arbitrage forward.
        let center = self.forward().ln() - 0.5 * beta * beta;
        MixtureParameters::new(
            center - ALPHA_OFFSET,
            beta,
            center + ALPHA_OFFSET,
            beta,
            0.5,
        )
        .expect("default guess satisfies the parameter invariants")
    }

    /// Seed for the log-scales: the Brenner–Subrahmanyam at-the-money
    /// approximation `sigma ≈ sqrt(2π/t)·price/spot`, which as a log-scale
    /// (`sigma·sqrt(t)`) is simply `sqrt(2π)·price/spot`.  Falls back to
    /// the configured default volatility when the chain has no usable
    /// at-the-money price.
    fn seed_log_scale(&self, chain: &OptionChain) -> Real {
        let fallback = self.config.default_volatility * self.years.sqrt();
        let Some(atm) = chain.at_the_money(self.spot) else {
            return fallback;
        };
        match atm.call().or(atm.put()) {
            Some(price) if price > 0.0 => {
                ((2.0 * PI).sqrt() * price / self.spot).clamp(0.01, 2.0)
            }
            _ => fallback,
        }
    }
}
