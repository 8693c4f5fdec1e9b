//! Multivariate minimization.
//!
//! Provides the cost-function and constraint traits, end criteria, and a
//! constrained Nelder–Mead simplex minimizer.  The simplex never evaluates
//! the cost function outside the feasible region: candidate vertices that
//! fail the constraint are assigned an infinite value and rejected.

use crate::array::Array;
use rnd_core::{errors::Result, Real};

// ── Cost function ─────────────────────────────────────────────────────────────

/// A scalar multi-dimensional objective function.
pub trait CostFunction {
    /// Evaluate the objective at `x`.
    fn value(&self, x: &Array) -> Real;
}

// ── Constraints ───────────────────────────────────────────────────────────────

/// A constraint on the parameter space.
pub trait Constraint {
    /// Return `true` if `x` is feasible.
    fn test(&self, x: &Array) -> bool;
}

/// No constraint — every point is feasible.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConstraint;

impl Constraint for NoConstraint {
    fn test(&self, _x: &Array) -> bool {
        true
    }
}

// ── End criteria ──────────────────────────────────────────────────────────────

/// Criteria to stop an optimization.
#[derive(Debug, Clone)]
pub struct EndCriteria {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Number of consecutive stationary iterations before stopping.
    pub max_stationary_iterations: usize,
    /// Stop when the best objective value drops below this.
    pub root_epsilon: Real,
    /// An iteration is stationary when the best value improves by less
    /// than this.
    pub function_epsilon: Real,
}

impl Default for EndCriteria {
    fn default() -> Self {
        Self {
            max_iterations: 2000,
            max_stationary_iterations: 200,
            root_epsilon: 1e-12,
            function_epsilon: 1e-12,
        }
    }
}

/// The reason an optimization terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCriteriaType {
    /// Maximum iterations reached without satisfying any criterion.
    MaxIterations,
    /// Best objective value below `root_epsilon`.
    RootEpsilon,
    /// Best value stopped improving for `max_stationary_iterations`.
    StationaryPoint,
}

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Final (best) parameter values.
    pub x: Array,
    /// Final objective value.
    pub value: Real,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Reason for termination.
    pub end_type: EndCriteriaType,
}

// ── Nelder–Mead simplex ───────────────────────────────────────────────────────

/// Constrained Nelder–Mead simplex minimizer.
pub struct Simplex {
    lambda: Real,
}

impl Simplex {
    /// Create a simplex minimizer with initial step size `lambda`.
    pub fn new(lambda: Real) -> Self {
        Self { lambda }
    }

    fn guarded_value<C: CostFunction, K: Constraint>(
        cost_fn: &C,
        constraint: &K,
        x: &Array,
    ) -> Real {
        if constraint.test(x) {
            let v = cost_fn.value(x);
            if v.is_finite() {
                v
            } else {
                f64::MAX
            }
        } else {
            f64::MAX
        }
    }

    /// Minimize `cost_fn` subject to `constraint`, starting from `start`.
    ///
    /// `start` must be feasible.
    pub fn minimize<C: CostFunction, K: Constraint>(
        &self,
        cost_fn: &C,
        constraint: &K,
        start: &Array,
        end_criteria: &EndCriteria,
    ) -> Result<OptimizationResult> {
        rnd_core::ensure!(
            constraint.test(start),
            "simplex: initial point violates the constraint"
        );
        let n = start.size();

        // Initial simplex: the start point plus one perturbed vertex per
        // dimension, flipped if the forward step leaves the feasible set.
        let mut vertices: Vec<Array> = Vec::with_capacity(n + 1);
        vertices.push(start.clone());
        for i in 0..n {
            let mut v = start.clone();
            v[i] += self.lambda;
            if !constraint.test(&v) {
                v[i] = start[i] - self.lambda;
            }
            vertices.push(v);
        }
        let mut values: Vec<Real> = vertices
            .iter()
            .map(|v| Self::guarded_value(cost_fn, constraint, v))
            .collect();

        let mut iterations = 0;
        let mut stationary = 0;
        let mut previous_best = f64::MAX;

        loop {
            let (mut best, mut worst) = (0usize, 0usize);
            for i in 1..=n {
                if values[i] < values[best] {
                    best = i;
                }
                if values[i] > values[worst] {
                    worst = i;
                }
            }
            let mut second_worst = best;
            for i in 0..=n {
                if i != worst && values[i] > values[second_worst] {
                    second_worst = i;
                }
            }

            iterations += 1;
            if values[best] < end_criteria.root_epsilon {
                return Ok(OptimizationResult {
                    x: vertices[best].clone(),
                    value: values[best],
                    iterations,
                    end_type: EndCriteriaType::RootEpsilon,
                });
            }
            if (previous_best - values[best]).abs() < end_criteria.function_epsilon {
                stationary += 1;
                if stationary >= end_criteria.max_stationary_iterations {
                    return Ok(OptimizationResult {
                        x: vertices[best].clone(),
                        value: values[best],
                        iterations,
                        end_type: EndCriteriaType::StationaryPoint,
                    });
                }
            } else {
                stationary = 0;
            }
            previous_best = values[best];

            if iterations >= end_criteria.max_iterations {
                return Ok(OptimizationResult {
                    x: vertices[best].clone(),
                    value: values[best],
                    iterations,
                    end_type: EndCriteriaType::MaxIterations,
                });
            }

            // Centroid of the face opposite the worst vertex.
            let mut centroid = Array::zeros(n);
            for (i, v) in vertices.iter().enumerate() {
                if i != worst {
                    centroid = &centroid + v;
                }
            }
            centroid = &centroid / n as Real;

            // Reflect the worst vertex through the centroid.
            let reflected = &(&centroid * 2.0) - &vertices[worst];
            let reflected_value = Self::guarded_value(cost_fn, constraint, &reflected);

            if reflected_value < values[best] {
                // Try expanding further along the same direction.
                let expanded = &(&reflected * 2.0) - &centroid;
                let expanded_value = Self::guarded_value(cost_fn, constraint, &expanded);
                if expanded_value < reflected_value {
                    vertices[worst] = expanded;
                    values[worst] = expanded_value;
                } else {
                    vertices[worst] = reflected;
                    values[worst] = reflected_value;
                }
            } else if reflected_value < values[second_worst] {
                vertices[worst] = reflected;
                values[worst] = reflected_value;
            } else {
                // Contract toward the better of {reflected, worst}.
                let contracted = if reflected_value < values[worst] {
                    &(&centroid + &reflected) / 2.0
                } else {
                    &(&centroid + &vertices[worst]) / 2.0
                };
                let contracted_value = Self::guarded_value(cost_fn, constraint, &contracted);
                if contracted_value < values[worst] {
                    vertices[worst] = contracted;
                    values[worst] = contracted_value;
                } else {
                    // Shrink the whole simplex toward the best vertex.
                    for i in 0..=n {
                        if i != best {
                            vertices[i] = &(&vertices[best] + &vertices[i]) / 2.0;
                            values[i] = Self::guarded_value(cost_fn, constraint, &vertices[i]);
                        }
                    }
                }
            }
        }
    }
}
