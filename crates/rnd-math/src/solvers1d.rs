//! 1-D root finding.

use rnd_core::{
    errors::{Error, Result},
    Real,
};

const MAX_ITERATIONS: u32 = 200;
const DEFAULT_ACCURACY: Real = 1.0e-11;

/// Bisection method for a root of `f(x)` in `[x_min, x_max]`.
///
/// `f(x_min)` and `f(x_max)` must bracket the root (opposite signs).
pub fn bisection<F>(f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = if accuracy > 0.0 {
        accuracy
    } else {
        DEFAULT_ACCURACY
    };
    let mut a = x_min;
    let mut b = x_max;
    let fa = f(a);
    let fb = f(b);

    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    if fa * fb > 0.0 {
        return Err(Error::NumericalDegeneracy(format!(
            "bisection: f({a}) and f({b}) do not bracket a root"
        )));
    }

    // Orient so that f is negative at `a`.
    if fa > 0.0 {
        std::mem::swap(&mut a, &mut b);
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = 0.5 * (a + b);
        let fm = f(mid);
        if fm == 0.0 || (b - a).abs() * 0.5 < acc {
            return Ok(mid);
        }
        if fm < 0.0 {
            a = mid;
        } else {
            b = mid;
        }
    }
    Err(Error::NumericalDegeneracy(
        "bisection: maximum iterations reached".into(),
    ))
}
