//! Root finding helpers using `tinyvec::ArrayVec`.
//!
//! Available functions:
//! - `root_newton_raphson()`
//! - `quadratic_roots()`
use thiserror::Error;
use tinyvec::ArrayVec;

use super::point::Scalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RootFindingError {
    #[error("root finding failed to converge")]
    FailedToConverge,
    #[error("maximum number of iterations reached")]
    MaxIterationsReached,
    #[error("derivative vanished during root finding")]
    ZeroDerivative,
}

/// Find a single root of the function f(x) = 0 close to a given start value, using f and its derivative f'.
/// Every iterate is clamped to the closed `domain` (lo, hi), so `f` and `d` are never
/// evaluated outside of it.
/// Uses the Newton-Raphson method because it is suited for splines as they are cont. differentiable.
///
/// If f changes sign over the domain, the root is kept bracketed and a bisection step is taken
/// whenever the derivative vanishes or the Newton step leaves the bracket, so a root is always found.
/// Without a sign change it is plain Newton-Raphson and may fail.
pub(crate) fn root_newton_raphson<F, Func, Deriv>(
    start: F,
    domain: (F, F),
    f: Func,
    d: Deriv,
    eps: F,
    max_iter: usize,
) -> Result<F, RootFindingError>
where
    F: Scalar,
    Func: Fn(F) -> F,
    Deriv: Fn(F) -> F,
{
    let (mut lo, mut hi) = domain;
    let f_lo = f(lo);
    let f_hi = f(hi);
    if f_lo.abs() <= eps {
        return Ok(lo);
    }
    if f_hi.abs() <= eps {
        return Ok(hi);
    }
    let lo_negative = f_lo < F::zero();
    let bracketed = lo_negative != (f_hi < F::zero());
    let clamp = |t: F| t.max(domain.0).min(domain.1);
    let half = F::from_native(0.5);

    let mut x = clamp(start);
    for _ in 0..max_iter {
        let fx = f(x);
        if fx.abs() <= eps {
            return Ok(x);
        }
        let dx = d(x);

        if bracketed {
            if (fx < F::zero()) == lo_negative {
                lo = x;
            } else {
                hi = x;
            }
            let newton = x - fx / dx;
            // NaN fails the bracket test as well
            let next = if dx.abs() > eps && newton > lo && newton < hi {
                newton
            } else {
                (lo + hi) * half
            };
            if hi - lo <= eps {
                return Ok(next);
            }
            x = next;
            continue;
        }

        if dx.abs() <= eps {
            return Err(RootFindingError::ZeroDerivative);
        }
        let x1 = x - fx / dx;
        if x1.is_nan() {
            return Err(RootFindingError::FailedToConverge);
        }
        let clamped = clamp(x1);
        if (clamped - x).abs() <= eps {
            // stuck on the domain boundary while the step points outside of it
            if clamped != x1 {
                return Err(RootFindingError::FailedToConverge);
            }
            return Ok(clamped);
        }
        x = clamped;
    }
    Err(RootFindingError::MaxIterationsReached)
}

/// Real roots of a*t^2 + b*t + c, in ascending order.
/// Falls back to the linear equation if `a` is (nearly) zero, a double root is reported once.
/// The discriminant is compared relative to the magnitude of its terms, so that the
/// classification does not depend on the scale of the coefficients or the float type.
pub fn quadratic_roots<F: Scalar>(a: F, b: F, c: F) -> ArrayVec<[F; 2]> {
    let mut result = ArrayVec::new();
    let epsilon = F::from_native(crate::EPSILON);
    let two = F::from_native(2.0);

    if a.abs() < epsilon {
        if b.abs() >= epsilon {
            result.push(-c / b);
        }
        return result;
    }

    let b2 = b * b;
    let ac4 = a * c * F::from_native(4.0);
    let delta = b2 - ac4;
    let tolerance = F::epsilon() * F::from_native(8.0) * b2.max(ac4.abs());
    if delta.abs() <= tolerance {
        result.push(-b / (a * two));
    } else if delta > F::zero() {
        let sqrt_delta = delta.sqrt();
        let r1 = (-b - sqrt_delta) / (a * two);
        let r2 = (-b + sqrt_delta) / (a * two);
        result.push(r1.min(r2));
        result.push(r1.max(r2));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newton_finds_cube_root() {
        let root = root_newton_raphson(1.0f64, (0.0, 4.0), |x| x * x * x - 2.0, |x| 3.0 * x * x, 1e-12, 64)
            .unwrap();
        assert!((root - 2f64.cbrt()).abs() < 1e-9);
    }

    #[test]
    fn newton_stays_in_domain() {
        // the unclamped first step from 0.1 would leave the domain
        let root = root_newton_raphson(
            0.1f64,
            (0.0, 1.0),
            |x| x * x - 0.25,
            |x| 2.0 * x,
            1e-12,
            64,
        )
        .unwrap();
        assert!((root - 0.5).abs() < 1e-9);
    }

    #[test]
    fn newton_zero_derivative() {
        let res = root_newton_raphson(0.0f64, (-1.0, 1.0), |x| x * x + 1.0, |x| 2.0 * x, 1e-9, 16);
        assert_eq!(res, Err(RootFindingError::ZeroDerivative));
    }

    #[test]
    fn newton_stuck_on_boundary() {
        let res = root_newton_raphson(0.5f64, (0.0, 10.0), |x| x.exp() + 1.0, |x| x.exp(), 1e-12, 16);
        assert_eq!(res, Err(RootFindingError::FailedToConverge));
    }

    #[test]
    fn newton_max_iterations() {
        let res = root_newton_raphson(10.0f64, (0.0, 20.0), |x| x * x - 2.0, |x| 2.0 * x, 1e-15, 2);
        assert_eq!(res, Err(RootFindingError::MaxIterationsReached));
    }

    #[test]
    fn quadratic_two_roots() {
        let roots = quadratic_roots(1.0f64, -3.0, 2.0);
        assert_eq!(roots.len(), 2);
        assert!((roots[0] - 1.0).abs() < 1e-12);
        assert!((roots[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn quadratic_degenerate_cases() {
        assert_eq!(quadratic_roots(1.0f64, 0.0, 1.0).len(), 0);
        let double = quadratic_roots(1.0f64, -2.0, 1.0);
        assert_eq!(double.len(), 1);
        assert!((double[0] - 1.0).abs() < 1e-12);
        let linear = quadratic_roots(0.0f64, 2.0, -1.0);
        assert_eq!(linear.as_slice(), &[0.5]);
        assert_eq!(quadratic_roots(0.0f64, 0.0, 1.0).len(), 0);
    }

    #[test]
    fn newton_bisects_over_flat_spot() {
        // f' vanishes at 0.5, the root of (x - 0.5)^3 - 1e-9 is just beyond it
        let f = |x: f64| (x - 0.5).powi(3) - 1e-9;
        let d = |x: f64| 3.0 * (x - 0.5).powi(2);
        let root = root_newton_raphson(0.5, (0.0, 1.0), f, d, 1e-15, 128).unwrap();
        assert!((root - 0.501).abs() < 1e-6);
        assert!(f(root).abs() <= 1e-15);
    }

    #[test]
    fn newton_bracket_catches_overshoot() {
        // plain Newton from 1.9 on atan overshoots and diverges
        let root = root_newton_raphson(
            1.9f64,
            (-1.0, 2.0),
            |x| (x - 0.2).atan(),
            |x| 1.0 / (1.0 + (x - 0.2) * (x - 0.2)),
            1e-12,
            64,
        )
        .unwrap();
        assert!((root - 0.2).abs() < 1e-9);
    }

    #[test]
    fn newton_root_on_domain_boundary() {
        let root = root_newton_raphson(0.5f64, (0.0, 1.0), |x| x - 1.0, |_| 1.0, 1e-12, 8).unwrap();
        assert_eq!(root, 1.0);
    }

    #[test]
    fn quadratic_small_coefficients() {
        // (t - 1)(t - 2) scaled down, the discriminant is far below any absolute threshold
        let roots = quadratic_roots(1e-8f64, -3e-8, 2e-8);
        assert_eq!(roots.len(), 2);
        assert!((roots[0] - 1.0).abs() < 1e-6);
        assert!((roots[1] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn quadratic_double_root_single_precision() {
        // (t - 0.1)^2 leaves a rounding residue in the f32 discriminant
        let roots = quadratic_roots(1.0f32, -0.2, 0.01);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 0.1).abs() < 1e-6);
        let scaled = quadratic_roots(1e4f64, -6e3, 900.0);
        assert_eq!(scaled.len(), 1);
        assert!((scaled[0] - 0.3).abs() < 1e-12);
    }
}
