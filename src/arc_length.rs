//! Arc length of cubic Bezier curves by Gauss-Legendre quadrature of the
//! derivative's norm.
//!
//! Two estimators exist side by side: `length_up_to_n3` (3 nodes, cheap) and
//! `length_up_to_n10` (10 nodes, reference). Ratios of lengths must always be
//! formed with a single estimator, mixing orders biases the ratio.
use num_traits::{One, Zero};
use tracing::trace;

use super::cubic_bezier::CubicBezier;
use super::error::CurveError;
use super::point::{PointNorm, Scalar};
use super::quadrature::QuadratureOrder;
use super::roots::root_newton_raphson;
use super::NativeFloat;

/// Total lengths below this are treated as a degenerate (point-like) curve.
pub const DEGENERATE_LENGTH: NativeFloat = 1e-9;

/// Tolerance of the arc length inversion, in units of length fraction.
const INVERSION_EPS: NativeFloat = 1e-7;
const INVERSION_MAX_ITER: usize = 64;

impl<P> CubicBezier<P>
where
    P: PointNorm,
{
    /// Arc length over the parameter interval [0, b]: the integral of |B'(t)| dt
    /// estimated with the quadrature of the given order.
    pub fn length_up_to(&self, b: P::Scalar, order: QuadratureOrder) -> P::Scalar {
        order.integrate(|t| self.derivative_at(t).norm(), P::Scalar::zero(), b)
    }

    /// 3-point estimate of the arc length over [0, b]
    pub fn length_up_to_n3(&self, b: P::Scalar) -> P::Scalar {
        self.length_up_to(b, QuadratureOrder::N3)
    }

    /// 10-point estimate of the arc length over [0, b]
    pub fn length_up_to_n10(&self, b: P::Scalar) -> P::Scalar {
        self.length_up_to(b, QuadratureOrder::N10)
    }

    /// Total arc length of the curve
    pub fn length(&self, order: QuadratureOrder) -> P::Scalar {
        self.length_up_to(P::Scalar::one(), order)
    }

    /// Returns the total length, or `DegenerateCurve` if it is too short to normalize by.
    fn normalizing_length(&self, order: QuadratureOrder) -> Result<P::Scalar, CurveError> {
        let total = self.length(order);
        // written as a negated comparison so that NaN lengths are rejected too
        if !(total.to_native() >= DEGENERATE_LENGTH) {
            return Err(CurveError::DegenerateCurve {
                length: total.to_native(),
                epsilon: DEGENERATE_LENGTH,
            });
        }
        Ok(total)
    }

    /// Fraction of the total arc length covered by the parameter interval [0, b].
    /// Numerator and denominator use the same quadrature order.
    pub fn length_fraction(&self, b: P::Scalar, order: QuadratureOrder) -> Result<P::Scalar, CurveError> {
        let total = self.normalizing_length(order)?;
        Ok(self.length_up_to(b, order) / total)
    }

    /// Inverse of [`length_fraction`](Self::length_fraction): the parameter t at which
    /// the given fraction of the total arc length has been travelled.
    /// Solved with Newton-Raphson on `length(t)/total - fraction`, whose derivative is
    /// `|B'(t)|/total`. The length is non-decreasing in t, so the root stays bracketed
    /// in [0, 1] and bisection takes over where the curve stops (zero speed).
    pub fn t_at_length_fraction(&self, fraction: P::Scalar, order: QuadratureOrder) -> Result<P::Scalar, CurveError> {
        let zero = P::Scalar::zero();
        let one = P::Scalar::one();
        if !(fraction >= zero && fraction <= one) {
            return Err(CurveError::FractionOutOfRange(fraction.to_native()));
        }
        if fraction == zero || fraction == one {
            return Ok(fraction);
        }

        let total = self.normalizing_length(order)?;
        let t = root_newton_raphson(
            fraction,
            (zero, one),
            |t| self.length_up_to(t, order) / total - fraction,
            |t| self.derivative_at(t).norm() / total,
            P::Scalar::from_native(INVERSION_EPS),
            INVERSION_MAX_ITER,
        )?;
        trace!(fraction = fraction.to_native(), t = t.to_native(), "inverted arc length");
        Ok(t)
    }
}
