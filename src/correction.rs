//! Arc-length parametrization correction.
//!
//! A 1-D cubic Bezier with control values [0, c1, c2, 1] is fitted so that it
//! passes through two sampled arc length fractions, s1 at t = 1/3 and s2 at t = 2/3.
//! Evaluating it at a uniform parameter t then estimates the fraction of the total
//! arc length travelled at t. This is a cheap heuristic, not the true arc length
//! inverse (see [`CubicBezier::t_at_length_fraction`] for that), and it is not
//! guaranteed to be monotonic: when s1 and s2 are close to each other near 0 or
//! near 1 the fitted curve overshoots and dips. Use [`CorrectionCurve::is_monotonic`]
//! to detect that case.
use tinyvec::ArrayVec;

use super::cubic_bezier::CubicBezier;
use super::error::CurveError;
use super::point::{PointNorm, Scalar};
use super::quadrature::QuadratureOrder;
use super::roots::quadratic_roots;

/// Control values [0, c1, c2, 1] of the correction curve that passes through
/// s1 at t = 1/3 and s2 at t = 2/3:
/// ```c1 = (18 s1 - 9 s2 + 2) / 6,  c2 = (-9 s1 + 18 s2 - 5) / 6```
/// NaN or out of range samples are not checked and propagate into the result.
pub fn correction_curve<F: Scalar>(s1: F, s2: F) -> [F; 4] {
    let n = F::from_native;
    let c1 = (n(18.0) * s1 - n(9.0) * s2 + n(2.0)) / n(6.0);
    let c2 = (n(-9.0) * s1 + n(18.0) * s2 - n(5.0)) / n(6.0);
    [F::zero(), c1, c2, F::one()]
}

/// Maps a uniform curve parameter t to an estimate of the travelled arc length fraction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CorrectionCurve<F> {
    curve: CubicBezier<F>,
    s1: F,
    s2: F,
}

impl<F: Scalar> CorrectionCurve<F> {
    /// Fit the correction curve to the arc length fractions s1 (at t = 1/3) and s2 (at t = 2/3).
    pub fn from_samples(s1: F, s2: F) -> Self {
        CorrectionCurve {
            curve: CubicBezier::from_control_points(correction_curve(s1, s2)),
            s1,
            s2,
        }
    }

    /// Sample the arc length fractions of `curve` at t = 1/3 and t = 2/3 with one
    /// quadrature order and fit the correction curve to them.
    pub fn from_curve<P>(curve: &CubicBezier<P>, order: QuadratureOrder) -> Result<Self, CurveError>
    where
        P: PointNorm<Scalar = F>,
    {
        let third = F::one() / F::from_native(3.0);
        let s1 = curve.length_fraction(third, order)?;
        let s2 = curve.length_fraction(third + third, order)?;
        Ok(CorrectionCurve::from_samples(s1, s2))
    }

    /// The identity mapping, i.e. the correction of a curve that already moves at constant speed
    pub fn identity() -> Self {
        let third = F::one() / F::from_native(3.0);
        CorrectionCurve::from_samples(third, third + third)
    }

    pub fn samples(&self) -> (F, F) {
        (self.s1, self.s2)
    }

    pub fn control_values(&self) -> [F; 4] {
        self.curve.control_points()
    }

    /// The correction as a 1-D Bezier curve
    pub fn curve(&self) -> &CubicBezier<F> {
        &self.curve
    }

    /// Estimated arc length fraction travelled at parameter t
    pub fn eval(&self, t: F) -> F {
        self.curve.eval(t)
    }

    /// Slope of the mapping at t
    pub fn slope_at(&self, t: F) -> F {
        self.curve.derivative_at(t)
    }

    /// Smallest slope over [0, 1]. The derivative of the mapping is a quadratic
    /// polynomial, its minimum lies on an end point or on the vertex.
    pub fn min_slope(&self) -> F {
        let (a, b, _) = self.slope_coefficients();
        let mut min = self.slope_at(F::zero()).min(self.slope_at(F::one()));
        if a.abs() > F::epsilon() {
            let vertex = -b / (a + a);
            if vertex > F::zero() && vertex < F::one() {
                min = min.min(self.slope_at(vertex));
            }
        }
        min
    }

    /// Parameters in (0, 1) at which the mapping turns around (zero slope), at most two
    pub fn critical_points(&self) -> ArrayVec<[F; 2]> {
        let (a, b, c) = self.slope_coefficients();
        let mut roots = quadratic_roots(a, b, c);
        roots.retain(|t| *t > F::zero() && *t < F::one());
        roots
    }

    /// Whether the mapping is non-decreasing on [0, 1]
    pub fn is_monotonic(&self) -> bool {
        self.min_slope() >= F::zero()
    }

    /// Power basis coefficients of the slope a*t^2 + b*t + c.
    /// The slope is the quadratic Bezier 3 * [c1 - c0, c2 - c1, c3 - c2]:
    ///  d0: [1, -2,  1]
    ///  d1: [0,  2, -2]
    ///  d2: [0,  0,  1]
    ///      c   b   a
    fn slope_coefficients(&self) -> (F, F, F) {
        let [c0, c1, c2, c3] = self.control_values();
        let three = F::from_native(3.0);
        let d0 = (c1 - c0) * three;
        let d1 = (c2 - c1) * three;
        let d2 = (c3 - c2) * three;
        let two = F::from_native(2.0);
        (d0 - two * d1 + d2, two * (d1 - d0), d0)
    }
}
