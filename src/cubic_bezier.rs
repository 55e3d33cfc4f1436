use num_traits::{One, Zero};

use super::point::{Point, PointNorm, Scalar};
use super::NativeFloat;

/// A cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
/// `P` may be any [`Point`], including a bare scalar for 1-D curves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn from_control_points(points: [P; 4]) -> Self {
        let [start, ctrl1, ctrl2, end] = points;
        CubicBezier::new(start, ctrl1, ctrl2, end)
    }

    pub fn control_points(&self) -> [P; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Mutable access to the control points in curve order, for interactive editing.
    pub fn control_points_mut(&mut self) -> [&mut P; 4] {
        [
            &mut self.start,
            &mut self.ctrl1,
            &mut self.ctrl2,
            &mut self.end,
        ]
    }

    /// Evaluate the curve at t using the numerically stable De Casteljau algorithm.
    /// Interpolation is done as `a * (1 - t) + b * t` so that the end points
    /// are reproduced exactly at t = 0 and t = 1.
    /// Values of t outside of [0, 1] extrapolate the curve.
    pub fn eval(&self, t: P::Scalar) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = lerp(self.start, self.ctrl1, t);
        let ctrl_1bc = lerp(self.ctrl1, self.ctrl2, t);
        let ctrl_1cd = lerp(self.ctrl2, self.end, t);
        // second iteration
        let ctrl_2ab = lerp(ctrl_1ab, ctrl_1bc, t);
        let ctrl_2bc = lerp(ctrl_1bc, ctrl_1cd, t);
        // third iteration, final point on the curve
        lerp(ctrl_2ab, ctrl_2bc, t)
    }

    /// Evaluate the first derivative (tangent vector) at t in closed form:
    /// ```d(t) = 3(1 - t)² (ctrl1 - start) + 6t(1 - t) (ctrl2 - ctrl1) + 3t² (end - ctrl2)```
    pub fn derivative_at(&self, t: P::Scalar) -> P {
        let one_t = P::Scalar::one() - t;
        let three = P::Scalar::from_native(3.0);
        let six = P::Scalar::from_native(6.0);

        (self.ctrl1 - self.start) * (three * one_t * one_t)
            + (self.ctrl2 - self.ctrl1) * (six * t * one_t)
            + (self.end - self.ctrl2) * (three * t * t)
    }
}

impl<P> CubicBezier<P>
where
    P: PointNorm,
{
    /// Approximates the arc length over [0, t_end] by flattening the curve
    /// into `nsegments` straight line segments of equal parameter width.
    /// Converges slowly (quadratically in the segment count), use the
    /// quadrature estimators in [`crate::arc_length`] for accurate lengths.
    pub fn polyline_length(&self, t_end: P::Scalar, nsegments: usize) -> P::Scalar {
        let n = P::Scalar::from_native(nsegments as NativeFloat);
        let mut length = P::Scalar::zero();
        let mut prev = self.eval(P::Scalar::zero());
        for i in 1..=nsegments {
            let t = P::Scalar::from_native(i as NativeFloat) / n * t_end;
            let p = self.eval(t);
            length = length + (p - prev).norm();
            prev = p;
        }
        length
    }
}

/// Linear interpolation between two points (`mix`)
#[inline]
pub(crate) fn lerp<P: Point>(a: P, b: P, t: P::Scalar) -> P {
    a * (P::Scalar::one() - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointN;

    fn arbitrary_curve() -> CubicBezier<PointN<f64, 3>> {
        CubicBezier::new(
            PointN::new([0f64, 1.77f64, -0.5f64]),
            PointN::new([1.1f64, -1f64, 2.0f64]),
            PointN::new([4.3f64, 3f64, 0.25f64]),
            PointN::new([3.2f64, -4f64, 1.0f64]),
        )
    }

    #[test]
    fn eval_endpoints_exact() {
        let bezier = arbitrary_curve();
        assert_eq!(bezier.eval(0.0), bezier.start);
        assert_eq!(bezier.eval(1.0), bezier.end);

        let scalar = CubicBezier::new(0.3f64, -7.1, 12.9, 0.7);
        assert_eq!(scalar.eval(0.0), 0.3);
        assert_eq!(scalar.eval(1.0), 0.7);
    }

    #[test]
    fn eval_equivalence_bernstein() {
        // de casteljau and the expanded bernstein polynomial agree on well defined inputs
        let bezier = arbitrary_curve();
        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let s = 1.0 - t;
            let direct = bezier.start * (s * s * s)
                + bezier.ctrl1 * (3.0 * s * s * t)
                + bezier.ctrl2 * (3.0 * s * t * t)
                + bezier.end * (t * t * t);
            let err = bezier.eval(t) - direct;
            assert!(err.squared_norm() < 1e-20);
        }
    }

    #[test]
    fn derivative_matches_finite_differences() {
        let bezier = arbitrary_curve();
        let h = 1e-6;
        let nsteps: usize = 100;
        for t in 1..nsteps {
            let t = t as f64 / (nsteps as f64);
            let numeric = (bezier.eval(t + h) - bezier.eval(t - h)) * (0.5 / h);
            let err = numeric - bezier.derivative_at(t);
            assert!(err.norm() < 1e-3);
        }
    }

    #[test]
    fn derivative_endpoints_follow_control_polygon() {
        let bezier = arbitrary_curve();
        let err_start = bezier.derivative_at(0.0) - (bezier.ctrl1 - bezier.start) * 3.0;
        let err_end = bezier.derivative_at(1.0) - (bezier.end - bezier.ctrl2) * 3.0;
        assert!(err_start.norm() < 1e-12);
        assert!(err_end.norm() < 1e-12);
    }

    #[test]
    fn extrapolates_outside_unit_interval() {
        // a straight line with evenly spaced control points is linear in t everywhere
        let line = CubicBezier::new(0f64, 1.0, 2.0, 3.0);
        assert!((line.eval(-1.0) + 3.0).abs() < 1e-12);
        assert!((line.eval(2.0) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn control_point_roundtrip_and_edit() {
        let mut bezier = arbitrary_curve();
        let points = bezier.control_points();
        assert_eq!(CubicBezier::from_control_points(points), bezier);

        let [_, ctrl1, _, _] = bezier.control_points_mut();
        *ctrl1 = PointN::new([9.0, 9.0, 9.0]);
        assert_eq!(bezier.ctrl1, PointN::new([9.0, 9.0, 9.0]));
    }

    #[test]
    fn polyline_length_of_straight_line() {
        let line = CubicBezier::new(
            PointN::new([0f64, 0f64]),
            PointN::new([1f64, 0f64]),
            PointN::new([2f64, 0f64]),
            PointN::new([3f64, 0f64]),
        );
        assert!((line.polyline_length(1.0, 64) - 3.0).abs() < 1e-12);
        assert!((line.polyline_length(0.5, 64) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn circle_circumference_approximation() {
        // quarter circle approximation, see http://spencermortensen.com/articles/bezier-circle/
        // flattening approaches the true length from below
        let c = 0.551915024494;
        let quadrant = CubicBezier::new(
            PointN::new([0f64, 1f64]),
            PointN::new([c, 1f64]),
            PointN::new([1f64, c]),
            PointN::new([1f64, 0f64]),
        );
        let quarter = core::f64::consts::FRAC_PI_2;
        let coarse = quadrant.polyline_length(1.0, 8);
        let fine = quadrant.polyline_length(1.0, 1000);
        assert!(coarse < fine);
        assert!((fine - quarter).abs() < 1e-3);
    }
}
