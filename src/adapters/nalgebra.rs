//! Nalgebra adapter implementations.
//!
//! Enable this adapter with the `nalgebra` feature to use `nalgebra::SVector<T, D>`
//! as a `Point`. Add `nalgebra` as a direct dependency to construct the vectors
//! in your own code.
//!
//! # Example
//! ```rust,no_run
//! use nalgebra::SVector;
//! use bezier_arclen::{CubicBezier, QuadratureOrder};
//!
//! let curve = CubicBezier::new(
//!     SVector::<f32, 3>::new(0.0, 0.0, 0.0),
//!     SVector::<f32, 3>::new(0.0, 0.1, 0.0),
//!     SVector::<f32, 3>::new(0.0, 3.9, 0.0),
//!     SVector::<f32, 3>::new(0.0, 4.0, 0.0),
//! );
//!
//! let half = curve.length_fraction(0.5, QuadratureOrder::N10);
//! # let _ = half;
//! ```
//!
//! The scalar type must satisfy `nalgebra::RealField` and [`Scalar`]
//! (i.e. `f32` or `f64`).

use nalgebra::{RealField, SVector};

use crate::point::{Point, PointNorm, Scalar};

impl<T, const D: usize> Point for SVector<T, D>
where
    T: RealField + Scalar,
{
    type Scalar = T;
    const DIM: usize = D;

    fn axis(&self, index: usize) -> Self::Scalar {
        self[index]
    }
}

impl<T, const D: usize> PointNorm for SVector<T, D>
where
    T: RealField + Scalar,
{
    fn squared_norm(&self) -> Self::Scalar {
        self.norm_squared()
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{Vector2, Vector3};

    use crate::{CorrectionCurve, CubicBezier, PointN, QuadratureOrder};
    use crate::point::{Point, PointNorm};

    #[test]
    fn svector_is_a_point() {
        let v = Vector3::new(3.0f64, 4.0, 12.0);
        assert_eq!(<Vector3<f64> as Point>::DIM, 3);
        assert_eq!(v.axis(2), 12.0);
        assert_eq!(PointNorm::squared_norm(&v), 169.0);
        assert_eq!(PointNorm::norm(&v), 13.0);
    }

    #[test]
    fn same_lengths_as_point_n() {
        let na = CubicBezier::new(
            Vector2::new(0.0f64, 0.0),
            Vector2::new(0.0, 0.1),
            Vector2::new(2.5, 1.0),
            Vector2::new(4.0, 0.0),
        );
        let own = CubicBezier::new(
            PointN::new([0.0f64, 0.0]),
            PointN::new([0.0, 0.1]),
            PointN::new([2.5, 1.0]),
            PointN::new([4.0, 0.0]),
        );
        for order in [QuadratureOrder::N3, QuadratureOrder::N10] {
            assert!((na.length(order) - own.length(order)).abs() < 1e-12);
        }
        let a = CorrectionCurve::from_curve(&na, QuadratureOrder::N10).unwrap();
        let b = CorrectionCurve::from_curve(&own, QuadratureOrder::N10).unwrap();
        let (a1, a2) = a.samples();
        let (b1, b2) = b.samples();
        assert!((a1 - b1).abs() < 1e-12 && (a2 - b2).abs() < 1e-12);
    }
}
