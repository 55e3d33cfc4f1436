//! Arc length parametrization of cubic Bezier curves.
//!
//! A cubic Bezier curve sampled at uniform parameter steps is generally not
//! sampled at uniform distances along the curve. This crate estimates arc
//! lengths with Gauss-Legendre quadrature and fits a 1-D cubic remap from the
//! raw parameter to the travelled fraction of the total length, cheap enough
//! to be refitted every frame while the control points are being edited.
//!
//! Points are generic over the [`Point`] trait: use the bundled [`PointN`],
//! enable the `nalgebra` feature, or implement the trait for your own type.
//!
//! ```rust
//! use bezier_arclen::{CorrectionCurve, CubicBezier, PointN, QuadratureOrder};
//!
//! let curve: CubicBezier<PointN<f64, 2>> = CubicBezier::new(
//!     PointN::new([0.0, 0.0]),
//!     PointN::new([0.0, 0.1]),
//!     PointN::new([0.0, 3.9]),
//!     PointN::new([0.0, 4.0]),
//! );
//! let total = curve.length(QuadratureOrder::N10);
//! let remap = CorrectionCurve::from_curve(&curve, QuadratureOrder::N10).unwrap();
//! // fraction of the length travelled at t = 0.25
//! let s = remap.eval(0.25f64);
//! assert!((s * total - curve.length_up_to_n10(0.25)).abs() < 1e-9);
//! ```
#![no_std]

#[cfg(test)]
extern crate std;

pub mod adapters;
pub mod arc_length;
pub mod correction;
pub mod cubic_bezier;
pub mod error;
pub mod frame;
pub mod point;
pub mod point_generic;
pub mod quadrature;
pub mod roots;

pub use arc_length::DEGENERATE_LENGTH;
pub use correction::{correction_curve, CorrectionCurve};
pub use cubic_bezier::CubicBezier;
pub use error::CurveError;
pub use frame::{
    render_frame, Canvas, EditorState, FrameReport, LengthCheck, Rgb, CORRECTED_COLOR,
    DEFAULT_SEGMENTS, NAIVE_COLOR,
};
pub use point::{Point, PointNorm, Scalar};
pub use point_generic::PointN;
pub use quadrature::{integrate_n10, integrate_n3, QuadratureOrder};
pub use roots::RootFindingError;

/// Float type of constants and quadrature tables
pub type NativeFloat = f64;

/// Tolerance of polynomial root classification
pub(crate) const EPSILON: NativeFloat = 1e-12;
