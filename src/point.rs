use core::fmt::{Debug, Display};
use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::NativeFloat;

/// Floating point type used for coordinates, curve parameters and lengths.
/// Implemented for `f32` and `f64`; the quadrature tables are stored as
/// `NativeFloat` and converted on use.
pub trait Scalar: Float + Default + Debug + Display {
    fn from_native(value: NativeFloat) -> Self;

    fn to_native(self) -> NativeFloat;
}

impl Scalar for f32 {
    fn from_native(value: NativeFloat) -> Self {
        value as f32
    }

    fn to_native(self) -> NativeFloat {
        self as NativeFloat
    }
}

impl Scalar for f64 {
    fn from_native(value: NativeFloat) -> Self {
        value
    }

    fn to_native(self) -> NativeFloat {
        self
    }
}

/// Trait over generic points (or vectors) in N-dimensional space.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy.
///
/// Scalars are points too: every [`Scalar`] implements the trait with `DIM = 1`,
/// which is how the 1-D parametrization correction curve reuses the Bezier evaluator.
pub trait Point: Add<Self, Output = Self> + Sub<Self, Output = Self> + Copy + PartialEq
where
    Self: Mul<<Self as Point>::Scalar, Output = Self>,
{
    type Scalar: Scalar;
    const DIM: usize;

    /// Returns the component of the Point on its axis corresponding to index e.g. [0, 1, 2] -> [x, y, z]
    fn axis(&self, index: usize) -> Self::Scalar;
}

/// Points with a euclidean norm. Required wherever lengths are measured.
pub trait PointNorm: Point {
    fn squared_norm(&self) -> Self::Scalar;

    fn norm(&self) -> Self::Scalar {
        self.squared_norm().sqrt()
    }
}

/// Every scalar is a 1-D point of itself
impl<T: Scalar> Point for T {
    type Scalar = T;
    const DIM: usize = 1;

    fn axis(&self, _index: usize) -> Self::Scalar {
        *self
    }
}

impl<T: Scalar> PointNorm for T {
    fn squared_norm(&self) -> Self::Scalar {
        *self * *self
    }

    fn norm(&self) -> Self::Scalar {
        self.abs()
    }
}
