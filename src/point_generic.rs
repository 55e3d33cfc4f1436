use core::ops::{Add, Index, IndexMut, Mul, Sub};

use super::point::{Point, PointNorm, Scalar};

/// Point with dimensions of constant generic size N and of generic type T
/// (Implemented as Newtype Pattern on an array
/// see book or https://www.worthe-it.co.za/blog/2020-10-31-newtype-pattern-in-rust.html)
/// This type only interacts with the library through
/// the point trait, so you are free to use your own
/// Point/Coord/Vec structures instead by implementing the (small) trait
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointN<T, const N: usize>([T; N]);

impl<T, const N: usize> PointN<T, N> {
    pub const fn new(array: [T; N]) -> Self {
        PointN(array)
    }

    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

/// Initialize with the Default value for the underlying type
impl<T: Default + Copy, const N: usize> Default for PointN<T, N> {
    fn default() -> Self {
        PointN([T::default(); N])
    }
}

impl<T, const N: usize> From<[T; N]> for PointN<T, N> {
    fn from(array: [T; N]) -> Self {
        PointN(array)
    }
}

impl<T, const N: usize> Index<usize> for PointN<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for PointN<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const N: usize> Add for PointN<T, N>
where
    T: Add<Output = T> + Copy,
{
    type Output = Self;

    fn add(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] + other.0[i];
        }
        res
    }
}

impl<T, const N: usize> Sub for PointN<T, N>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Self;

    fn sub(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] - other.0[i];
        }
        res
    }
}

/// Uniform scaling by a scalar of the point's own type
impl<T, const N: usize> Mul<T> for PointN<T, N>
where
    T: Mul<T, Output = T> + Copy,
{
    type Output = PointN<T, N>;

    fn mul(self, rhs: T) -> PointN<T, N> {
        let mut res = self;
        for value in res.0.iter_mut() {
            *value = *value * rhs;
        }
        res
    }
}

impl<T, const N: usize> IntoIterator for PointN<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<Self::Item, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.0)
    }
}

impl<T: Scalar, const N: usize> Point for PointN<T, N> {
    type Scalar = T;
    const DIM: usize = N;

    fn axis(&self, index: usize) -> Self::Scalar {
        self.0[index]
    }
}

impl<T: Scalar, const N: usize> PointNorm for PointN<T, N> {
    fn squared_norm(&self) -> Self::Scalar {
        self.0.iter().fold(T::zero(), |acc, &x| acc + x * x)
    }
}
