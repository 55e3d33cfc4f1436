//! Fixed-order Gauss-Legendre quadrature.
//!
//! Integrates a scalar function over [a, b] with a precomputed table of
//! `(weight, abscissa)` pairs on the canonical interval [-1, 1].
//! There is no adaptivity and no stopping criterion: the same inputs always
//! yield the same output, and the cost is exactly one function evaluation per node.
//!
//! Available functions:
//! - `integrate()` over an arbitrary table
//! - `integrate_n3()`, `integrate_n10()` over the built-in tables
use super::point::Scalar;
use super::NativeFloat;

/// 3-point Gauss-Legendre table as `(weight, abscissa)` pairs.
/// Exact for polynomials up to degree 5.
pub const GAUSS_LEGENDRE_N3: [(NativeFloat, NativeFloat); 3] = [
    (0.8888888888888888, 0.0),
    (0.5555555555555556, -0.7745966692414834),
    (0.5555555555555556, 0.7745966692414834),
];

/// 10-point Gauss-Legendre table as `(weight, abscissa)` pairs.
/// Exact for polynomials up to degree 19.
pub const GAUSS_LEGENDRE_N10: [(NativeFloat, NativeFloat); 10] = [
    (0.2955242247147529, -0.1488743389816312),
    (0.2955242247147529, 0.1488743389816312),
    (0.2692667193099963, -0.4333953941292472),
    (0.2692667193099963, 0.4333953941292472),
    (0.2190863625159820, -0.6794095682990244),
    (0.2190863625159820, 0.6794095682990244),
    (0.1494513491505806, -0.8650633666889845),
    (0.1494513491505806, 0.8650633666889845),
    (0.0666713443086881, -0.9739065285171717),
    (0.0666713443086881, 0.9739065285171717),
];

/// Selects one of the built-in quadrature tables.
/// `N3` is cheap enough for per-sample use, `N10` is the accurate reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadratureOrder {
    N3,
    N10,
}

impl QuadratureOrder {
    /// Number of nodes (function evaluations) in the table
    pub const fn nodes(self) -> usize {
        match self {
            QuadratureOrder::N3 => GAUSS_LEGENDRE_N3.len(),
            QuadratureOrder::N10 => GAUSS_LEGENDRE_N10.len(),
        }
    }

    pub fn table(self) -> &'static [(NativeFloat, NativeFloat)] {
        match self {
            QuadratureOrder::N3 => &GAUSS_LEGENDRE_N3,
            QuadratureOrder::N10 => &GAUSS_LEGENDRE_N10,
        }
    }

    pub fn integrate<F, Func>(self, f: Func, a: F, b: F) -> F
    where
        F: Scalar,
        Func: Fn(F) -> F,
    {
        integrate(self.table(), f, a, b)
    }
}

/// Estimate the integral of `f` over [a, b].
/// Every abscissa x_i is mapped from [-1, 1] to [a, b] by `x_i * (b - a)/2 + (b + a)/2`,
/// the weighted sum of samples is scaled back by `(b - a)/2`.
/// `f` should be smooth on [a, b], accuracy degrades with high curvature or singularities.
pub fn integrate<F, Func>(table: &[(NativeFloat, NativeFloat)], f: Func, a: F, b: F) -> F
where
    F: Scalar,
    Func: Fn(F) -> F,
{
    let half = F::from_native(0.5);
    let b_minus_a_over_2 = (b - a) * half;
    let b_plus_a_over_2 = (b + a) * half;

    let mut sum = F::zero();
    for &(weight, abscissa) in table {
        let x = F::from_native(abscissa).mul_add(b_minus_a_over_2, b_plus_a_over_2);
        sum = sum + F::from_native(weight) * f(x);
    }
    sum * b_minus_a_over_2
}

/// 3-point Gauss-Legendre estimate of the integral of `f` over [a, b]
pub fn integrate_n3<F, Func>(f: Func, a: F, b: F) -> F
where
    F: Scalar,
    Func: Fn(F) -> F,
{
    integrate(&GAUSS_LEGENDRE_N3, f, a, b)
}

/// 10-point Gauss-Legendre estimate of the integral of `f` over [a, b]
pub fn integrate_n10<F, Func>(f: Func, a: F, b: F) -> F
where
    F: Scalar,
    Func: Fn(F) -> F,
{
    integrate(&GAUSS_LEGENDRE_N10, f, a, b)
}
