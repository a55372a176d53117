//! Distance and similarity functions for numeric points
//!
//! All functions check that both points have the same number of coordinates
//! and return [`Error::DimensionMismatch`] otherwise.

use crate::{Error, Result};
use num_complex::Complex;

/// A coordinate type that can measure the absolute difference to another value.
///
/// For complex coordinates this is the modulus of the complex difference.
pub trait Coordinate: Copy {
    fn abs_delta(self, other: Self) -> f64;
}

macro_rules! impl_real_coordinate (
    ($ty:ty) => (
        impl Coordinate for $ty {
            #[inline]
            fn abs_delta(self, other: Self) -> f64 {
                (self as f64 - other as f64).abs()
            }
        }
    )
);

impl_real_coordinate!(f64);
impl_real_coordinate!(f32);
impl_real_coordinate!(i64);
impl_real_coordinate!(i32);

macro_rules! impl_complex_coordinate (
    ($ty:ty) => (
        impl Coordinate for Complex<$ty> {
            #[inline]
            fn abs_delta(self, other: Self) -> f64 {
                (self - other).norm() as f64
            }
        }
    )
);

impl_complex_coordinate!(f64);
impl_complex_coordinate!(f32);

#[inline]
pub(crate) fn check_dim(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual });
    }
    Ok(())
}

fn abs_deltas<'a, T: Coordinate>(
    a: &'a [T],
    b: &'a [T],
) -> Result<impl Iterator<Item = f64> + 'a> {
    check_dim(a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x.abs_delta(*y)))
}

/// Euclidean (L2) distance: `sqrt(sum(|a_i - b_i|^2))`
pub fn euclidean<T: Coordinate>(a: &[T], b: &[T]) -> Result<f64> {
    Ok(abs_deltas(a, b)?.map(|d| d * d).sum::<f64>().sqrt())
}

/// Manhattan (L1) distance: `sum(|a_i - b_i|)`
pub fn manhattan<T: Coordinate>(a: &[T], b: &[T]) -> Result<f64> {
    Ok(abs_deltas(a, b)?.sum())
}

/// Minkowski (Lp) distance of the given order
///
/// `order` must be finite and at least 1. There is no default here; callers
/// that want one pick it themselves.
///
/// Deltas are scaled by the largest one before raising them to `order`, so
/// large orders do not overflow.
pub fn minkowski<T: Coordinate>(a: &[T], b: &[T], order: f64) -> Result<f64> {
    validate_order(order)?;
    let max = abs_deltas(a, b)?.fold(0.0, f64::max);
    if max == 0.0 || max.is_infinite() {
        return Ok(max);
    }
    let sum: f64 = abs_deltas(a, b)?.map(|d| (d / max).powf(order)).sum();
    Ok(max * sum.powf(order.recip()))
}

/// Reject Minkowski orders for which the result is not a metric
pub fn validate_order(order: f64) -> Result<()> {
    if !order.is_finite() || order < 1.0 {
        return Err(Error::InvalidOrder(order));
    }
    Ok(())
}

/// Cosine similarity in `[-1, 1]`
///
/// A zero-magnitude vector has no direction, so this returns
/// [`Error::ZeroMagnitude`] instead of dividing by zero. Non-finite
/// coordinates return [`Error::NonFiniteValue`].
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dim(a.len(), b.len())?;

    if a.iter().chain(b.iter()).any(|x| !x.is_finite()) {
        return Err(Error::NonFiniteValue);
    }

    // each vector is scaled by its largest coordinate so the squared norms
    // neither overflow nor underflow
    let scale_a = a.iter().fold(0.0, |m: f64, x| m.max(x.abs()));
    let scale_b = b.iter().fold(0.0, |m: f64, x| m.max(x.abs()));
    if scale_a == 0.0 || scale_b == 0.0 {
        return Err(Error::ZeroMagnitude);
    }

    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x / scale_a, y / scale_b))
        .fold((0.0, 0.0, 0.0), |acc, (x, y)| {
            (acc.0 + x * y, acc.1 + x * x, acc.2 + y * y)
        });

    // rounding can push |sim| slightly past 1
    Ok((dot / (norm_a * norm_b).sqrt()).clamp(-1.0, 1.0))
}

/// Cosine distance: `1 - cosine_similarity`, in `[0, 2]`
pub fn cosine_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    Ok(1.0 - cosine_similarity(a, b)?)
}
