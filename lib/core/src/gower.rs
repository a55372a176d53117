//! Gower distance for mixed-type records
//!
//! Numeric features contribute their absolute difference scaled by the
//! feature's range; every other feature contributes 0 on a match and 1 on a
//! mismatch. The sum is divided by the number of features where both values
//! are present, so a missing value can add to the numerator (a mismatch
//! against a present value) without adding to the denominator.

use crate::distance::check_dim;
use crate::{Cell, Error, Result};

/// Per-feature contribution to the Gower sum
#[inline]
pub fn feature_distance(a: &Cell, b: &Cell, range: f64) -> f64 {
    match (a, b) {
        (Cell::Numeric(x), Cell::Numeric(y)) => {
            if range == 0.0 {
                0.0
            } else {
                (x.into_inner() - y.into_inner()).abs() / range
            }
        }
        _ => {
            if a == b {
                0.0
            } else {
                1.0
            }
        }
    }
}

/// Gower distance between two records given per-feature ranges
///
/// Returns [`Error::NoComparableFeatures`] when no feature has a value on
/// both sides.
pub fn gower_distance(a: &[Cell], b: &[Cell], ranges: &[f64]) -> Result<f64> {
    check_dim(a.len(), b.len())?;
    check_dim(a.len(), ranges.len())?;

    let (distance, weight) = a
        .iter()
        .zip(b.iter())
        .zip(ranges.iter())
        .fold((0.0, 0usize), |(distance, weight), ((x, y), range)| {
            let present = !x.is_missing() && !y.is_missing();
            (
                distance + feature_distance(x, y, *range),
                weight + usize::from(present),
            )
        });

    if weight == 0 {
        return Err(Error::NoComparableFeatures);
    }
    Ok(distance / weight as f64)
}
