//! Pairwise strategies with their metric parameters already bound
//!
//! A strategy is selected once per build from the [`MatrixConfig`] and then
//! evaluated for every pair by index. Any per-dataset preparation (numeric
//! projection, feature ranges, cell sets) happens here, not in the pair loop.

use crate::config::{MatrixConfig, Metric};
use crate::ranges::{compute_ranges, FeatureRanges};
use ahash::RandomState;
use distmat_core::{
    cosine_distance, euclidean, gower_distance, jaccard_distance, manhattan, minkowski, Cell,
    Dataset, Result,
};
use std::collections::HashSet;

type CellSet<'a> = HashSet<&'a Cell, RandomState>;

/// Kernel applied to rows projected to `f64`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericKernel {
    Euclidean,
    Manhattan,
    Minkowski { order: f64 },
    /// `1 - cosine similarity`
    CosineDistance,
}

impl NumericKernel {
    #[inline]
    pub fn eval(self, a: &[f64], b: &[f64]) -> Result<f64> {
        match self {
            NumericKernel::Euclidean => euclidean(a, b),
            NumericKernel::Manhattan => manhattan(a, b),
            NumericKernel::Minkowski { order } => minkowski(a, b, order),
            NumericKernel::CosineDistance => cosine_distance(a, b),
        }
    }
}

/// A metric bound to a prepared view of one dataset
#[derive(Debug)]
pub enum PairwiseStrategy<'a> {
    Numeric {
        kernel: NumericKernel,
        rows: Vec<Vec<f64>>,
    },
    Gower {
        rows: &'a [Vec<Cell>],
        ranges: FeatureRanges,
    },
    Jaccard {
        sets: Vec<CellSet<'a>>,
    },
}

impl<'a> PairwiseStrategy<'a> {
    /// Prepare the strategy for `config.metric` over `dataset`
    pub fn prepare(dataset: &'a Dataset, config: &MatrixConfig) -> Result<Self> {
        config.validate()?;

        let kernel = match config.metric {
            Metric::Gower => {
                return Ok(PairwiseStrategy::Gower {
                    rows: dataset.rows(),
                    ranges: compute_ranges(dataset),
                });
            }
            Metric::Jaccard => {
                let sets: Vec<CellSet<'a>> = dataset
                    .rows()
                    .iter()
                    .map(|row| row.iter().filter(|cell| !cell.is_missing()).collect())
                    .collect();
                return Ok(PairwiseStrategy::Jaccard { sets });
            }
            Metric::Euclidean => NumericKernel::Euclidean,
            Metric::Manhattan => NumericKernel::Manhattan,
            Metric::Minkowski => NumericKernel::Minkowski {
                order: config.minkowski_order,
            },
            Metric::Cosine => NumericKernel::CosineDistance,
        };

        Ok(PairwiseStrategy::Numeric {
            kernel,
            rows: dataset.to_numeric()?,
        })
    }

    /// Number of prepared points
    pub fn len(&self) -> usize {
        match self {
            PairwiseStrategy::Numeric { rows, .. } => rows.len(),
            PairwiseStrategy::Gower { rows, .. } => rows.len(),
            PairwiseStrategy::Jaccard { sets } => sets.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance between points `x` and `y`
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn eval(&self, x: usize, y: usize) -> Result<f64> {
        match self {
            PairwiseStrategy::Numeric { kernel, rows } => kernel.eval(&rows[x], &rows[y]),
            PairwiseStrategy::Gower { rows, ranges } => {
                gower_distance(&rows[x], &rows[y], ranges.as_slice())
            }
            PairwiseStrategy::Jaccard { sets } => Ok(jaccard_distance(&sets[x], &sets[y])),
        }
    }
}
