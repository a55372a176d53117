//! Per-feature ranges used to normalize numeric differences in Gower distance

use distmat_core::Dataset;
use serde::Serialize;
use tracing::trace;

/// Immutable per-feature `max - min` over the numeric cells of each column
///
/// A column without any numeric cell is treated as categorical and gets a
/// range of 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRanges {
    ranges: Vec<f64>,
}

impl FeatureRanges {
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.ranges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    #[inline]
    pub fn get(&self, feature: usize) -> Option<f64> {
        self.ranges.get(feature).copied()
    }
}

/// Compute the range of every feature column.
///
/// Cells are inspected individually, so columns that interleave numeric and
/// categorical values still get a range over their numeric part.
pub fn compute_ranges(dataset: &Dataset) -> FeatureRanges {
    let ranges = (0..dataset.dim())
        .map(|feature| {
            let bounds = dataset
                .column(feature)
                .filter_map(|cell| cell.as_f64())
                .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                    Some((min, max)) => Some((min.min(v), max.max(v))),
                    None => Some((v, v)),
                });
            let range = bounds.map_or(0.0, |(min, max)| max - min);
            trace!(feature, range, numeric = bounds.is_some(), "feature range");
            range
        })
        .collect();

    FeatureRanges { ranges }
}
