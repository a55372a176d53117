//! Distance matrix assembly
//!
//! Every off-diagonal pair is evaluated exactly once and mirrored; the
//! diagonal is written directly without calling the metric. Errors abort the
//! build before a [`DistanceMatrix`] is constructed.

use crate::config::{MatrixConfig, Metric};
use crate::matrix::DistanceMatrix;
use crate::strategy::PairwiseStrategy;
use distmat_core::{cosine_similarity, Dataset, Result};
use tracing::debug;

/// Fill a symmetric n x n matrix from `distance(x, y)` evaluated for `x < y`.
///
/// `diagonal` is written to every `[x][x]` entry as-is.
pub fn fill_symmetric<F>(n: usize, diagonal: f64, mut distance: F) -> Result<DistanceMatrix>
where
    F: FnMut(usize, usize) -> Result<f64>,
{
    let mut data = vec![0.0; n * n];
    for x in 0..n {
        data[x * n + x] = diagonal;
        for y in (x + 1)..n {
            let d = distance(x, y)?;
            data[x * n + y] = d;
            data[y * n + x] = d;
        }
    }
    Ok(DistanceMatrix::from_raw(n, data))
}

/// Zero-diagonal distance matrix over arbitrary points
///
/// Useful for point types the [`Dataset`] model does not cover, e.g. complex
/// vectors with [`distmat_core::euclidean`].
pub fn pairwise<P, F>(points: &[P], distance: F) -> Result<DistanceMatrix>
where
    F: Fn(&P, &P) -> Result<f64>,
{
    fill_symmetric(points.len(), 0.0, |x, y| distance(&points[x], &points[y]))
}

/// Build a distance matrix with the given configuration
pub fn build_matrix_with(dataset: &Dataset, config: &MatrixConfig) -> Result<DistanceMatrix> {
    debug!(
        points = dataset.len(),
        features = dataset.dim(),
        metric = %config.metric,
        "building distance matrix"
    );

    let strategy = PairwiseStrategy::prepare(dataset, config)?;
    let matrix = fill_symmetric(strategy.len(), 0.0, |x, y| strategy.eval(x, y))?;

    debug!(points = matrix.len(), metric = %config.metric, "distance matrix built");
    Ok(matrix)
}

/// Build a distance matrix for a metric given by name.
///
/// `order` is only read for `minkowski` and defaults to
/// [`DEFAULT_MINKOWSKI_ORDER`](crate::config::DEFAULT_MINKOWSKI_ORDER).
pub fn build_matrix(dataset: &Dataset, metric: &str, order: Option<f64>) -> Result<DistanceMatrix> {
    let config = MatrixConfig::from_name(metric, order)?;
    build_matrix_with(dataset, &config)
}

/// Raw cosine similarity matrix, diagonal exactly 1
pub fn cosine_similarity_matrix(dataset: &Dataset) -> Result<DistanceMatrix> {
    debug!(points = dataset.len(), features = dataset.dim(), "building cosine similarity matrix");
    let rows = dataset.to_numeric()?;
    fill_symmetric(rows.len(), 1.0, |x, y| cosine_similarity(&rows[x], &rows[y]))
}

/// Convenience: build with [`Metric`] and the default parameters
pub fn build_matrix_for(dataset: &Dataset, metric: Metric) -> Result<DistanceMatrix> {
    build_matrix_with(dataset, &MatrixConfig::new(metric))
}
