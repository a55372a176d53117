//! # distmat
//!
//! Pairwise distance metrics and symmetric distance matrices.
//!
//! distmat computes distances between numeric vectors, mixed-type records and
//! sets, and assembles them into a symmetric matrix over a dataset for
//! downstream clustering and analysis.
//!
//! ## Quick Start
//!
//! ```rust
//! use distmat::prelude::*;
//!
//! let data = Dataset::from_numeric(&[[1.0, 2.0], [4.0, 6.0], [0.0, 0.0]]).unwrap();
//!
//! let matrix = build_matrix(&data, "euclidean", None).unwrap();
//! assert_eq!(matrix[(0, 1)], 5.0);
//! assert!(matrix.is_symmetric());
//!
//! // Minkowski with an explicit order
//! let matrix = build_matrix_with(&data, &MatrixConfig::minkowski(1.0)).unwrap();
//! assert_eq!(matrix[(0, 1)], 7.0);
//! ```
//!
//! ## Crate Structure
//!
//! distmat is composed of two crates:
//!
//! - [`distmat-core`](https://docs.rs/distmat-core) - Cells, datasets and metric functions
//! - [`distmat-matrix`](https://docs.rs/distmat-matrix) - Feature ranges, metric strategies
//!   and matrix assembly
//!
//! ## Metrics
//!
//! - **Euclidean / Manhattan / Minkowski**: Lp distances, real or complex coordinates
//! - **Cosine**: similarity in `[-1, 1]`; matrices hold `1 - similarity`
//! - **Jaccard**: set distance, two empty sets are at distance 0
//! - **Gower**: mixed numeric/categorical records with missing values

// Re-export core types
pub use distmat_core::{
    cosine_distance, cosine_similarity, euclidean, gower_distance, jaccard_distance, manhattan,
    minkowski, Category, Cell, Complex, Coordinate, Dataset, Error, Result,
};

// Re-export matrix assembly
pub use distmat_matrix::{
    build_matrix, build_matrix_for, build_matrix_with, compute_ranges, cosine_similarity_matrix,
    pairwise, DistanceMatrix, FeatureRanges, MatrixConfig, Metric, DEFAULT_MINKOWSKI_ORDER,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        build_matrix, build_matrix_with, compute_ranges, Cell, Dataset, DistanceMatrix, Error,
        MatrixConfig, Metric, Result,
    };
}
