//! # distmat Matrix
//!
//! Symmetric distance matrix assembly over a [`Dataset`](distmat_core::Dataset).
//!
//! ## Features
//!
//! - **Metric selection**: a [`Metric`] parsed from its name, with parameters in [`MatrixConfig`]
//! - **Feature statistics**: per-feature ranges for Gower distance, computed once per build
//! - **Bound strategies**: the metric and its parameters are resolved once, not per pair
//! - **Halved loop**: each off-diagonal pair is evaluated once and mirrored
//!
//! ## Example
//!
//! ```rust
//! use distmat_core::Dataset;
//! use distmat_matrix::build_matrix;
//! use serde_json::json;
//!
//! let data = Dataset::from_json(&json!([
//!     [1, "cat", 3],
//!     [4, "dog", 6]
//! ])).unwrap();
//!
//! let matrix = build_matrix(&data, "gower", None).unwrap();
//! assert_eq!(matrix[(0, 1)], 1.0);
//! assert_eq!(matrix[(1, 1)], 0.0);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Dataset   │────>│  Strategy   │────>│   Matrix    │
//! │   (cells)   │     │ (bound fn)  │     │  (n x n)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                    ^
//!       │   ┌─────────────┐  │
//!       └──>│   Ranges    │──┘
//!           │  (gower)    │
//!           └─────────────┘
//! ```

pub mod builder;
pub mod config;
pub mod matrix;
pub mod ranges;
pub mod strategy;

pub use builder::{
    build_matrix, build_matrix_for, build_matrix_with, cosine_similarity_matrix, fill_symmetric,
    pairwise,
};
pub use config::{MatrixConfig, Metric, DEFAULT_MINKOWSKI_ORDER};
pub use matrix::DistanceMatrix;
pub use ranges::{compute_ranges, FeatureRanges};
pub use strategy::{NumericKernel, PairwiseStrategy};
