//! # distmat Core
//!
//! Core library for distmat.
//!
//! This crate provides the value model and the pairwise metric functions:
//!
//! - [`Cell`] - A feature value tagged as numeric, categorical, or missing
//! - [`Dataset`] - An n x d table of cells with a checked shape
//! - [`distance`] - Euclidean, Manhattan, Minkowski and Cosine over numeric points
//! - [`set`] - Jaccard distance over sets
//! - [`gower`] - Gower distance over mixed-type records
//!
//! ## Example
//!
//! ```rust
//! use distmat_core::{euclidean, gower_distance, Cell};
//!
//! assert_eq!(euclidean(&[1.0, 2.0], &[4.0, 6.0]).unwrap(), 5.0);
//!
//! let a = vec![Cell::numeric(1.0), Cell::text("cat")];
//! let b = vec![Cell::numeric(4.0), Cell::text("cat")];
//! assert_eq!(gower_distance(&a, &b, &[3.0, 0.0]).unwrap(), 0.5);
//! ```

pub mod cell;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod gower;
pub mod set;

pub use cell::{Category, Cell};
pub use dataset::Dataset;
pub use distance::{
    cosine_distance, cosine_similarity, euclidean, manhattan, minkowski, validate_order, Coordinate,
};
pub use error::{Error, Result};
pub use gower::gower_distance;
pub use num_complex::Complex;
pub use set::jaccard_distance;
