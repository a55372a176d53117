use serde::Serialize;
use std::ops::Index;

/// A square n x n table of pairwise values, stored row-major
///
/// Only constructed once every entry is computed, so a failed build never
/// exposes a partially filled matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    pub(crate) fn from_raw(n: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), n * n);
        Self { n, data }
    }

    /// Number of points (rows and columns)
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x < self.n && y < self.n {
            Some(self.data[x * self.n + y])
        } else {
            None
        }
    }

    #[inline]
    pub fn row(&self, x: usize) -> Option<&[f64]> {
        if x < self.n {
            Some(&self.data[x * self.n..(x + 1) * self.n])
        } else {
            None
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.n == 0 {
            return Vec::new();
        }
        self.data.chunks(self.n).map(<[f64]>::to_vec).collect()
    }

    /// Exact symmetry check, bit for bit
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|x| (x + 1..self.n).all(|y| self[(x, y)] == self[(y, x)]))
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f64;

    fn index(&self, (x, y): (usize, usize)) -> &f64 {
        assert!(
            x < self.n && y < self.n,
            "index ({}, {}) out of bounds for {}x{} matrix",
            x,
            y,
            self.n,
            self.n
        );
        &self.data[x * self.n + y]
    }
}
