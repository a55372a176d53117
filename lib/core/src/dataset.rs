use crate::{Cell, Error, Result};
use serde::Serialize;
use serde_json::Value;

/// An n x d table of tagged cells
///
/// Every row has the same number of features; this is checked once on
/// construction so metric code can rely on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dataset {
    rows: Vec<Vec<Cell>>,
    dim: usize,
}

impl Dataset {
    /// Create a dataset from rows of cells.
    ///
    /// The first row fixes the dimension; any row of a different width is rejected.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let dim = rows.first().map_or(0, Vec::len);
        if let Some((row, actual)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != dim)
        {
            return Err(Error::RaggedRow { row, expected: dim, actual });
        }
        Ok(Self { rows, dim })
    }

    /// Create a purely numeric dataset
    pub fn from_numeric<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        Self::new(
            rows.iter()
                .map(|r| r.as_ref().iter().copied().map(Cell::numeric).collect())
                .collect(),
        )
    }

    /// Create a dataset from a JSON array of arrays, tagging each value
    pub fn from_json(value: &Value) -> Result<Self> {
        let rows = value
            .as_array()
            .ok_or_else(|| Error::UnsupportedValue("dataset must be a JSON array".to_string()))?;

        let mut cells = Vec::with_capacity(rows.len());
        for row in rows {
            let row = row.as_array().ok_or_else(|| {
                Error::UnsupportedValue(format!("row must be a JSON array: {}", row))
            })?;
            cells.push(row.iter().map(Cell::from_json).collect::<Result<Vec<_>>>()?);
        }
        Self::new(cells)
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of features per point
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Iterate over the cells of one feature column
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// Project every row into an `f64` vector.
    ///
    /// Fails on the first cell that is not numeric.
    pub fn to_numeric(&self) -> Result<Vec<Vec<f64>>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(column, cell)| {
                        cell.as_f64().ok_or(Error::NonNumericCell { row, column })
                    })
                    .collect::<Result<Vec<f64>>>()
            })
            .collect()
    }
}
