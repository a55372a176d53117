use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unsupported distance metric: {0}")]
    UnsupportedMetric(String),

    #[error("Invalid Minkowski order: {0} (must be finite and >= 1)")]
    InvalidOrder(f64),

    #[error("Invalid point dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Row {row} has {actual} features, expected {expected}")]
    RaggedRow { row: usize, expected: usize, actual: usize },

    #[error("Non-numeric cell at row {row}, column {column}")]
    NonNumericCell { row: usize, column: usize },

    #[error("Unsupported cell value: {0}")]
    UnsupportedValue(String),

    #[error("Cosine similarity is undefined for a zero-magnitude vector")]
    ZeroMagnitude,

    #[error("Cosine similarity is undefined for non-finite coordinates")]
    NonFiniteValue,

    #[error("Gower distance has no feature where both values are present")]
    NoComparableFeatures,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
