use crate::{Error, Result};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A categorical atom - compared only for equality
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Bool(bool),
    Text(String),
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Bool(b) => write!(f, "{}", b),
            Category::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A single feature value, tagged once when the dataset is ingested
///
/// Numeric values are wrapped in [`OrderedFloat`] so that cells are `Eq + Hash`
/// and can be collected into sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Numeric(OrderedFloat<f64>),
    Categorical(Category),
    Missing,
}

impl Cell {
    #[inline]
    #[must_use]
    pub fn numeric(value: f64) -> Self {
        Cell::Numeric(OrderedFloat(value))
    }

    #[inline]
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Categorical(Category::Text(value.into()))
    }

    #[inline]
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Cell::Categorical(Category::Bool(value))
    }

    /// The numeric value, if this cell holds one
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Numeric(v) => Some(v.into_inner()),
            _ => None,
        }
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Numeric(_))
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Tag a JSON value.
    ///
    /// Numbers become numeric, strings and booleans categorical, `null` missing.
    /// Arrays and objects have no cell representation.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Cell::Missing),
            Value::Bool(b) => Ok(Cell::boolean(*b)),
            Value::String(s) => Ok(Cell::text(s.as_str())),
            Value::Number(n) => n
                .as_f64()
                .map(Cell::numeric)
                .ok_or_else(|| Error::UnsupportedValue(n.to_string())),
            Value::Array(_) | Value::Object(_) => Err(Error::UnsupportedValue(value.to_string())),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::numeric(v)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::numeric(v as f64)
    }
}

impl From<bool> for Cell {
    fn from(v: bool) -> Self {
        Cell::boolean(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::text(v)
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::text(v)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Cell::Missing, Into::into)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Numeric(v) => write!(f, "{}", v),
            Cell::Categorical(c) => write!(f, "{}", c),
            Cell::Missing => write!(f, "null"),
        }
    }
}
