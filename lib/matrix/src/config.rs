//! Matrix build configuration
//!
//! Selects the metric and carries the parameters that get bound into the
//! pairwise strategy.

use distmat_core::{validate_order, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minkowski order used when the caller does not supply one
pub const DEFAULT_MINKOWSKI_ORDER: f64 = 3.0;

/// Supported matrix metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Euclidean,
    Manhattan,
    /// Entries are `1 - cosine similarity`
    Cosine,
    Minkowski,
    /// Mixed-type distance; the default for heterogeneous records
    #[default]
    Gower,
    /// Each point is read as the set of its non-missing cells
    Jaccard,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Euclidean,
        Metric::Manhattan,
        Metric::Cosine,
        Metric::Minkowski,
        Metric::Gower,
        Metric::Jaccard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Manhattan => "manhattan",
            Metric::Cosine => "cosine",
            Metric::Minkowski => "minkowski",
            Metric::Gower => "gower",
            Metric::Jaccard => "jaccard",
        }
    }

    /// Whether the metric needs every cell to be numeric
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Metric::Euclidean | Metric::Manhattan | Metric::Cosine | Metric::Minkowski
        )
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Metric::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnsupportedMetric(s.to_string()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for a distance matrix build
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub metric: Metric,
    /// Only used by [`Metric::Minkowski`]
    pub minkowski_order: f64,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            minkowski_order: DEFAULT_MINKOWSKI_ORDER,
        }
    }
}

impl MatrixConfig {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            ..Self::default()
        }
    }

    /// Minkowski configuration with an explicit order
    pub fn minkowski(order: f64) -> Self {
        Self {
            metric: Metric::Minkowski,
            minkowski_order: order,
        }
    }

    /// Parse a metric name, falling back to the default order when none is given
    pub fn from_name(metric: &str, order: Option<f64>) -> Result<Self> {
        Ok(Self {
            metric: metric.parse()?,
            minkowski_order: order.unwrap_or(DEFAULT_MINKOWSKI_ORDER),
        })
    }

    /// Load a configuration from JSON, e.g. `{"metric": "minkowski", "minkowski_order": 4}`
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    /// - The Minkowski order must be finite and at least 1 when Minkowski is selected
    pub fn validate(&self) -> Result<()> {
        if self.metric == Metric::Minkowski {
            validate_order(self.minkowski_order)?;
        }
        Ok(())
    }
}
