//! Set-based distance: Jaccard

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Jaccard distance: `1 - |a ∩ b| / |a ∪ b|`
///
/// Two empty sets are treated as identical and yield `0.0`.
pub fn jaccard_distance<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> f64
where
    T: Eq + Hash,
    S: BuildHasher,
{
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 0.0;
    }
    1.0 - intersection as f64 / union as f64
}
