// Integration tests for distmat
use distmat::prelude::*;
use distmat::{
    cosine_similarity, cosine_similarity_matrix, euclidean, gower_distance, jaccard_distance,
    manhattan, minkowski, pairwise, Complex,
};
use parking_lot::Mutex;
use serde_json::json;
use std::collections::HashSet;
use std::io;
use std::sync::Arc;

/// Collects formatted tracing output in memory
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

fn mixed_dataset() -> Dataset {
    Dataset::from_json(&json!([
        [34, "engineer", true, 72000.0],
        [29, "designer", false, 58000.0],
        [45, "engineer", null, 91000.0],
        [52, "manager", true, null],
        [23, "designer", false, 41000.0]
    ]))
    .unwrap()
}

fn numeric_dataset() -> Dataset {
    Dataset::from_numeric(&[
        [1.0, 2.0, 3.0],
        [4.0, 6.0, 8.0],
        [-1.0, 0.5, 2.0],
        [0.0, 3.0, -2.0],
        [7.0, 7.0, 7.0],
    ])
    .unwrap()
}

#[test]
fn test_reference_values() {
    assert_eq!(euclidean(&[1.0, 2.0], &[4.0, 6.0]).unwrap(), 5.0);
    assert_eq!(manhattan(&[1.0, 2.0], &[4.0, 6.0]).unwrap(), 7.0);
    assert!((minkowski(&[1.0, 2.0], &[4.0, 6.0], 3.0).unwrap() - 4.497941445275415).abs() < 1e-9);

    assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
    assert_eq!(cosine_similarity(&[1.0, 1.0], &[2.0, 2.0]).unwrap(), 1.0);
    assert_eq!(cosine_similarity(&[1.0, 1.0], &[-1.0, -1.0]).unwrap(), -1.0);

    let a: HashSet<i32> = [1, 2, 3].into_iter().collect();
    let b: HashSet<i32> = [2, 3, 4].into_iter().collect();
    assert_eq!(jaccard_distance(&a, &b), 0.5);
    assert_eq!(jaccard_distance(&HashSet::<i32>::new(), &HashSet::new()), 0.0);

    let p1: Vec<Cell> = vec![1.0.into(), 2.0.into(), 3.0.into()];
    let p2: Vec<Cell> = vec![4.0.into(), 5.0.into(), 6.0.into()];
    assert_eq!(gower_distance(&p1, &p2, &[3.0, 3.0, 3.0]).unwrap(), 1.0);

    let cats: Vec<Cell> = vec!["a".into(), "b".into(), "c".into()];
    assert_eq!(gower_distance(&cats, &cats, &[0.0, 0.0, 0.0]).unwrap(), 0.0);
}

#[test]
fn test_every_metric_symmetric_with_zero_diagonal() {
    let data = numeric_dataset();
    for metric in Metric::ALL {
        let m = build_matrix_with(&data, &MatrixConfig::new(metric)).unwrap();
        assert_eq!(m.len(), data.len());
        assert!(m.is_symmetric(), "{} matrix not symmetric", metric);
        for x in 0..m.len() {
            assert_eq!(m[(x, x)], 0.0, "{} diagonal not zero", metric);
        }
        assert!(m.as_slice().iter().all(|v| v.is_finite() && *v >= 0.0));
    }
}

#[test]
fn test_minkowski_matches_l1_and_l2_matrices() {
    let data = numeric_dataset();
    let l1 = build_matrix(&data, "manhattan", None).unwrap();
    let l2 = build_matrix(&data, "euclidean", None).unwrap();
    let m1 = build_matrix(&data, "minkowski", Some(1.0)).unwrap();
    let m2 = build_matrix(&data, "minkowski", Some(2.0)).unwrap();

    for (a, b) in l1.as_slice().iter().zip(m1.as_slice()) {
        assert!((a - b).abs() < 1e-9);
    }
    for (a, b) in l2.as_slice().iter().zip(m2.as_slice()) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn test_euclidean_triangle_inequality() {
    let m = build_matrix(&numeric_dataset(), "euclidean", None).unwrap();
    let n = m.len();
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                assert!(m[(x, z)] <= m[(x, y)] + m[(y, z)] + 1e-12);
            }
        }
    }
}

#[test]
fn test_gower_on_mixed_records() {
    let data = mixed_dataset();
    let ranges = compute_ranges(&data);
    assert_eq!(ranges.as_slice(), &[29.0, 0.0, 0.0, 50000.0]);

    let m = build_matrix(&data, "gower", None).unwrap();
    assert!(m.is_symmetric());

    // rows 0 and 2: age 11/29, same job, bool vs null mismatch (unweighted), salary 19000/50000
    let expected = (11.0 / 29.0 + 0.0 + 1.0 + 19000.0 / 50000.0) / 3.0;
    assert!((m[(0, 2)] - expected).abs() < 1e-12);
}

#[test]
fn test_gower_is_the_default_metric() {
    let data = mixed_dataset();
    let default = build_matrix_with(&data, &MatrixConfig::default()).unwrap();
    let named = build_matrix(&data, "gower", None).unwrap();
    assert_eq!(default, named);
}

#[test]
fn test_numeric_metric_on_mixed_data_fails() {
    let err = build_matrix(&mixed_dataset(), "euclidean", None).unwrap_err();
    assert_eq!(err, Error::NonNumericCell { row: 0, column: 1 });
}

#[test]
fn test_jaccard_matrix_over_cells() {
    let data = Dataset::from_json(&json!([
        ["red", "green", "blue"],
        ["green", "blue", "yellow"],
        ["red", "red", null]
    ]))
    .unwrap();
    let m = build_matrix(&data, "jaccard", None).unwrap();
    assert_eq!(m[(0, 1)], 0.5);
    assert!((m[(0, 2)] - (1.0 - 1.0 / 3.0)).abs() < 1e-12);
    assert_eq!(m[(1, 2)], 1.0);
}

#[test]
fn test_unsupported_metric_returns_no_matrix() {
    let result = build_matrix(&numeric_dataset(), "mahalanobis", None);
    assert!(matches!(result, Err(Error::UnsupportedMetric(name)) if name == "mahalanobis"));
}

#[test]
fn test_invalid_minkowski_order() {
    let result = build_matrix(&numeric_dataset(), "minkowski", Some(0.5));
    assert_eq!(result.unwrap_err(), Error::InvalidOrder(0.5));
}

#[test]
fn test_gower_without_comparable_features_fails() {
    let data = Dataset::from_json(&json!([[1, null], [null, "x"]])).unwrap();
    assert_eq!(
        build_matrix(&data, "gower", None).unwrap_err(),
        Error::NoComparableFeatures
    );
}

#[test]
fn test_builds_are_bit_identical() {
    let data = mixed_dataset();
    for metric in ["gower", "jaccard"] {
        let first = build_matrix(&data, metric, None).unwrap();
        let second = build_matrix(&data, metric, None).unwrap();
        let bits =
            |m: &DistanceMatrix| m.as_slice().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second));
    }
}

#[test]
fn test_cosine_similarity_matrix_has_unit_diagonal() {
    let m = cosine_similarity_matrix(&numeric_dataset()).unwrap();
    for x in 0..m.len() {
        assert_eq!(m[(x, x)], 1.0);
    }
    assert!(m.as_slice().iter().all(|v| (-1.0..=1.0).contains(v)));
}

#[test]
fn test_complex_points_via_pairwise() {
    let points = vec![
        vec![Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)],
        vec![Complex::new(5.0, 6.0), Complex::new(7.0, 8.0)],
        vec![Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)],
    ];
    let m = pairwise(&points, |a, b| euclidean(a, b)).unwrap();
    assert!((m[(0, 1)] - 8.0).abs() < 1e-9);
    assert_eq!(m[(0, 2)], 0.0);
}

#[test]
fn test_build_emits_tracing_events() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let m = build_matrix(&mixed_dataset(), "gower", None).unwrap();
        assert_eq!(m.len(), 5);
    });

    let output = logs.contents();
    assert!(output.contains("building distance matrix"), "{}", output);
    assert!(output.contains("points=5"), "{}", output);
    assert_eq!(output.matches("feature range").count(), 4, "{}", output);
}
