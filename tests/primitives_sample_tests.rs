//! Tests for sample construction and validation.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Slices, vectors, and row-major flattening
//! 2. **Validation** - Empty and non-finite input

use bgfinder_rs::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

/// Values keep their original order.
#[test]
fn test_sample_preserves_order() {
    let sample = Sample::new(&[3.0, 1.0, 2.0]).unwrap();
    assert_eq!(sample.values(), &[3.0, 1.0, 2.0]);
    assert_eq!(sample.len(), 3);
    assert!(!sample.is_empty());
}

/// Sorting returns a copy and leaves the sample untouched.
#[test]
fn test_sample_sorted_copy() {
    let sample = Sample::from_vec(vec![3.0, -1.0, 2.0, 2.0]).unwrap();
    assert_eq!(sample.sorted(), vec![-1.0, 2.0, 2.0, 3.0]);
    assert_eq!(sample.values(), &[3.0, -1.0, 2.0, 2.0]);
}

/// Rows are flattened in row-major order, ragged rows included.
#[test]
fn test_sample_from_rows() {
    let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0], vec![], vec![5.0, 6.0]];
    let sample = Sample::from_rows(&rows).unwrap();
    assert_eq!(sample.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

/// Fixed-size arrays work as rows.
#[test]
fn test_sample_from_array_rows() {
    let cutout = [[1.0_f32, 2.0], [3.0, 4.0]];
    let sample = Sample::from_rows(&cutout).unwrap();
    assert_eq!(sample.into_inner(), vec![1.0, 2.0, 3.0, 4.0]);
}

/// A sample dereferences to a slice.
#[test]
fn test_sample_deref() {
    let sample = Sample::new(&[1.0, 2.0, 3.0]).unwrap();
    let total: f64 = sample.iter().sum();
    assert_eq!(total, 6.0);
    assert_eq!(sample[1], 2.0);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Empty input is rejected.
#[test]
fn test_sample_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(Sample::new(&empty), Err(BackgroundError::EmptySample));

    let rows: Vec<Vec<f64>> = vec![vec![], vec![]];
    assert_eq!(Sample::from_rows(&rows), Err(BackgroundError::EmptySample));
}

/// NaN is rejected with its position.
#[test]
fn test_sample_nan() {
    let result = Sample::new(&[1.0, f64::NAN, 3.0]);
    assert_eq!(
        result,
        Err(BackgroundError::InvalidNumericValue(
            "sample[1]=NaN".to_string()
        ))
    );
}

/// Infinities are rejected.
#[test]
fn test_sample_infinite() {
    let result = Sample::new(&[f64::INFINITY, 1.0]);
    assert_eq!(
        result,
        Err(BackgroundError::InvalidNumericValue(
            "sample[0]=inf".to_string()
        ))
    );

    assert!(matches!(
        Sample::from_vec(vec![1.0_f32, f32::NEG_INFINITY]),
        Err(BackgroundError::InvalidNumericValue(_))
    ));
}
