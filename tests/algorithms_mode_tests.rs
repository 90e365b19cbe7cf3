#![cfg(feature = "dev")]
//! Tests for the histogram-mode and quantized-mode estimators.
//!
//! ## Test Organization
//!
//! 1. **Histogram Mode** - Peak location, uncertainty, ties, invalid input
//! 2. **Quantization** - Truncation toward zero and label ties
//! 3. **Quantized Mode** - Bucket selection and within-bucket median

use approx::assert_relative_eq;

use bgfinder_rs::internals::algorithms::hist_mode::{
    DEFAULT_BINS, MAX_BINS, MIN_BINS, histogram_mode, histogram_mode_sorted,
};
use bgfinder_rs::internals::algorithms::quantized_mode::{label_mode, quantize, quantized_mode};
use bgfinder_rs::internals::primitives::errors::BackgroundError;

// ============================================================================
// Histogram Mode Tests
// ============================================================================

/// Mode is the lower edge of the fullest bin.
#[test]
fn test_histogram_mode_peak() {
    // Bounds 0..10, 10 bins of width 1; bin 2 holds three values.
    let data = [2.5, 10.0, 0.0, 2.5, 1.5, 3.5, 0.0, 2.5];
    let est = histogram_mode(&data, 10).unwrap();

    assert_relative_eq!(est.mode, 2.0);
    // One bin above half maximum: (1 * 1 / 2) / 1.41
    assert_relative_eq!(est.uncertainty, 0.5 / 1.41);
}

/// Sorted and unsorted entry points agree.
#[test]
fn test_histogram_mode_sorted_matches() {
    let data = [2.5, 10.0, 0.0, 2.5, 1.5, 3.5, 0.0, 2.5];
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    assert_eq!(
        histogram_mode(&data, 10).unwrap(),
        histogram_mode_sorted(&sorted, 10).unwrap()
    );
}

/// Equally full bins resolve to the lowest one.
#[test]
fn test_histogram_mode_tie() {
    let data = [0.0, 0.0, 1.5, 1.5, 3.5, 3.5, 10.0];
    let est = histogram_mode(&data, 10).unwrap();
    assert_relative_eq!(est.mode, 1.0);
}

/// Values in the discarded edge bins never form the mode.
#[test]
fn test_histogram_mode_ignores_edge_bins() {
    // Bounds 0..10; most values sit in the first bin, which is zeroed.
    let data = [0.0, 0.0, 0.2, 0.3, 0.4, 0.5, 4.5, 4.6, 10.0];
    let est = histogram_mode(&data, 10).unwrap();
    assert_relative_eq!(est.mode, 4.0);
}

/// Bin counts below the minimum are rejected.
#[test]
fn test_histogram_mode_invalid_bins() {
    let data = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(MIN_BINS, 3);
    assert_eq!(
        histogram_mode(&data, 2),
        Err(BackgroundError::InvalidBins(2.0))
    );
    assert_eq!(
        histogram_mode(&data, 0),
        Err(BackgroundError::InvalidBins(0.0))
    );
}

/// Bin counts above the maximum are rejected before any allocation.
#[test]
fn test_histogram_mode_too_many_bins() {
    let data = [1.0, 2.0, 3.0, 4.0];
    assert!(matches!(
        histogram_mode(&data, MAX_BINS + 1),
        Err(BackgroundError::InvalidBins(_))
    ));
    assert!(matches!(
        histogram_mode_sorted(&data, usize::MAX),
        Err(BackgroundError::InvalidBins(_))
    ));
}

/// Constant samples are degenerate.
#[test]
fn test_histogram_mode_degenerate() {
    let result = histogram_mode(&[7.0; 20], DEFAULT_BINS);
    assert!(matches!(result, Err(BackgroundError::DegenerateSample(_))));
}

// ============================================================================
// Quantization Tests
// ============================================================================

/// Labels truncate toward zero.
#[test]
fn test_quantize_truncates() {
    assert_eq!(quantize(15.0, 0.1).unwrap(), 1);
    assert_eq!(quantize(19.9, 0.1).unwrap(), 1);
    assert_eq!(quantize(-15.0, 0.1).unwrap(), -1);
    assert_eq!(quantize(-5.0, 0.1).unwrap(), 0);
    assert_eq!(quantize(123.0, 1.0).unwrap(), 123);
}

/// Values that overflow the label type are reported.
#[test]
fn test_quantize_overflow() {
    let result = quantize(1e300, 1e10);
    assert!(matches!(result, Err(BackgroundError::InvalidNumericValue(_))));
}

/// Most frequent label wins; ties go to the smallest.
#[test]
fn test_label_mode() {
    assert_eq!(label_mode(&[3, 1, 3, 2]), Some(3));
    assert_eq!(label_mode(&[3, 3, 2, 2, 1]), Some(2));
    assert_eq!(label_mode(&[-4, 5, -4, 5]), Some(-4));
    assert_eq!(label_mode(&[]), None);
}

// ============================================================================
// Quantized Mode Tests
// ============================================================================

/// The median of the winning bucket is returned.
#[test]
fn test_quantized_mode_bucket_median() {
    // Labels (x0.1): 0, 0, 0, 1, 1, 1, 1 -> bucket 1 -> median(11, 12, 13, 14)
    let data = [1.0, 2.0, 3.0, 11.0, 12.0, 13.0, 14.0];
    assert_relative_eq!(quantized_mode(&data, 0.1).unwrap(), 12.5);
}

/// Tied buckets resolve to the lowest label.
#[test]
fn test_quantized_mode_tie() {
    let data = [11.0, 1.0, 12.0, 2.0];
    assert_relative_eq!(quantized_mode(&data, 0.1).unwrap(), 1.5);
}

/// The sharpening step returns original values, not bucket labels.
#[test]
fn test_quantized_mode_full_precision() {
    let data = [101.3, 101.7, 102.9, 250.0, 99.0];
    // Labels (x0.1): 10, 10, 10, 25, 9 -> median(101.3, 101.7, 102.9)
    assert_relative_eq!(quantized_mode(&data, 0.1).unwrap(), 101.7);
}

/// Constant samples are fine for this estimator.
#[test]
fn test_quantized_mode_constant() {
    assert_relative_eq!(quantized_mode(&[42.0; 5], 0.1).unwrap(), 42.0);
}

/// Works for single precision.
#[test]
fn test_quantized_mode_f32() {
    let data = [1.0_f32, 2.0, 3.0, 11.0, 12.0, 13.0, 14.0];
    assert_relative_eq!(quantized_mode(&data, 0.1).unwrap(), 12.5);
}

/// Empty input is rejected.
#[test]
fn test_quantized_mode_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(
        quantized_mode(&empty, 0.1),
        Err(BackgroundError::EmptySample)
    );
}
