//! Quantized-mode ("Fraser mode") robust estimation.
//!
//! ## Purpose
//!
//! This module locates the peak of a possibly contaminated distribution by
//! coarse quantization, then recovers full precision by taking the median of
//! the original values that share the winning bucket.
//!
//! ## Design notes
//!
//! * **Three steps**: quantize, take the mode of the labels, then take the
//!   median of the original values carrying that label. The steps are kept
//!   separate; the last one is what sharpens the estimate.
//! * **Truncation**: Labels are `trunc(value * multi)`, i.e. rounded toward
//!   zero, so the bucket around zero is twice as wide as the others.
//! * **Ties**: When several labels are equally frequent the smallest wins.
//!
//! ## Key concepts
//!
//! * **Scale factor**: Smaller `multi` means wider buckets, which is more
//!   robust but less precise. 0.1 to 0.2 works well for sky counts.
//!
//! ## Invariants
//!
//! * The estimate is always one of, or the mean of two of, the input values.
//!
//! ## Non-goals
//!
//! * This module does not validate `multi` (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, format, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::median::median_inplace;
use crate::primitives::errors::BackgroundError;

/// Default quantization scale factor.
pub const DEFAULT_MULTI: f64 = 0.1;

// ============================================================================
// Quantization
// ============================================================================

/// Quantize one value to its bucket label.
#[inline]
pub fn quantize<T: Float>(value: T, multi: T) -> Result<i64, BackgroundError> {
    (value * multi).trunc().to_i64().ok_or_else(|| {
        BackgroundError::InvalidNumericValue(format!(
            "{} cannot be quantized with scale {}",
            value.to_f64().unwrap_or(f64::NAN),
            multi.to_f64().unwrap_or(f64::NAN)
        ))
    })
}

/// Most frequent label; ties resolve to the smallest label.
pub fn label_mode(labels: &[i64]) -> Option<i64> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    // Ascending iteration plus a strict comparison keeps the smallest label.
    let mut best: Option<(i64, usize)> = None;
    for (label, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}

// ============================================================================
// Estimation
// ============================================================================

/// Estimate the background as the median of the most populated bucket.
pub fn quantized_mode<T: Float>(values: &[T], multi: T) -> Result<T, BackgroundError> {
    if values.is_empty() {
        return Err(BackgroundError::EmptySample);
    }

    let labels = values
        .iter()
        .map(|&v| quantize(v, multi))
        .collect::<Result<Vec<i64>, _>>()?;

    let winner = label_mode(&labels).ok_or(BackgroundError::EmptySample)?;

    let mut members: Vec<T> = values
        .iter()
        .zip(&labels)
        .filter(|&(_, &label)| label == winner)
        .map(|(&v, _)| v)
        .collect();

    Ok(median_inplace(&mut members))
}
