//! Validated measurement samples.
//!
//! ## Purpose
//!
//! This module defines [`Sample`], the immutable flat sequence of values every
//! estimator operates on. Callers holding image cutouts or other shaped data
//! flatten them here, once, before any statistic is computed.
//!
//! ## Design notes
//!
//! * **Validated once**: Emptiness and finiteness are checked at construction,
//!   so estimators never see NaN or infinities.
//! * **Order preserving**: Values keep the caller's order; estimators that need
//!   sorted data sort their own copy.
//!
//! ## Invariants
//!
//! * A `Sample` is never empty.
//! * Every value in a `Sample` is finite.
//!
//! ## Non-goals
//!
//! * This module does not detect degenerate (zero-spread) samples; whether a
//!   sample is degenerate depends on the estimator.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::cmp::Ordering::Equal;
use core::ops::Deref;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::BackgroundError;

// ============================================================================
// Sample
// ============================================================================

/// A non-empty, finite, flattened sequence of measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T> {
    values: Vec<T>,
}

impl<T: Float> Sample<T> {
    /// Build a sample by copying a flat slice.
    pub fn new(values: &[T]) -> Result<Self, BackgroundError> {
        Self::from_vec(values.to_vec())
    }

    /// Build a sample that takes ownership of `values`.
    pub fn from_vec(values: Vec<T>) -> Result<Self, BackgroundError> {
        if values.is_empty() {
            return Err(BackgroundError::EmptySample);
        }

        if let Some((i, &val)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(BackgroundError::InvalidNumericValue(format!(
                "sample[{}]={}",
                i,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(Self { values })
    }

    /// Build a sample by flattening rows in row-major order.
    ///
    /// Rows may have different lengths; only the total must be non-zero.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, BackgroundError> {
        let total = rows.iter().map(|r| r.as_ref().len()).sum();
        let mut values = Vec::with_capacity(total);
        for row in rows {
            values.extend_from_slice(row.as_ref());
        }
        Self::from_vec(values)
    }

    /// Number of values in the sample.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values in their original order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// A sorted copy of the values.
    pub fn sorted(&self) -> Vec<T> {
        let mut sorted = self.values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
        sorted
    }

    /// Consume the sample and return its values.
    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}

impl<T> Deref for Sample<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.values
    }
}
