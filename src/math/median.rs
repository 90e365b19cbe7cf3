//! Median computation for background estimation.
//!
//! ## Purpose
//!
//! This module provides the median used directly as a background estimator,
//! as the starting point of the Gaussian fit, and as the sharpening step of
//! the quantized-mode estimator.
//!
//! ## Design notes
//!
//! * **Algorithm**: Uses Quickselect for O(n) median finding.
//! * **Memory**: The in-place variant reorders its input; the borrowing
//!   variant copies once.
//! * **Convention**: Even-length inputs average the two middle values.
//!
//! ## Invariants
//!
//! * The median of a non-empty input lies within `[min, max]` of that input.
//! * Handles even and odd population sizes correctly.
//!
//! ## Non-goals
//!
//! * This module does not handle non-finite values (NaN/Inf).
//! * This module does not provide weighted medians.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// ============================================================================
// Median
// ============================================================================

/// Compute the median in-place using Quickselect.
///
/// Returns zero for an empty slice. The slice is left partially reordered.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 0 {
        // Largest value of the lower half
        let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);
        (lower + upper) / T::from(2.0).unwrap()
    } else {
        upper
    }
}

/// Compute the median of a borrowed slice.
pub fn median<T: Float>(vals: &[T]) -> T {
    let mut scratch: Vec<T> = vals.to_vec();
    median_inplace(&mut scratch)
}
