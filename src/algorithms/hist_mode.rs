//! Histogram-based mode estimation.
//!
//! ## Purpose
//!
//! This module estimates the mode of a sample as the lower edge of the
//! fullest histogram bin, together with a Gaussian-equivalent uncertainty
//! derived from the width of the peak.
//!
//! ## Design notes
//!
//! * **Edge bins**: The first and last bins are zeroed before the peak is
//!   located; they collect the truncated percentile tails.
//! * **Uncertainty**: Bins above half maximum give a full width; half of it
//!   divided by 1.41 approximates a standard deviation.
//! * **Ties**: The lowest-index bin wins.
//!
//! ## Key concepts
//!
//! * **Mode**: `peak_index * width + lower`.
//! * **Uncertainty**: `(bins_above_half * width / 2) / 1.41`.
//!
//! ## Invariants
//!
//! * The mode lies within the histogram's percentile-truncated range.
//! * The uncertainty is non-negative.
//!
//! ## Non-goals
//!
//! * This module does not interpolate within the peak bin.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::math::histogram::Histogram;
use crate::primitives::errors::BackgroundError;

/// Default number of histogram bins.
pub const DEFAULT_BINS: usize = 50;

/// Smallest usable bin count; the two edge bins are always discarded.
///
/// One or two bins would leave nothing after the edge bins are cleared, so
/// such counts are rejected with `InvalidBins` rather than answered with the
/// lower bound.
pub const MIN_BINS: usize = 3;

/// Largest accepted bin count.
pub const MAX_BINS: usize = 1 << 24;

/// Divisor turning a half width at half maximum into a sigma-like spread.
const HWHM_TO_SIGMA: f64 = 1.41;

// ============================================================================
// Mode Estimate
// ============================================================================

/// A mode together with its estimated uncertainty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeEstimate<T> {
    /// Estimated mode.
    pub mode: T,

    /// Gaussian-equivalent spread of the peak.
    pub uncertainty: T,
}

// ============================================================================
// Estimation
// ============================================================================

/// Estimate the mode of unsorted `values` with an `nbins` histogram.
///
/// `nbins` must lie in `MIN_BINS..=MAX_BINS`.
pub fn histogram_mode<T: Float>(
    values: &[T],
    nbins: usize,
) -> Result<ModeEstimate<T>, BackgroundError> {
    let mut sorted: Vec<T> = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
    histogram_mode_sorted(&sorted, nbins)
}

/// Estimate the mode of an already sorted slice.
pub fn histogram_mode_sorted<T: Float>(
    sorted: &[T],
    nbins: usize,
) -> Result<ModeEstimate<T>, BackgroundError> {
    if !(MIN_BINS..=MAX_BINS).contains(&nbins) {
        return Err(BackgroundError::InvalidBins(nbins as f64));
    }

    let mut hist = Histogram::from_sorted(sorted, nbins)?;
    hist.clear_edge_bins();

    let peak = hist
        .peak_bin()
        .ok_or(BackgroundError::InvalidBins(nbins as f64))?;
    let peak_count = hist.counts[peak];

    let mode = hist.bin_edge(peak);
    let above_half = T::from(hist.bins_above_half(peak_count)).unwrap();
    let two = T::from(2.0).unwrap();
    let uncertainty = (above_half * hist.width / two) / T::from(HWHM_TO_SIGMA).unwrap();

    Ok(ModeEstimate { mode, uncertainty })
}
