//! Histograms with percentile-truncated bounds.
//!
//! ## Purpose
//!
//! This module builds the equal-width histogram used by the histogram-mode
//! estimator. The bin range is clipped to roughly the 1st and 99th
//! percentiles so a handful of outliers cannot stretch the bin width.
//!
//! ## Design notes
//!
//! * **Input**: Works on a sorted slice; bin occupancy is found by binary
//!   search of the bin edges rather than by scanning every value.
//! * **Bounds**: Percentile ranks use integer (floor) index arithmetic:
//!   upper at `n - max(1, n/100)`, lower at `n - 99n/100`.
//! * **Open last bin**: The final bin also absorbs every value above its
//!   lower edge, including the truncated upper tail.
//!
//! ## Invariants
//!
//! * `counts.len()` equals the requested bin count.
//! * `counts` sums to the number of values at or above `lower`.
//! * `width > 0`.
//!
//! ## Non-goals
//!
//! * This module does not sort its input.
//! * This module does not locate the mode (see `algorithms::hist_mode`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::BackgroundError;

// ============================================================================
// Histogram
// ============================================================================

/// Equal-width histogram over a robust value range.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<T> {
    /// Number of values falling in each bin.
    pub counts: Vec<usize>,

    /// Width of every bin.
    pub width: T,

    /// Lower edge of the first bin.
    pub lower: T,
}

impl<T: Float> Histogram<T> {
    /// Minimum number of values needed to place both percentile bounds.
    pub const MIN_POINTS: usize = 3;

    /// Percentile-truncated `(lower, upper)` bounds of a sorted slice.
    pub fn robust_bounds(sorted: &[T]) -> Result<(T, T), BackgroundError> {
        let n = sorted.len();
        if n < Self::MIN_POINTS {
            return Err(BackgroundError::TooFewPoints {
                got: n,
                min: Self::MIN_POINTS,
            });
        }

        let upper = sorted[n - (n / 100).max(1)];
        let lower = sorted[n - 99 * n / 100];

        if upper <= lower {
            return Err(BackgroundError::DegenerateSample(
                "percentile bounds coincide",
            ));
        }

        Ok((lower, upper))
    }

    /// Build a histogram with `nbins` bins from a sorted slice.
    ///
    /// `nbins` is assumed to have been validated by the caller.
    pub fn from_sorted(sorted: &[T], nbins: usize) -> Result<Self, BackgroundError> {
        let (lower, upper) = Self::robust_bounds(sorted)?;
        let width = (upper - lower) / T::from(nbins).unwrap();

        // Cumulative counts at each left edge, plus a sentinel high edge.
        let mut cumulative = Vec::with_capacity(nbins + 1);
        for i in 0..nbins {
            let edge = lower + width * T::from(i).unwrap();
            cumulative.push(sorted.partition_point(|&v| v < edge));
        }
        cumulative.push(sorted.len());

        let counts: Vec<usize> = cumulative.windows(2).map(|w| w[1] - w[0]).collect();

        log::trace!(
            "histogram: {} bins of width {} from {}",
            nbins,
            width.to_f64().unwrap_or(f64::NAN),
            lower.to_f64().unwrap_or(f64::NAN)
        );

        Ok(Self {
            counts,
            width,
            lower,
        })
    }

    /// Left edge of bin `index`.
    #[inline]
    pub fn bin_edge(&self, index: usize) -> T {
        self.lower + self.width * T::from(index).unwrap()
    }

    /// Zero the first and last bins.
    pub fn clear_edge_bins(&mut self) {
        if let Some(first) = self.counts.first_mut() {
            *first = 0;
        }
        if let Some(last) = self.counts.last_mut() {
            *last = 0;
        }
    }

    /// Index of the fullest bin. Ties resolve to the lowest index.
    pub fn peak_bin(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (i, &c) in self.counts.iter().enumerate() {
            match best {
                Some((_, best_count)) if c <= best_count => {}
                _ => best = Some((i, c)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Number of bins whose count exceeds half of `peak_count`.
    ///
    /// Halving uses integer division.
    pub fn bins_above_half(&self, peak_count: usize) -> usize {
        let half = peak_count / 2;
        self.counts.iter().filter(|&&c| c > half).count()
    }
}
