//! Sums, means, and squared deviations.
//!
//! ## Purpose
//!
//! This module provides the accumulation kernels behind the mean estimator,
//! the population standard deviation, and the Gaussian negative
//! log-likelihood. The likelihood is evaluated hundreds of times per fit, so
//! these loops dominate the cost of the Gaussian path.
//!
//! ## Design notes
//!
//! * **Specialised**: [`FloatStats`] is implemented per float type; `f64`
//!   uses `wide::f64x2` lanes, `f32` uses a scalar loop.
//! * **Widening**: `sum_sq_dev_f64` accumulates in `f64` for every type, so
//!   likelihood differences stay resolvable for single-precision samples.
//! * **Two-pass**: Standard deviation is computed around the mean rather than
//!   from raw power sums.
//!
//! ## Invariants
//!
//! * `sum_sq_dev` is non-negative for finite input.
//! * Empty input yields zero for every accumulator.
//!
//! ## Non-goals
//!
//! * This module does not provide higher moments or weighted variants.

// External dependencies
use num_traits::Float;
use wide::f64x2;

// ============================================================================
// FloatStats Trait
// ============================================================================

/// Float types with specialised accumulation kernels.
pub trait FloatStats: Float + 'static {
    /// Sum of all values.
    fn sum(vals: &[Self]) -> Self;

    /// Sum of squared deviations from `center`: `Σ (x_i - center)²`.
    fn sum_sq_dev(vals: &[Self], center: Self) -> Self;

    /// Squared deviations accumulated in double precision.
    fn sum_sq_dev_f64(vals: &[Self], center: f64) -> f64;
}

impl FloatStats for f64 {
    #[inline]
    fn sum(vals: &[f64]) -> f64 {
        let chunks = vals.chunks_exact(2);
        let tail = chunks.remainder();

        let mut acc = f64x2::splat(0.0);
        for pair in chunks {
            acc += f64x2::new([pair[0], pair[1]]);
        }

        tail.iter().fold(acc.reduce_add(), |s, &v| s + v)
    }

    #[inline]
    fn sum_sq_dev(vals: &[f64], center: f64) -> f64 {
        let chunks = vals.chunks_exact(2);
        let tail = chunks.remainder();

        let c = f64x2::splat(center);
        let mut acc = f64x2::splat(0.0);
        for pair in chunks {
            let d = f64x2::new([pair[0], pair[1]]) - c;
            acc += d * d;
        }

        tail.iter().fold(acc.reduce_add(), |s, &v| {
            let d = v - center;
            s + d * d
        })
    }

    #[inline]
    fn sum_sq_dev_f64(vals: &[f64], center: f64) -> f64 {
        Self::sum_sq_dev(vals, center)
    }
}

impl FloatStats for f32 {
    #[inline]
    fn sum(vals: &[f32]) -> f32 {
        vals.iter().fold(0.0, |s, &v| s + v)
    }

    #[inline]
    fn sum_sq_dev(vals: &[f32], center: f32) -> f32 {
        vals.iter().fold(0.0, |s, &v| {
            let d = v - center;
            s + d * d
        })
    }

    #[inline]
    fn sum_sq_dev_f64(vals: &[f32], center: f64) -> f64 {
        vals.iter().fold(0.0, |s, &v| {
            let d = f64::from(v) - center;
            s + d * d
        })
    }
}

// ============================================================================
// Moments
// ============================================================================

/// Arithmetic mean. Returns zero for an empty slice.
#[inline]
pub fn mean<T: FloatStats>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    T::sum(vals) / T::from(vals.len()).unwrap()
}

/// Population standard deviation (divides by `n`, not `n - 1`).
///
/// Returns zero for an empty slice.
pub fn population_std<T: FloatStats>(vals: &[T]) -> T {
    if vals.is_empty() {
        return T::zero();
    }
    let m = mean(vals);
    (T::sum_sq_dev(vals, m) / T::from(vals.len()).unwrap()).sqrt()
}
