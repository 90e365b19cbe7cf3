//! Gaussian maximum-likelihood fitting.
//!
//! ## Purpose
//!
//! This module fits a single normal distribution to a sample by minimizing
//! its negative log-likelihood with the Nelder–Mead simplex. The fitted mean
//! is the background estimate; the fitted standard deviation feeds the
//! contamination rule of the adaptive estimator.
//!
//! ## Design notes
//!
//! * **Start**: (median, population standard deviation).
//! * **Objective**: `Σ(x - m)² / (2 s²) + N ln(√(2π) s)`.
//! * **Scale guard**: `s <= 0` evaluates to `+∞`, which rejects the step.
//! * **Numeric**: No closed form is used, so the likelihood can be altered
//!   without touching the optimizer.
//! * **Precision**: The likelihood and the simplex always run in `f64`. The
//!   cost of a thousand-pixel cutout is in the thousands, where `f32` cannot
//!   resolve the default cost tolerance.
//!
//! ## Invariants
//!
//! * A returned fit always has `std > 0`.
//!
//! ## Non-goals
//!
//! * This module does not fit mixtures or truncated distributions.

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::simplex::NelderMead;
use crate::math::median::median;
use crate::math::moments::{FloatStats, population_std};
use crate::primitives::errors::BackgroundError;

// ============================================================================
// Fit Result
// ============================================================================

/// Parameters of a fitted normal distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianFit<T> {
    /// Fitted mean.
    pub mean: T,

    /// Fitted standard deviation.
    pub std: T,

    /// Negative log-likelihood at the fitted parameters.
    pub cost: T,

    /// Simplex iterations used.
    pub iterations: usize,

    /// Likelihood evaluations used.
    pub evaluations: usize,
}

// ============================================================================
// Likelihood
// ============================================================================

/// Negative log-likelihood of `values` under `Normal(mean, std)`.
///
/// Evaluated in `f64` for every sample type. Returns `+∞` when `std` is not
/// strictly positive.
pub fn negative_log_likelihood<T: FloatStats>(values: &[T], mean: f64, std: f64) -> f64 {
    if !(std > 0.0) {
        return f64::INFINITY;
    }

    let n = values.len() as f64;
    let sqrt_two_pi = Float::sqrt(2.0 * PI);

    T::sum_sq_dev_f64(values, mean) / (2.0 * std * std) + n * Float::ln(sqrt_two_pi * std)
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit a normal distribution to `values`.
///
/// The simplex runs over `f64` parameters with `optimizer`'s settings; the
/// fitted parameters are converted back to `T`.
pub fn fit_gaussian<T: FloatStats>(
    values: &[T],
    optimizer: &NelderMead<T>,
) -> Result<GaussianFit<T>, BackgroundError> {
    if values.is_empty() {
        return Err(BackgroundError::EmptySample);
    }

    let start_mean = median(values).to_f64().unwrap_or(f64::NAN);
    let start_std = population_std(values).to_f64().unwrap_or(f64::NAN);
    if !(start_std > 0.0) {
        return Err(BackgroundError::DegenerateSample(
            "zero standard deviation",
        ));
    }

    let result = optimizer.to_f64().minimize(
        |p: &[f64; 2]| negative_log_likelihood(values, p[0], p[1]),
        [start_mean, start_std],
    )?;

    let failure = BackgroundError::OptimizationFailure {
        iterations: result.iterations,
        evaluations: result.evaluations,
    };
    let [mean, std] = result.point;
    if !(std > 0.0) || !result.cost.is_finite() {
        return Err(failure);
    }

    log::debug!(
        "gaussian fit converged: mean={} std={} after {} iterations",
        mean,
        std,
        result.iterations
    );

    let (Some(mean), Some(std), Some(cost)) = (T::from(mean), T::from(std), T::from(result.cost))
    else {
        return Err(failure);
    };

    Ok(GaussianFit {
        mean,
        std,
        cost,
        iterations: result.iterations,
        evaluations: result.evaluations,
    })
}
