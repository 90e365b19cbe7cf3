//! Contamination rule for the adaptive estimator.
//!
//! ## Purpose
//!
//! This module decides whether a Gaussian fit describes the sample well
//! enough to be used as the background. For count-like data the standard
//! deviation of pure background is close to `sqrt(mean)`; a much wider
//! spread indicates sources, cosmic rays or other contamination.
//!
//! ## Key concepts
//!
//! * **Contamination ratio**: `r = std / sqrt(mean)`.
//! * **Decision**: `r > limit` selects the backup estimator; otherwise the
//!   Gaussian mean is kept.
//!
//! ## Invariants
//!
//! * The ratio is only defined for a strictly positive fitted mean.
//!
//! ## Non-goals
//!
//! * This module does not run the backup estimator (see `api`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::gaussian::GaussianFit;
use crate::primitives::errors::BackgroundError;

/// Default contamination limit.
pub const DEFAULT_GAUSS_STD_LIMIT: f64 = 1.1;

// ============================================================================
// Decision
// ============================================================================

/// Which estimate the adaptive estimator settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartDecision {
    /// The Gaussian mean was kept.
    Gaussian,

    /// Contamination was detected and the backup estimator was used.
    Backup,
}

/// Contamination ratio `std / sqrt(mean)` of a fit.
pub fn contamination_ratio<T: Float>(fit: &GaussianFit<T>) -> Result<T, BackgroundError> {
    if !(fit.mean > T::zero()) {
        return Err(BackgroundError::NonPositiveMean(
            fit.mean.to_f64().unwrap_or(f64::NAN),
        ));
    }
    Ok(fit.std / fit.mean.sqrt())
}

/// Apply the threshold test to a contamination ratio.
#[inline]
pub fn decide<T: Float>(ratio: T, limit: T) -> SmartDecision {
    if ratio > limit {
        SmartDecision::Backup
    } else {
        SmartDecision::Gaussian
    }
}
