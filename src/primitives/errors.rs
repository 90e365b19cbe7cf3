//! Error types for background estimation.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate, from sample construction to the adaptive
//! estimator.
//!
//! ## Design notes
//!
//! * **Flat**: One enum covers input, parameter, and numerical failures.
//! * **no_std**: `Display` is hand-written; `std::error::Error` is only
//!   implemented when the `std` feature is enabled.
//! * **Lossy numbers**: Offending parameters are stored as `f64` so the enum
//!   stays independent of the sample's float type.
//!
//! ## Invariants
//!
//! * Errors never carry partial results.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced while building a sample or running an estimator.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundError {
    /// The sample contains no values.
    EmptySample,

    /// A value is NaN, infinite, or cannot be represented after scaling.
    InvalidNumericValue(String),

    /// Not enough values for the requested statistic.
    TooFewPoints {
        /// Number of values available.
        got: usize,
        /// Minimum number of values required.
        min: usize,
    },

    /// The sample has no spread (e.g. every value is identical).
    DegenerateSample(&'static str),

    /// The strategy name passed to the dispatcher is not recognised.
    UnknownMethod(String),

    /// Histogram bin count is not an integer in `3..=2^24`.
    InvalidBins(f64),

    /// Quantization scale factor is not finite and positive.
    InvalidScale(f64),

    /// Contamination limit of the adaptive estimator is not finite and positive.
    InvalidStdLimit(f64),

    /// The requested backup strategy cannot be used by the adaptive estimator.
    InvalidBackup(&'static str),

    /// Optimizer tolerance is not finite and positive.
    InvalidTolerance(f64),

    /// The fitted Gaussian mean is zero or negative, so the contamination
    /// ratio `std / sqrt(mean)` is undefined.
    NonPositiveMean(f64),

    /// The simplex search did not converge within its budget, or converged
    /// on a non-positive scale.
    OptimizationFailure {
        /// Iterations performed before giving up.
        iterations: usize,
        /// Objective evaluations performed before giving up.
        evaluations: usize,
    },
}

impl fmt::Display for BackgroundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySample => write!(f, "Sample is empty"),
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            Self::DegenerateSample(reason) => write!(f, "Degenerate sample: {}", reason),
            Self::UnknownMethod(name) => write!(f, "Unknown method: {}", name),
            Self::InvalidBins(bins) => {
                write!(f, "Invalid bin count: {} (must be an integer in 3..=16777216)", bins)
            }
            Self::InvalidScale(multi) => {
                write!(f, "Invalid scale factor: {} (must be > 0 and finite)", multi)
            }
            Self::InvalidStdLimit(limit) => {
                write!(f, "Invalid std limit: {} (must be > 0 and finite)", limit)
            }
            Self::InvalidBackup(name) => {
                write!(f, "Invalid backup method: {} (cannot back up itself)", name)
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be > 0 and finite)", tol)
            }
            Self::NonPositiveMean(mean) => write!(
                f,
                "Non-positive fitted mean: {} (contamination ratio undefined)",
                mean
            ),
            Self::OptimizationFailure {
                iterations,
                evaluations,
            } => write!(
                f,
                "Optimization failed to converge after {} iterations ({} evaluations)",
                iterations, evaluations
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BackgroundError {}
