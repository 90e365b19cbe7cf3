//! Parameter validation for background estimators.
//!
//! ## Purpose
//!
//! This module checks every per-call parameter before an estimator runs:
//! bin counts, quantization scale factors, contamination limits, optimizer
//! tolerances, and backup strategies for the adaptive estimator.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//! * **Dispatcher parameters**: Float parameters arriving through the
//!   by-name dispatcher are converted here (e.g. to an integer bin count).
//!
//! ## Invariants
//!
//! * All validated parameters satisfy their estimator's preconditions.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not validate sample values (see `primitives::sample`).
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::hist_mode::{MAX_BINS, MIN_BINS};
use crate::algorithms::simplex::NelderMead;
use crate::engine::dispatch::Method;
use crate::primitives::errors::BackgroundError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for estimator parameters.
///
/// All methods fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Histogram
    // ========================================================================

    /// Validate a histogram bin count.
    pub fn validate_bins(nbins: usize) -> Result<(), BackgroundError> {
        if !(MIN_BINS..=MAX_BINS).contains(&nbins) {
            return Err(BackgroundError::InvalidBins(nbins as f64));
        }
        Ok(())
    }

    /// Convert a dispatcher parameter into a bin count.
    ///
    /// The value must be finite, integral, and within `MIN_BINS..=MAX_BINS`.
    pub fn bins_from_param<T: Float>(param: T) -> Result<usize, BackgroundError> {
        let raw = param.to_f64().unwrap_or(f64::NAN);
        if !param.is_finite() || param.fract() != T::zero() {
            return Err(BackgroundError::InvalidBins(raw));
        }
        let nbins = param
            .to_usize()
            .ok_or(BackgroundError::InvalidBins(raw))?;
        Self::validate_bins(nbins)?;
        Ok(nbins)
    }

    // ========================================================================
    // Quantized mode
    // ========================================================================

    /// Validate the quantization scale factor.
    pub fn validate_multi<T: Float>(multi: T) -> Result<(), BackgroundError> {
        if !multi.is_finite() || multi <= T::zero() {
            return Err(BackgroundError::InvalidScale(
                multi.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Adaptive estimator
    // ========================================================================

    /// Validate the contamination limit.
    pub fn validate_std_limit<T: Float>(limit: T) -> Result<(), BackgroundError> {
        if !limit.is_finite() || limit <= T::zero() {
            return Err(BackgroundError::InvalidStdLimit(
                limit.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the backup strategy and its optional parameter.
    pub fn validate_backup<T: Float>(
        backup: Method,
        param: Option<T>,
    ) -> Result<(), BackgroundError> {
        if backup == Method::Smart {
            return Err(BackgroundError::InvalidBackup(backup.name()));
        }

        match (backup, param) {
            (Method::HistMode, Some(p)) => Self::bins_from_param(p).map(|_| ()),
            (Method::FraserMode, Some(p)) => Self::validate_multi(p),
            _ => Ok(()),
        }
    }

    // ========================================================================
    // Optimizer
    // ========================================================================

    /// Validate a convergence tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), BackgroundError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(BackgroundError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate simplex tolerances.
    pub fn validate_optimizer<T: Float>(optimizer: &NelderMead<T>) -> Result<(), BackgroundError> {
        Self::validate_tolerance(optimizer.xtol)?;
        Self::validate_tolerance(optimizer.ftol)
    }
}
