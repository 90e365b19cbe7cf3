//! High-level API for background estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. A
//! [`BackgroundEstimator`] is built once from a sample and then queried with
//! any number of strategies, either through typed methods or by name.
//!
//! ## Design notes
//!
//! * **Validated**: The sample is validated at construction; parameters are
//!   validated per call.
//! * **Cached fit**: The Gaussian fit is stored on the estimator and reused by
//!   the adaptive strategy. Fitting needs `&mut self`, so sharing one
//!   estimator across threads requires external synchronization.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Strategies**: median, mean, histogram mode, quantized mode, Gaussian
//!   fit, and the adaptive "smart" estimator.
//! * **Dispatch**: `call("histMode", Some(20.0))` is equivalent to
//!   `hist_mode(20)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::str::FromStr;

// Internal dependencies
use crate::algorithms::adaptive::{contamination_ratio, decide};
use crate::algorithms::gaussian::fit_gaussian;
use crate::algorithms::hist_mode::histogram_mode;
use crate::algorithms::quantized_mode::quantized_mode;
use crate::engine::reporter::NoopReporter;
use crate::engine::validator::Validator;
use crate::math::median::median;
use crate::math::moments::{FloatStats, mean};
use crate::primitives::sample::Sample;

// Publicly re-exported types
pub use crate::algorithms::adaptive::{DEFAULT_GAUSS_STD_LIMIT, SmartDecision};
pub use crate::algorithms::gaussian::GaussianFit;
pub use crate::algorithms::hist_mode::{DEFAULT_BINS, ModeEstimate};
pub use crate::algorithms::quantized_mode::DEFAULT_MULTI;
pub use crate::algorithms::simplex::NelderMead;
pub use crate::engine::config::{SmartConfig, SmartConfigBuilder};
pub use crate::engine::dispatch::Method;
pub use crate::engine::output::SmartOutcome;
pub use crate::engine::reporter::{BackgroundReporter, LogReporter};
pub use crate::primitives::errors::BackgroundError;

// ============================================================================
// BackgroundEstimator
// ============================================================================

/// Background-level estimator over one sample.
#[derive(Debug, Clone)]
pub struct BackgroundEstimator<T> {
    sample: Sample<T>,
    gauss: Option<GaussianFit<T>>,
    optimizer: NelderMead<T>,
}

impl<T: FloatStats> BackgroundEstimator<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build an estimator over a copy of `values`.
    pub fn new(values: &[T]) -> Result<Self, BackgroundError> {
        Ok(Self::from_sample(Sample::new(values)?))
    }

    /// Build an estimator that takes ownership of `values`.
    pub fn from_vec(values: Vec<T>) -> Result<Self, BackgroundError> {
        Ok(Self::from_sample(Sample::from_vec(values)?))
    }

    /// Build an estimator from row-major rows, e.g. an image cutout.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, BackgroundError> {
        Ok(Self::from_sample(Sample::from_rows(rows)?))
    }

    /// Build an estimator from an already validated sample.
    pub fn from_sample(sample: Sample<T>) -> Self {
        Self {
            sample,
            gauss: None,
            optimizer: NelderMead::new(),
        }
    }

    /// Replace the simplex settings used by the Gaussian fit.
    pub fn with_optimizer(mut self, optimizer: NelderMead<T>) -> Result<Self, BackgroundError> {
        Validator::validate_optimizer(&optimizer)?;
        self.optimizer = optimizer;
        Ok(self)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The sample under analysis.
    pub fn sample(&self) -> &Sample<T> {
        &self.sample
    }

    /// Number of values in the sample.
    pub fn len(&self) -> usize {
        self.sample.len()
    }

    /// Always `false`; a sample is never empty.
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    /// The most recent Gaussian fit, if one has been run.
    pub fn gaussian(&self) -> Option<&GaussianFit<T>> {
        self.gauss.as_ref()
    }

    // ========================================================================
    // Strategies
    // ========================================================================

    /// Median of the sample.
    pub fn median(&self) -> T {
        median(&self.sample)
    }

    /// Mean of the sample.
    pub fn mean(&self) -> T {
        mean(&self.sample)
    }

    /// Lower edge of the fullest bin of an `nbins` histogram.
    pub fn hist_mode(&self, nbins: usize) -> Result<T, BackgroundError> {
        self.hist_mode_with_uncertainty(nbins).map(|m| m.mode)
    }

    /// Histogram mode together with its uncertainty.
    pub fn hist_mode_with_uncertainty(
        &self,
        nbins: usize,
    ) -> Result<ModeEstimate<T>, BackgroundError> {
        Validator::validate_bins(nbins)?;
        histogram_mode(&self.sample, nbins)
    }

    /// Median of the most populated bucket after scaling by `multi`.
    pub fn fraser_mode(&self, multi: T) -> Result<T, BackgroundError> {
        Validator::validate_multi(multi)?;
        quantized_mode(&self.sample, multi)
    }

    /// Mean of a maximum-likelihood Gaussian fit. Caches the fit.
    pub fn gauss_fit(&mut self) -> Result<T, BackgroundError> {
        self.fit().map(|fit| fit.mean)
    }

    /// Adaptive estimate: the Gaussian mean unless contamination is detected.
    pub fn smart(&mut self, config: &SmartConfig<T>) -> Result<T, BackgroundError> {
        self.smart_outcome(config).map(|o| o.value)
    }

    /// Adaptive estimate with the evidence behind the decision.
    pub fn smart_outcome(
        &mut self,
        config: &SmartConfig<T>,
    ) -> Result<SmartOutcome<T>, BackgroundError> {
        self.smart_with_reporter(config, &mut NoopReporter)
    }

    /// Adaptive estimate, passing the outcome to `reporter`.
    pub fn smart_with_reporter<R>(
        &mut self,
        config: &SmartConfig<T>,
        reporter: &mut R,
    ) -> Result<SmartOutcome<T>, BackgroundError>
    where
        R: BackgroundReporter<T> + ?Sized,
    {
        let fit = self.fit()?;
        let ratio = contamination_ratio(&fit)?;
        let decision = decide(ratio, config.gauss_std_limit);

        let value = match decision {
            SmartDecision::Gaussian => fit.mean,
            SmartDecision::Backup => {
                log::debug!(
                    "contamination ratio {} exceeds {}; using backup {}",
                    ratio.to_f64().unwrap_or(f64::NAN),
                    config.gauss_std_limit.to_f64().unwrap_or(f64::NAN),
                    config.backup
                );
                self.evaluate(config.backup, config.backup_param)?
            }
        };

        let outcome = SmartOutcome {
            value,
            fit,
            ratio,
            decision,
            backup: config.backup,
        };
        reporter.report(&self.sample, &outcome);
        Ok(outcome)
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Run the strategy named `method`.
    ///
    /// `param` is the bin count for `histMode`, the scale factor for
    /// `fraserMode`, and the contamination limit for `smart`; other
    /// strategies ignore it. Missing parameters take their defaults.
    pub fn call(&mut self, method: &str, param: Option<T>) -> Result<T, BackgroundError> {
        let method = Method::from_str(method)?;
        self.evaluate(method, param)
    }

    /// Run `method` with an optional parameter.
    pub fn evaluate(&mut self, method: Method, param: Option<T>) -> Result<T, BackgroundError> {
        match method {
            Method::Median => Ok(self.median()),
            Method::Mean => Ok(self.mean()),
            Method::HistMode => {
                let nbins = match param {
                    Some(p) => Validator::bins_from_param(p)?,
                    None => DEFAULT_BINS,
                };
                self.hist_mode(nbins)
            }
            Method::FraserMode => {
                let multi = param.unwrap_or_else(|| T::from(DEFAULT_MULTI).unwrap());
                self.fraser_mode(multi)
            }
            Method::GaussFit => self.gauss_fit(),
            Method::Smart => {
                let mut builder = SmartConfig::builder();
                if let Some(limit) = param {
                    builder = builder.gauss_std_limit(limit);
                }
                let config = builder.build()?;
                self.smart(&config)
            }
        }
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn fit(&mut self) -> Result<GaussianFit<T>, BackgroundError> {
        let fit = fit_gaussian(&self.sample, &self.optimizer)?;
        self.gauss = Some(fit);
        Ok(fit)
    }
}
