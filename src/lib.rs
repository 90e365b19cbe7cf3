//! # bgfinder-rs: robust background estimation for Rust
//!
//! Estimates the representative "background level" of a sample of
//! measurements, typically the pixel values of an image cutout around a
//! source. Several interchangeable estimators are provided, plus an adaptive
//! estimator that trusts a Gaussian fit unless the sample looks contaminated.
//!
//! ## Estimators
//!
//! | Strategy       | Name         | Parameter (default)        | Robust to contamination |
//! |----------------|--------------|----------------------------|-------------------------|
//! | Median         | `median`     | none                       | moderately              |
//! | Mean           | `mean`       | none                       | no                      |
//! | Histogram mode | `histMode`   | bin count (50)             | yes                     |
//! | Quantized mode | `fraserMode` | scale factor (0.1)         | yes (most robust)       |
//! | Gaussian fit   | `gaussFit`   | none                       | no                      |
//! | Adaptive       | `smart`      | contamination limit (1.1)  | yes                     |
//!
//! **How the adaptive estimator decides:**
//!
//! 1. Fit a Gaussian by maximum likelihood, giving `(mean, std)`.
//! 2. Compute `r = std / sqrt(mean)`; for clean count data `r ≈ 1`.
//! 3. If `r` exceeds the limit, return the backup estimator (quantized mode
//!    by default); otherwise return the Gaussian mean.
//!
//! ## Quick Start
//!
//! ```rust
//! use bgfinder_rs::prelude::*;
//!
//! let cutout = vec![
//!     vec![101.0, 99.0, 100.0, 98.0],
//!     vec![102.0, 100.0, 97.0, 103.0],
//!     vec![100.0, 99.0, 850.0, 101.0], // a cosmic ray
//! ];
//!
//! let mut bg = Estimator::from_rows(&cutout)?;
//!
//! let median = bg.median();
//! let robust = bg.fraser_mode(0.1)?;
//! let adaptive = bg.smart(&SmartConfig::default())?;
//!
//! assert_eq!(median, 100.0);
//! assert!(robust < 110.0);
//! # let _ = adaptive;
//! # Result::<(), BackgroundError>::Ok(())
//! ```
//!
//! ### By-name dispatch
//!
//! ```rust
//! use bgfinder_rs::prelude::*;
//! # let data: Vec<f64> = (0..200).map(|i| 100.0 + ((i * 37) % 21) as f64 - 10.0).collect();
//!
//! let mut bg = Estimator::new(&data)?;
//!
//! let a = bg.call("histMode", Some(20.0))?;
//! let b = bg.hist_mode(20)?;
//! assert_eq!(a, b);
//!
//! assert!(matches!(
//!     bg.call("bogus", None),
//!     Err(BackgroundError::UnknownMethod(_))
//! ));
//! # Result::<(), BackgroundError>::Ok(())
//! ```
//!
//! ### Adaptive estimation with a reporter
//!
//! ```rust
//! use bgfinder_rs::prelude::*;
//! # let data: Vec<f64> = (0..400).map(|i| 100.0 + ((i * 37) % 21) as f64 - 10.0).collect();
//!
//! let config = SmartConfig::builder()
//!     .gauss_std_limit(1.1)  // Contamination limit on std / sqrt(mean)
//!     .backup(FraserMode)    // Used when the limit is exceeded
//!     .backup_param(0.2)     // Scale factor for the backup
//!     .build()?;
//!
//! let mut bg = Estimator::new(&data)?;
//! let mut seen = 0;
//! let outcome = bg.smart_with_reporter(&config, &mut |_: &[f64], o: &SmartOutcome<f64>| {
//!     seen += 1;
//!     let _ = o.decision;
//! })?;
//!
//! println!("{}", outcome);
//! assert_eq!(seen, 1);
//! # Result::<(), BackgroundError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! Every fallible operation returns `Result<_, BackgroundError>`:
//!
//! - **Input**: `EmptySample`, `InvalidNumericValue`, `TooFewPoints`
//! - **Shape**: `DegenerateSample` when the values have no spread
//! - **Parameters**: `UnknownMethod`, `InvalidBins`, `InvalidScale`,
//!   `InvalidStdLimit`, `InvalidBackup`, `InvalidTolerance`
//! - **Numerics**: `NonPositiveMean`, `OptimizationFailure`
//!
//! ## Logging
//!
//! Decisions and fit diagnostics are emitted through the [`log`] facade;
//! install any logger to see them.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to drop the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! bgfinder-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Fraser, W. et al. (2016). "TRIPPy: Trailed Image Photometry in Python"
//! - Nelder, J. A. & Mead, R. (1965). "A Simplex Method for Function Minimization"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type and validated samples.
mod primitives;

// Layer 2: Math - median, moments, and histograms.
mod math;

// Layer 3: Algorithms - the estimators and the contamination rule.
mod algorithms;

// Layer 4: Engine - validation, dispatch names, configuration, reporting.
mod engine;

// High-level API.
//
// Provides the `BackgroundEstimator` facade.
mod api;

// ============================================================================
// Public API
// ============================================================================

pub use crate::api::*;
pub use crate::math::moments::FloatStats;
pub use crate::primitives::sample::Sample;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use bgfinder_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        BackgroundError, BackgroundEstimator as Estimator, BackgroundReporter, DEFAULT_BINS,
        DEFAULT_GAUSS_STD_LIMIT, DEFAULT_MULTI, GaussianFit, LogReporter, Method,
        Method::{FraserMode, GaussFit, HistMode, Mean, Median, Smart},
        ModeEstimate, NelderMead, SmartConfig, SmartDecision, SmartOutcome,
    };
    pub use crate::primitives::sample::Sample;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal estimators.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
