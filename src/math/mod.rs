//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical building blocks used by the
//! estimators:
//! - Order statistics (median)
//! - Moments (sum, mean, squared deviations) with SIMD kernels
//! - Robust-bounded histograms
//!
//! These are reusable building blocks with no estimator-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Median computation via selection.
pub mod median;

/// Sums, means, and squared deviations.
pub mod moments;

/// Histograms with percentile-truncated bounds.
pub mod histogram;
