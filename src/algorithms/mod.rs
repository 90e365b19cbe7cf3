//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the background estimators themselves:
//! - Histogram mode with a half-maximum uncertainty
//! - Quantized ("Fraser") mode, sharpened by a within-bucket median
//! - Gaussian maximum-likelihood fit via a Nelder–Mead simplex
//! - The contamination rule used by the adaptive estimator
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Histogram-based mode estimation.
pub mod hist_mode;

/// Quantized-mode robust estimation.
pub mod quantized_mode;

/// Derivative-free Nelder–Mead minimizer.
pub mod simplex;

/// Gaussian maximum-likelihood fitting.
pub mod gaussian;

/// Contamination rule for the adaptive estimator.
pub mod adaptive;
