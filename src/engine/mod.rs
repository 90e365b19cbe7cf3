//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer connects the estimators to the outside world:
//! - Parameter validation
//! - Strategy names for by-name dispatch
//! - Adaptive-estimator configuration and outcome types
//! - Reporting hooks
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Parameter validation.
pub mod validator;

/// Strategy names.
pub mod dispatch;

/// Adaptive-estimator configuration.
pub mod config;

/// Adaptive-estimator outcome.
pub mod output;

/// Reporting hooks.
pub mod reporter;
