//! Configuration of the adaptive estimator.
//!
//! ## Purpose
//!
//! This module provides [`SmartConfig`], the validated settings of the
//! adaptive ("smart") estimator, and its fluent builder.
//!
//! ## Design notes
//!
//! * **Defaults**: limit 1.1, backup `fraserMode`, no backup parameter.
//! * **Validated**: Parameters are checked when `.build()` is called, so a
//!   `SmartConfig` in hand is always usable.
//! * **Backup parameter**: When present it is passed to the backup; when
//!   absent the backup runs with its own default. The backup runs once.
//!
//! ## Invariants
//!
//! * The backup is never `smart` itself.
//!
//! ## Non-goals
//!
//! * This module does not run any estimator.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::adaptive::DEFAULT_GAUSS_STD_LIMIT;
use crate::engine::dispatch::Method;
use crate::engine::validator::Validator;
use crate::primitives::errors::BackgroundError;

// ============================================================================
// SmartConfig
// ============================================================================

/// Validated settings for the adaptive estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmartConfig<T> {
    pub(crate) gauss_std_limit: T,
    pub(crate) backup: Method,
    pub(crate) backup_param: Option<T>,
}

impl<T: Float> Default for SmartConfig<T> {
    fn default() -> Self {
        Self {
            gauss_std_limit: T::from(DEFAULT_GAUSS_STD_LIMIT).unwrap(),
            backup: Method::FraserMode,
            backup_param: None,
        }
    }
}

impl<T: Float> SmartConfig<T> {
    /// Start a builder with default settings.
    pub fn builder() -> SmartConfigBuilder<T> {
        SmartConfigBuilder::new()
    }

    /// Contamination limit on `std / sqrt(mean)`.
    pub fn gauss_std_limit(&self) -> T {
        self.gauss_std_limit
    }

    /// Strategy used when contamination is detected.
    pub fn backup(&self) -> Method {
        self.backup
    }

    /// Parameter handed to the backup, if any.
    pub fn backup_param(&self) -> Option<T> {
        self.backup_param
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for [`SmartConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmartConfigBuilder<T> {
    /// Contamination limit (default: 1.1).
    pub gauss_std_limit: Option<T>,

    /// Backup strategy (default: `fraserMode`).
    pub backup: Option<Method>,

    /// Backup parameter (default: the backup's own default).
    pub backup_param: Option<T>,
}

impl<T: Float> Default for SmartConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SmartConfigBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            gauss_std_limit: None,
            backup: None,
            backup_param: None,
        }
    }

    /// Set the contamination limit.
    pub fn gauss_std_limit(mut self, limit: T) -> Self {
        self.gauss_std_limit = Some(limit);
        self
    }

    /// Set the backup strategy.
    pub fn backup(mut self, method: Method) -> Self {
        self.backup = Some(method);
        self
    }

    /// Set the parameter passed to the backup strategy.
    pub fn backup_param(mut self, param: T) -> Self {
        self.backup_param = Some(param);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<SmartConfig<T>, BackgroundError> {
        let defaults = SmartConfig::<T>::default();
        let gauss_std_limit = self.gauss_std_limit.unwrap_or(defaults.gauss_std_limit);
        let backup = self.backup.unwrap_or(defaults.backup);

        Validator::validate_std_limit(gauss_std_limit)?;
        Validator::validate_backup(backup, self.backup_param)?;

        Ok(SmartConfig {
            gauss_std_limit,
            backup,
            backup_param: self.backup_param,
        })
    }
}
