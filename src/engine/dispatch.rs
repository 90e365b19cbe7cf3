//! Strategy names for by-name dispatch.
//!
//! ## Purpose
//!
//! This module defines [`Method`], the closed set of background strategies,
//! and its mapping to and from the names accepted by
//! `BackgroundEstimator::call`.
//!
//! ## Key concepts
//!
//! * **Names**: `median`, `mean`, `histMode`, `fraserMode`, `gaussFit`, `smart`.
//! * **Parameter**: Only `histMode` (bin count), `fraserMode` (scale factor)
//!   and `smart` (contamination limit) interpret the optional parameter.
//!
//! ## Non-goals
//!
//! * This module does not run estimators (see `api`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use core::fmt;
use core::str::FromStr;

// Internal dependencies
use crate::primitives::errors::BackgroundError;

// ============================================================================
// Method
// ============================================================================

/// A background estimation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Sample median.
    #[default]
    Median,

    /// Sample mean.
    Mean,

    /// Lower edge of the fullest histogram bin.
    HistMode,

    /// Median of the most populated quantization bucket.
    FraserMode,

    /// Mean of a maximum-likelihood Gaussian fit.
    GaussFit,

    /// Gaussian mean unless contamination is detected, then a backup.
    Smart,
}

impl Method {
    /// Every strategy, in dispatcher order.
    pub const ALL: [Method; 6] = [
        Method::Median,
        Method::Mean,
        Method::HistMode,
        Method::FraserMode,
        Method::GaussFit,
        Method::Smart,
    ];

    /// Dispatcher name of the strategy.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Median => "median",
            Self::Mean => "mean",
            Self::HistMode => "histMode",
            Self::FraserMode => "fraserMode",
            Self::GaussFit => "gaussFit",
            Self::Smart => "smart",
        }
    }

    /// Whether the strategy reads the optional dispatcher parameter.
    pub const fn takes_param(self) -> bool {
        matches!(self, Self::HistMode | Self::FraserMode | Self::Smart)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = BackgroundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| BackgroundError::UnknownMethod(s.to_string()))
    }
}
