//! Outcome of the adaptive estimator.
//!
//! ## Purpose
//!
//! This module defines [`SmartOutcome`], which records both the value chosen
//! by the adaptive estimator and the evidence behind the choice.

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::adaptive::SmartDecision;
use crate::algorithms::gaussian::GaussianFit;
use crate::engine::dispatch::Method;

/// Result of one adaptive estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmartOutcome<T> {
    /// Background value returned to the caller.
    pub value: T,

    /// Gaussian fit that drove the decision.
    pub fit: GaussianFit<T>,

    /// Contamination ratio `std / sqrt(mean)`.
    pub ratio: T,

    /// Whether the Gaussian mean or the backup was used.
    pub decision: SmartDecision,

    /// Configured backup strategy (used only if `decision` is `Backup`).
    pub backup: Method,
}

impl<T: Float> SmartOutcome<T> {
    /// Strategy that produced `value`.
    pub fn method(&self) -> Method {
        match self.decision {
            SmartDecision::Gaussian => Method::GaussFit,
            SmartDecision::Backup => self.backup,
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for SmartOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Background:    {}", self.value)?;
        writeln!(f, "  Method:        {}", self.method())?;
        writeln!(f, "  Gaussian mean: {}", self.fit.mean)?;
        writeln!(f, "  Gaussian std:  {}", self.fit.std)?;
        write!(f, "  Ratio:         {}", self.ratio)
    }
}
