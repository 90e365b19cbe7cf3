//! Reporting hooks for the adaptive estimator.
//!
//! ## Purpose
//!
//! This module defines the sink through which callers observe adaptive
//! decisions, e.g. to draw a histogram of the sample with the chosen
//! background overlaid. Reporting is optional and never affects the result.
//!
//! ## Design notes
//!
//! * **Injectable**: Any `FnMut(&[T], &SmartOutcome<T>)` closure is a reporter.
//! * **Logging**: [`LogReporter`] forwards outcomes to the `log` facade.
//!
//! ## Non-goals
//!
//! * This module does not render plots.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::adaptive::SmartDecision;
use crate::engine::output::SmartOutcome;

// ============================================================================
// Reporter Trait
// ============================================================================

/// Observer of adaptive-estimator outcomes.
pub trait BackgroundReporter<T> {
    /// Called once per adaptive estimation with the sample and its outcome.
    fn report(&mut self, sample: &[T], outcome: &SmartOutcome<T>);
}

impl<T, F> BackgroundReporter<T> for F
where
    F: FnMut(&[T], &SmartOutcome<T>),
{
    fn report(&mut self, sample: &[T], outcome: &SmartOutcome<T>) {
        self(sample, outcome)
    }
}

// ============================================================================
// Built-in reporters
// ============================================================================

/// Reporter that discards every outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl<T> BackgroundReporter<T> for NoopReporter {
    fn report(&mut self, _sample: &[T], _outcome: &SmartOutcome<T>) {}
}

/// Reporter that logs each outcome at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl<T: Float> BackgroundReporter<T> for LogReporter {
    fn report(&mut self, sample: &[T], outcome: &SmartOutcome<T>) {
        let value = outcome.value.to_f64().unwrap_or(f64::NAN);
        match outcome.decision {
            SmartDecision::Gaussian => log::info!(
                "background {} from gaussian fit over {} values (ratio {})",
                value,
                sample.len(),
                outcome.ratio.to_f64().unwrap_or(f64::NAN)
            ),
            SmartDecision::Backup => log::info!(
                "background {} from backup {} over {} values (ratio {})",
                value,
                outcome.backup,
                sample.len(),
                outcome.ratio.to_f64().unwrap_or(f64::NAN)
            ),
        }
    }
}
