#![cfg(feature = "dev")]
//! Tests for the Nelder–Mead minimizer.
//!
//! ## Test Organization
//!
//! 1. **Convergence** - Smooth bowls, Rosenbrock, one-dimensional searches
//! 2. **Infeasible Regions** - Objectives returning infinity or NaN
//! 3. **Budget** - Exhausted iteration and evaluation limits
//! 4. **Configuration** - Builder defaults and setters

use approx::assert_relative_eq;

use bgfinder_rs::internals::algorithms::simplex::NelderMead;
use bgfinder_rs::internals::primitives::errors::BackgroundError;

// ============================================================================
// Convergence Tests
// ============================================================================

/// A quadratic bowl is minimized from a zero start.
#[test]
fn test_simplex_quadratic_bowl() {
    let nm = NelderMead::new();
    let result = nm
        .minimize(
            |p: &[f64; 2]| (p[0] - 3.0).powi(2) + (p[1] + 1.0).powi(2),
            [0.0, 0.0],
        )
        .unwrap();

    assert_relative_eq!(result.point[0], 3.0, epsilon = 1e-3);
    assert_relative_eq!(result.point[1], -1.0, epsilon = 1e-3);
    assert!(result.cost < 1e-6);
    assert!(result.evaluations >= result.iterations);
}

/// The Rosenbrock valley is followed to its minimum.
#[test]
fn test_simplex_rosenbrock() {
    let nm = NelderMead::new();
    let result = nm
        .minimize(
            |p: &[f64; 2]| {
                let a = 1.0 - p[0];
                let b = p[1] - p[0] * p[0];
                a * a + 100.0 * b * b
            },
            [-1.2, 1.0],
        )
        .unwrap();

    assert_relative_eq!(result.point[0], 1.0, epsilon = 1e-2);
    assert_relative_eq!(result.point[1], 1.0, epsilon = 1e-2);
}

/// One-dimensional searches work.
#[test]
fn test_simplex_one_dimension() {
    let nm = NelderMead::new();
    let result = nm
        .minimize(|p: &[f64; 1]| (p[0] - 7.5).abs(), [1.0])
        .unwrap();
    assert_relative_eq!(result.point[0], 7.5, epsilon = 1e-3);
}

/// Starting at the minimum converges immediately.
#[test]
fn test_simplex_start_at_minimum() {
    let nm = NelderMead::new();
    let result = nm
        .minimize(|p: &[f64; 2]| p[0] * p[0] + p[1] * p[1], [0.0, 0.0])
        .unwrap();
    assert!(result.point[0].abs() < 1e-3);
    assert!(result.point[1].abs() < 1e-3);
}

// ============================================================================
// Infeasible Region Tests
// ============================================================================

/// Steps into an infinite region are rejected.
#[test]
fn test_simplex_rejects_infinite_cost() {
    let nm = NelderMead::new();
    let result = nm
        .minimize(
            |p: &[f64; 1]| {
                if p[0] <= 0.0 {
                    f64::INFINITY
                } else {
                    (p[0] - 2.0).powi(2)
                }
            },
            [1.0],
        )
        .unwrap();

    assert!(result.point[0] > 0.0);
    assert_relative_eq!(result.point[0], 2.0, epsilon = 1e-3);
}

/// NaN costs are treated as infinite.
#[test]
fn test_simplex_nan_cost_as_infinite() {
    let nm = NelderMead::new();
    let result = nm
        .minimize(
            |p: &[f64; 1]| {
                if p[0] < 0.5 {
                    f64::NAN
                } else {
                    (p[0] - 3.0).powi(2)
                }
            },
            [1.0],
        )
        .unwrap();

    assert!(result.cost.is_finite());
    assert_relative_eq!(result.point[0], 3.0, epsilon = 1e-3);
}

// ============================================================================
// Budget Tests
// ============================================================================

/// A tiny iteration budget is reported as a failure.
#[test]
fn test_simplex_iteration_budget() {
    let nm = NelderMead::new().iterations_per_dim(2);
    let result = nm.minimize(
        |p: &[f64; 2]| (p[0] - 3.0).powi(2) + (p[1] + 1.0).powi(2),
        [0.0, 0.0],
    );
    assert!(matches!(
        result,
        Err(BackgroundError::OptimizationFailure { iterations: 4, .. })
    ));
}

/// A tiny evaluation budget is reported as a failure.
#[test]
fn test_simplex_evaluation_budget() {
    let nm = NelderMead::new().evaluations_per_dim(3);
    let result = nm.minimize(
        |p: &[f64; 2]| (p[0] - 3.0).powi(2) + (p[1] + 1.0).powi(2),
        [0.0, 0.0],
    );
    assert!(matches!(
        result,
        Err(BackgroundError::OptimizationFailure { .. })
    ));
}

/// An objective that is infinite everywhere never converges.
#[test]
fn test_simplex_all_infinite() {
    let nm = NelderMead::new();
    let result = nm.minimize(|_: &[f64; 2]| f64::INFINITY, [1.0, 1.0]);
    assert!(matches!(
        result,
        Err(BackgroundError::OptimizationFailure { .. })
    ));
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Defaults follow the documented constants.
#[test]
fn test_simplex_defaults() {
    let nm: NelderMead<f64> = NelderMead::default();
    assert_eq!(nm.xtol, 1e-4);
    assert_eq!(nm.ftol, 1e-4);
    assert_eq!(nm.iterations_per_dim, 200);
    assert_eq!(nm.evaluations_per_dim, 200);
    assert_eq!(nm, NelderMead::new());
}

/// Builder setters override single fields.
#[test]
fn test_simplex_builder() {
    let nm = NelderMead::new()
        .xtol(1e-8)
        .ftol(1e-6)
        .iterations_per_dim(50)
        .evaluations_per_dim(80);
    assert_eq!(nm.xtol, 1e-8);
    assert_eq!(nm.ftol, 1e-6);
    assert_eq!(nm.iterations_per_dim, 50);
    assert_eq!(nm.evaluations_per_dim, 80);
}

/// Single precision settings widen to double precision.
#[test]
fn test_simplex_to_f64() {
    let nm = NelderMead::<f32>::new()
        .xtol(0.5)
        .ftol(0.25)
        .iterations_per_dim(7)
        .evaluations_per_dim(9);
    let wide = nm.to_f64();
    assert_eq!(wide.xtol, 0.5);
    assert_eq!(wide.ftol, 0.25);
    assert_eq!(wide.iterations_per_dim, 7);
    assert_eq!(wide.evaluations_per_dim, 9);
}
