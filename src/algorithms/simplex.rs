//! Derivative-free Nelder–Mead minimizer.
//!
//! ## Purpose
//!
//! This module minimizes a scalar objective over `N` parameters without
//! gradient information. It backs the Gaussian maximum-likelihood fit, whose
//! likelihood is deliberately evaluated numerically so that it can be
//! modified without re-deriving a closed form.
//!
//! ## Design notes
//!
//! * **Coefficients**: reflection 1, expansion 2, contraction 0.5, shrink 0.5.
//! * **Initial simplex**: each non-zero coordinate is perturbed by 5%; a zero
//!   coordinate gets an absolute step of 0.00025.
//! * **Rejected steps**: NaN costs are mapped to `+∞`. Objectives signal an
//!   infeasible point by returning `+∞`, which the simplex never accepts
//!   over a finite vertex.
//! * **Budget**: Defaults to `200 * N` iterations and `200 * N` evaluations.
//!
//! ## Key concepts
//!
//! * **Convergence**: every vertex lies within `xtol` of the best one in each
//!   coordinate, and every vertex cost lies within `ftol` of the best cost.
//!
//! ## Invariants
//!
//! * Vertices are kept sorted by ascending cost between iterations.
//! * The reported minimum is the best vertex ever accepted.
//!
//! ## Non-goals
//!
//! * This module does not support bounds or constraints.
//! * This module does not restart after premature convergence.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cell::Cell;
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::BackgroundError;

// ============================================================================
// Configuration
// ============================================================================

/// Nelder–Mead search settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelderMead<T> {
    /// Absolute tolerance on vertex spread.
    pub xtol: T,

    /// Absolute tolerance on cost spread.
    pub ftol: T,

    /// Iteration budget per dimension.
    pub iterations_per_dim: usize,

    /// Evaluation budget per dimension.
    pub evaluations_per_dim: usize,
}

impl<T: Float> Default for NelderMead<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> NelderMead<T> {
    // ========================================================================
    // Constants
    // ========================================================================

    const REFLECT: f64 = 1.0;
    const EXPAND: f64 = 2.0;
    const CONTRACT: f64 = 0.5;
    const SHRINK: f64 = 0.5;

    /// Relative perturbation for non-zero starting coordinates.
    const NONZERO_DELTA: f64 = 0.05;

    /// Absolute perturbation for zero starting coordinates.
    const ZERO_DELTA: f64 = 0.00025;

    /// Default tolerance on both vertex and cost spread.
    pub const DEFAULT_TOL: f64 = 1e-4;

    /// Default budget multiplier for iterations and evaluations.
    pub const DEFAULT_BUDGET_PER_DIM: usize = 200;

    // ========================================================================
    // Builder
    // ========================================================================

    /// Search with default tolerances and budget.
    pub fn new() -> Self {
        Self {
            xtol: T::from(Self::DEFAULT_TOL).unwrap(),
            ftol: T::from(Self::DEFAULT_TOL).unwrap(),
            iterations_per_dim: Self::DEFAULT_BUDGET_PER_DIM,
            evaluations_per_dim: Self::DEFAULT_BUDGET_PER_DIM,
        }
    }

    /// Set the vertex-spread tolerance.
    pub fn xtol(mut self, xtol: T) -> Self {
        self.xtol = xtol;
        self
    }

    /// Set the cost-spread tolerance.
    pub fn ftol(mut self, ftol: T) -> Self {
        self.ftol = ftol;
        self
    }

    /// Set the iteration budget per dimension.
    pub fn iterations_per_dim(mut self, n: usize) -> Self {
        self.iterations_per_dim = n;
        self
    }

    /// Set the evaluation budget per dimension.
    pub fn evaluations_per_dim(mut self, n: usize) -> Self {
        self.evaluations_per_dim = n;
        self
    }

    /// The same settings in double precision.
    pub fn to_f64(&self) -> NelderMead<f64> {
        NelderMead {
            xtol: self.xtol.to_f64().unwrap_or(Self::DEFAULT_TOL),
            ftol: self.ftol.to_f64().unwrap_or(Self::DEFAULT_TOL),
            iterations_per_dim: self.iterations_per_dim,
            evaluations_per_dim: self.evaluations_per_dim,
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Minimize `objective` starting from `x0`.
    pub fn minimize<const N: usize, F>(
        &self,
        mut objective: F,
        x0: [T; N],
    ) -> Result<SimplexResult<T, N>, BackgroundError>
    where
        F: FnMut(&[T; N]) -> T,
    {
        let max_iterations = self.iterations_per_dim * N.max(1);
        let max_evaluations = self.evaluations_per_dim * N.max(1);

        let evaluations = Cell::new(0usize);
        let mut eval = |x: &[T; N]| {
            evaluations.set(evaluations.get() + 1);
            let cost = objective(x);
            if cost.is_nan() { T::infinity() } else { cost }
        };

        let reflect = T::from(Self::REFLECT).unwrap();
        let expand = T::from(Self::EXPAND).unwrap();
        let contract = T::from(Self::CONTRACT).unwrap();
        let shrink = T::from(Self::SHRINK).unwrap();

        // Initial simplex
        let mut simplex: Vec<Vertex<T, N>> = Vec::with_capacity(N + 1);
        simplex.push(Vertex {
            point: x0,
            cost: eval(&x0),
        });
        for k in 0..N {
            let mut point = x0;
            point[k] = if point[k] != T::zero() {
                point[k] * (T::one() + T::from(Self::NONZERO_DELTA).unwrap())
            } else {
                T::from(Self::ZERO_DELTA).unwrap()
            };
            simplex.push(Vertex {
                point,
                cost: eval(&point),
            });
        }
        sort_vertices(&mut simplex);

        let mut iterations = 1usize;
        let mut converged = false;

        while iterations < max_iterations && evaluations.get() < max_evaluations {
            if self.has_converged(&simplex) {
                converged = true;
                break;
            }

            let worst = simplex[N];
            let centroid = centroid(&simplex[..N]);

            // Reflection: x_r = c + rho (c - x_worst)
            let xr = affine(&centroid, &worst.point, T::one() + reflect, reflect);
            let fr = eval(&xr);

            let mut shrink_needed = false;
            if fr < simplex[0].cost {
                // Expansion
                let xe = affine(
                    &centroid,
                    &worst.point,
                    T::one() + reflect * expand,
                    reflect * expand,
                );
                let fe = eval(&xe);
                simplex[N] = if fe < fr {
                    Vertex { point: xe, cost: fe }
                } else {
                    Vertex { point: xr, cost: fr }
                };
            } else if N == 0 || fr < simplex[N - 1].cost {
                simplex[N] = Vertex { point: xr, cost: fr };
            } else if fr < worst.cost {
                // Outside contraction
                let xc = affine(
                    &centroid,
                    &worst.point,
                    T::one() + contract * reflect,
                    contract * reflect,
                );
                let fc = eval(&xc);
                if fc <= fr {
                    simplex[N] = Vertex { point: xc, cost: fc };
                } else {
                    shrink_needed = true;
                }
            } else {
                // Inside contraction
                let xcc = affine(&centroid, &worst.point, T::one() - contract, -contract);
                let fcc = eval(&xcc);
                if fcc < worst.cost {
                    simplex[N] = Vertex {
                        point: xcc,
                        cost: fcc,
                    };
                } else {
                    shrink_needed = true;
                }
            }

            if shrink_needed {
                let best = simplex[0].point;
                for vertex in simplex.iter_mut().skip(1) {
                    let mut point = vertex.point;
                    for (p, &b) in point.iter_mut().zip(best.iter()) {
                        *p = b + shrink * (*p - b);
                    }
                    *vertex = Vertex {
                        point,
                        cost: eval(&point),
                    };
                }
            }

            sort_vertices(&mut simplex);
            iterations += 1;
        }

        if !converged {
            converged = self.has_converged(&simplex);
        }

        let best = simplex[0];
        let evaluations = evaluations.get();
        if !converged {
            log::warn!(
                "simplex exhausted its budget after {} iterations ({} evaluations)",
                iterations,
                evaluations
            );
            return Err(BackgroundError::OptimizationFailure {
                iterations,
                evaluations,
            });
        }

        Ok(SimplexResult {
            point: best.point,
            cost: best.cost,
            iterations,
            evaluations,
        })
    }

    fn has_converged<const N: usize>(&self, simplex: &[Vertex<T, N>]) -> bool {
        let best = &simplex[0];
        if !best.cost.is_finite() {
            return false;
        }
        simplex[1..].iter().all(|v| {
            (v.cost - best.cost).abs() <= self.ftol
                && v
                    .point
                    .iter()
                    .zip(best.point.iter())
                    .all(|(&a, &b)| (a - b).abs() <= self.xtol)
        })
    }
}

// ============================================================================
// Result
// ============================================================================

/// Outcome of a converged simplex search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexResult<T, const N: usize> {
    /// Location of the minimum.
    pub point: [T; N],

    /// Objective value at `point`.
    pub cost: T,

    /// Iterations performed.
    pub iterations: usize,

    /// Objective evaluations performed.
    pub evaluations: usize,
}

// ============================================================================
// Simplex helpers
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Vertex<T, const N: usize> {
    point: [T; N],
    cost: T,
}

fn sort_vertices<T: Float, const N: usize>(simplex: &mut [Vertex<T, N>]) {
    simplex.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(Equal));
}

fn centroid<T: Float, const N: usize>(vertices: &[Vertex<T, N>]) -> [T; N] {
    let mut c = [T::zero(); N];
    if vertices.is_empty() {
        return c;
    }
    for v in vertices {
        for (ci, &pi) in c.iter_mut().zip(v.point.iter()) {
            *ci = *ci + pi;
        }
    }
    let n = T::from(vertices.len()).unwrap();
    for ci in c.iter_mut() {
        *ci = *ci / n;
    }
    c
}

/// `a * centroid - b * worst`, element-wise.
fn affine<T: Float, const N: usize>(centroid: &[T; N], worst: &[T; N], a: T, b: T) -> [T; N] {
    let mut out = [T::zero(); N];
    for ((o, &c), &w) in out.iter_mut().zip(centroid.iter()).zip(worst.iter()) {
        *o = a * c - b * w;
    }
    out
}
