//! Closed-form solution of the rod problem
//!
//! # Mathematical Background
//!
//! The rod obeys the scaled heat equation
//!
//! ```text
//! ∂u/∂t = 13 · ∂²u/∂x²
//! ```
//!
//! and the field
//!
//! ```text
//!              1                 -3x² + 52t + 2x
//! u(x, t) = ─────────── · exp( ───────────────── )
//!           √(156t + 1)             156t + 1
//! ```
//!
//! solves it exactly. It is a Gaussian pulse centred at x = 1/3 that
//! spreads and flattens as t grows. The denominator `156t + 1` is at least
//! 1 for t ≥ 0, so the field is smooth and finite on the whole domain.
//!
//! The same field provides:
//!
//! - the initial condition (row 0 of every table)
//! - the Dirichlet boundary values (first and last column of every row)
//! - the ground truth used to measure integrator error

use crate::physics::traits::ReferenceField;

/// Diffusivity D of the rod equation
pub const DIFFUSIVITY: f64 = 13.0;

/// Exact solution `u(x, t)` of the rod problem, D = 13
///
/// Stateless: every call is an independent evaluation.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::physics::{AnalyticSolution, ReferenceField};
///
/// let field = AnalyticSolution::new();
///
/// // Peak of the initial pulse sits at x = 1/3
/// let peak = field.value(1.0 / 3.0, 0.0);
/// assert!(peak > field.value(0.0, 0.0));
/// assert!(peak > field.value(1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticSolution;

impl AnalyticSolution {
    /// Create the reference solution
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the field (inherent shortcut for [`ReferenceField::value`])
    pub fn evaluate(x: f64, t: f64) -> f64 {
        let denominator = 156.0 * t + 1.0;
        let exponent = (-3.0 * x * x + 52.0 * t + 2.0 * x) / denominator;
        exponent.exp() / denominator.sqrt()
    }
}

impl ReferenceField for AnalyticSolution {
    fn value(&self, x: f64, t: f64) -> f64 {
        Self::evaluate(x, t)
    }

    fn diffusivity(&self) -> f64 {
        DIFFUSIVITY
    }

    fn name(&self) -> &str {
        "Analytic Gaussian (D = 13)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
