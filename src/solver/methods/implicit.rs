//! Implicit backward-time solver (Thomas algorithm)
//!
//! # Mathematical Background
//!
//! Each new row is defined implicitly by a tridiagonal system coupling all
//! of its interior unknowns:
//!
//! ```text
//! -A·U[j+1][i-1] + C·U[j+1][i] - B·U[j+1][i+1] = U[j][i-1]
//!
//! K = D·dt/dx,   A = B = K,   C = 2K + 1
//! ```
//!
//! with `U[j+1][0]` and `U[j+1][N-1]` known from the reference field.
//!
//! Note the coefficient uses `dx`, not `dx²` as the explicit scheme does,
//! and the right-hand side is the previous row read one point to the left.
//! Both are part of the scheme as defined here. On a unit grid (dx = 1)
//! the coupling matches the heat equation and the error shrinks with dt.
//!
//! # Thomas Elimination
//!
//! The system is solved in two sweeps per time step:
//!
//! ```text
//! forward:   alpha[0] = 0,  beta[0] = U[j+1][0]
//!            alpha[i] = B / (C - alpha[i-1]·A)
//!            beta[i]  = (A·beta[i-1] + U[j][i-1]) / (C - alpha[i-1]·A)     i = 1..N-1
//!
//! backward:  U[j+1][i] = alpha[i+1]·U[j+1][i+1] + beta[i+1]                 i = N-2..1
//! ```
//!
//! For K ≥ 0, `alpha` stays in [0, 1) and the pivot `C - alpha·A` is at least
//! `K + 1 > 0`. The pivot is therefore never checked.
//!
//! # Failure
//!
//! After the last step the whole table is scanned for NaN. A single NaN
//! means the setup or the arithmetic went wrong; the table is discarded and
//! [`DiffusionError::NumericalCorruption`] is returned.
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::solver::{ImplicitSolver, Scenario, Solver, SimulationConfiguration};
//!
//! # fn main() -> diffusion_rs::Result<()> {
//! let config = SimulationConfiguration::new(0.0, 0.01, 1.0, -50.0, 50.0, 300);
//! let scenario = Scenario::from_configuration(&config)?;
//!
//! let table = ImplicitSolver::new().solve(&scenario)?;
//! assert_eq!(table.first_nan(), None);
//! # Ok(())
//! # }
//! ```

use nalgebra::DVector;

use crate::error::{DiffusionError, Result};
use crate::solver::{Scenario, Solver, TemperatureTable};

// =================================================================================================
// Tridiagonal coefficients
// =================================================================================================

/// Constant coefficients of the per-step tridiagonal system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TridiagonalCoefficients {
    /// Sub-diagonal A
    pub sub: f64,

    /// Diagonal C
    pub diagonal: f64,

    /// Super-diagonal B
    pub sup: f64,
}

impl TridiagonalCoefficients {
    /// Coefficients for `K = D·dt/dx`
    pub fn from_k(k: f64) -> Self {
        Self {
            sub: k,
            diagonal: 2.0 * k + 1.0,
            sup: k,
        }
    }

    /// Forward sweep: recurrence coefficients `(alpha, beta)` of length N
    ///
    /// `left` is the known boundary value of the new row, `previous` the
    /// full previous row.
    pub fn forward_sweep(&self, left: f64, previous: &DVector<f64>) -> (Vec<f64>, Vec<f64>) {
        let n = previous.len();
        let mut alpha = Vec::with_capacity(n);
        let mut beta = Vec::with_capacity(n);
        alpha.push(0.0);
        beta.push(left);

        for i in 1..n {
            let pivot = self.diagonal - alpha[i - 1] * self.sub;
            alpha.push(self.sup / pivot);
            beta.push((self.sub * beta[i - 1] + previous[i - 1]) / pivot);
        }

        (alpha, beta)
    }

    /// Back substitution into the interior of `current`
    ///
    /// `current[N-1]` must already hold the right boundary value.
    pub fn back_substitute(&self, alpha: &[f64], beta: &[f64], current: &mut DVector<f64>) {
        let n = current.len();
        if n < 3 {
            return;
        }
        for i in (1..n - 1).rev() {
            current[i] = alpha[i + 1] * current[i + 1] + beta[i + 1];
        }
    }
}

// =================================================================================================
// Implicit Solver
// =================================================================================================

/// Backward-time solver, one Thomas solve per time step
#[derive(Debug, Clone, Copy, Default)]
pub struct ImplicitSolver;

impl ImplicitSolver {
    /// Create a new implicit solver
    pub fn new() -> Self {
        Self
    }

    /// Coupling constant `K = D·dt/dx`
    pub fn coupling(&self, scenario: &Scenario) -> f64 {
        scenario.field.diffusivity() * scenario.dt() / scenario.dx()
    }

    /// Tridiagonal coefficients for a scenario
    pub fn coefficients(&self, scenario: &Scenario) -> TridiagonalCoefficients {
        TridiagonalCoefficients::from_k(self.coupling(scenario))
    }
}

impl Solver for ImplicitSolver {
    fn solve(&self, scenario: &Scenario) -> Result<TemperatureTable> {
        scenario.validate()?;

        let coefficients = self.coefficients(scenario);

        log::debug!(
            "implicit: {} steps × {} points, K = D·dt/dx = {}",
            scenario.n_steps(),
            scenario.n_points(),
            coefficients.sub
        );

        let mut table = TemperatureTable::seeded(self.name(), scenario);

        for j in 1..table.n_steps() {
            let (previous, current) = table.step_pair_mut(j);

            // Scratch arrays live for one step only
            let (alpha, beta) = coefficients.forward_sweep(current[0], previous);
            coefficients.back_substitute(&alpha, &beta, current);
        }

        if let Some((step, point)) = table.first_nan() {
            log::error!(
                "implicit: NaN at time step {}, point {}; table discarded",
                step,
                point
            );
            return Err(DiffusionError::NumericalCorruption {
                scheme: self.name(),
                step,
                point,
            });
        }

        Ok(table)
    }

    fn name(&self) -> &'static str {
        "implicit"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
