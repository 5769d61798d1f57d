//! Explicit FTCS (forward-time, centered-space) solver
//!
//! # Mathematical Background
//!
//! Replacing the time derivative of `∂u/∂t = D·∂²u/∂x²` by a forward
//! difference and the space derivative by a centered one gives
//!
//! ```text
//! U[j][i] = U[j-1][i] + r · (U[j-1][i-1] - 2·U[j-1][i] + U[j-1][i+1])
//!
//! r = D · dt / dx²
//! ```
//!
//! Every interior cell of a row depends only on three cells of the previous
//! row, so the table is filled row by row without solving anything.
//!
//! # Characteristics
//!
//! - **Order**: first order in time, second order in space
//! - **Stability**: conditionally stable, requires `r ≤ 1/2`
//! - **Complexity**: O(M·N), one pass, no backtracking
//!
//! # Stability Bound
//!
//! ⚠️ The solver does **not** enforce or check `r ≤ 1/2`. Above the bound
//! the high-frequency error modes are amplified at every step: values grow
//! without limit and may end up infinite or NaN. Nothing is reported, the
//! table is returned as computed. Choose `dt ≤ dx² / (2·D)`, or query
//! [`ExplicitSolver::is_stable`] before solving.
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::solver::{ExplicitSolver, Scenario, Solver, SimulationConfiguration};
//!
//! # fn main() -> diffusion_rs::Result<()> {
//! // dx = 1, dt = 0.01 → r = 0.13
//! let config = SimulationConfiguration::new(0.0, 0.01, 0.5, -10.0, 10.0, 21);
//! let scenario = Scenario::from_configuration(&config)?;
//!
//! let solver = ExplicitSolver::new();
//! assert!(solver.is_stable(&scenario));
//!
//! let table = solver.solve(&scenario)?;
//! assert_eq!(table.n_steps(), 51);
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::solver::{Scenario, Solver, TemperatureTable};

/// Largest stability number for which FTCS does not amplify errors
pub const STABILITY_LIMIT: f64 = 0.5;

// =================================================================================================
// Explicit Solver
// =================================================================================================

/// Forward-time, centered-space solver
///
/// Stateless: one instance can solve any number of scenarios.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitSolver;

impl ExplicitSolver {
    /// Create a new explicit solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use diffusion_rs::solver::{ExplicitSolver, Solver};
    ///
    /// let solver = ExplicitSolver::new();
    /// assert_eq!(solver.name(), "explicit");
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Stability number `r = D·dt/dx²` of a scenario
    pub fn stability_number(&self, scenario: &Scenario) -> f64 {
        let dx = scenario.dx();
        scenario.field.diffusivity() * scenario.dt() / (dx * dx)
    }

    /// Whether `r ≤ 1/2`. Advisory only, [`Solver::solve`] never calls it.
    pub fn is_stable(&self, scenario: &Scenario) -> bool {
        self.stability_number(scenario) <= STABILITY_LIMIT
    }
}

impl Solver for ExplicitSolver {
    fn solve(&self, scenario: &Scenario) -> Result<TemperatureTable> {
        scenario.validate()?;

        let r = self.stability_number(scenario);
        let last = scenario.grid.last_index();

        log::debug!(
            "explicit: {} steps × {} points, r = D·dt/dx² = {}",
            scenario.n_steps(),
            scenario.n_points(),
            r
        );

        let mut table = TemperatureTable::seeded(self.name(), scenario);

        for j in 1..table.n_steps() {
            let (previous, current) = table.step_pair_mut(j);

            for i in 1..last {
                let left = previous[i - 1];
                let centre = previous[i];
                let right = previous[i + 1];
                current[i] = centre + r * (left - 2.0 * centre + right);
            }
        }

        Ok(table)
    }

    fn name(&self) -> &'static str {
        "explicit"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
