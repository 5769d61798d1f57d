//! Simulation scenario definition
//!
//! A scenario combines the discretisation (grid + time axis) with the
//! reference field that supplies initial and boundary values.
use crate::error::{DiffusionError, Result};
use crate::grid::{SpatialGrid, TimeAxis};
use crate::physics::{AnalyticSolution, ReferenceField};
use crate::solver::traits::SimulationConfiguration;

/// Simulation scenario
///
/// Defines a specific case to integrate:
/// - Spatial grid (where)
/// - Time axis (when)
/// - Reference field (initial/boundary values and ground truth)
///
/// # Design
///
/// The same scenario can be integrated with different schemes.
/// This is the "WHAT to solve" (not "HOW to solve").
///
/// # Examples
///
/// ```rust
/// use diffusion_rs::solver::{Scenario, Solver, ExplicitSolver, ImplicitSolver};
/// use diffusion_rs::grid::{SpatialGrid, TimeAxis};
/// use diffusion_rs::physics::AnalyticSolution;
///
/// # fn main() -> diffusion_rs::Result<()> {
/// let scenario = Scenario::new(
///     SpatialGrid::uniform(-5.0, 5.0, 11)?,
///     TimeAxis::uniform(0.0, 0.01, 0.1)?,
///     Box::new(AnalyticSolution::new()),
/// );
///
/// let explicit = ExplicitSolver::new().solve(&scenario)?;
/// let implicit = ImplicitSolver::new().solve(&scenario)?;
/// assert_eq!(explicit.n_steps(), implicit.n_steps());
/// # Ok(())
/// # }
/// ```
pub struct Scenario {
    /// Spatial sample points
    pub grid: SpatialGrid,

    /// Time sample points
    pub axis: TimeAxis,

    /// Exact solution (boundary, initial values, reference)
    pub field: Box<dyn ReferenceField>,
}

impl Scenario {
    /// Create a scenario
    pub fn new(grid: SpatialGrid, axis: TimeAxis, field: Box<dyn ReferenceField>) -> Self {
        Self { grid, axis, field }
    }

    /// Build the grid and axis described by a configuration, with the
    /// closed-form rod solution as reference
    ///
    /// # Errors
    ///
    /// Any precondition violation from the configuration, the grid or the
    /// time axis. Nothing is integrated.
    pub fn from_configuration(configuration: &SimulationConfiguration) -> Result<Self> {
        configuration.validate()?;

        let grid = SpatialGrid::uniform(configuration.x0, configuration.x1, configuration.num_points)?;
        let axis = TimeAxis::uniform(
            configuration.time_start,
            configuration.time_delta,
            configuration.time_max,
        )?;

        let scenario = Self::new(grid, axis, Box::new(AnalyticSolution::new()));
        scenario.validate()?;
        Ok(scenario)
    }

    /// Verifying scenario content (mainly the field)
    pub fn validate(&self) -> Result<()> {
        let diffusivity = self.field.diffusivity();
        if !diffusivity.is_finite() || diffusivity < 0.0 {
            return Err(DiffusionError::InvalidConfiguration(format!(
                "diffusivity of '{}' must be finite and non-negative, got {}",
                self.field.name(),
                diffusivity
            )));
        }
        Ok(())
    }

    /// Get field name
    pub fn field_name(&self) -> &str {
        self.field.name()
    }

    /// Grid spacing
    pub fn dx(&self) -> f64 {
        self.grid.dx()
    }

    /// Time step
    pub fn dt(&self) -> f64 {
        self.axis.dt()
    }

    /// Number of spatial points N
    pub fn n_points(&self) -> usize {
        self.grid.len()
    }

    /// Number of time steps M
    pub fn n_steps(&self) -> usize {
        self.axis.len()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("field", &self.field_name())
            .field("diffusivity", &self.field.diffusivity())
            .field("points", &self.n_points())
            .field("rod", &(self.grid.start(), self.grid.end()))
            .field("dx", &self.dx())
            .field("steps", &self.n_steps())
            .field("time", &(self.axis.start(), self.axis.end()))
            .field("dt", &self.dt())
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
