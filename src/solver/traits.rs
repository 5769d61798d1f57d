//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - Central enum `Scheme` names the finite-difference scheme
//! - `SimulationConfiguration` is the parameter set consumed at setup
//! - `Solver` turns a `Scenario` into a `TemperatureTable`
//! - `SimulationResult` gathers the tables of one run with its metadata
//!
//! A solver owns nothing between calls: every `solve` seeds a fresh table,
//! fills it and hands it back.

use std::collections::HashMap;
use std::fmt;

use nalgebra::DVector;

use crate::error::Result;
use crate::grid::{SpatialGrid, TimeAxis};
use crate::physics::ReferenceField;
use crate::solver::methods::{ExplicitSolver, ImplicitSolver};
use crate::solver::scenario::Scenario;
use crate::solver::table::TemperatureTable;

// =================================================================================================
// Solver trait
// =================================================================================================

/// A finite-difference time-marching scheme
///
/// # Contract
///
/// - The returned table has `scenario.n_steps()` rows and
///   `scenario.n_points()` columns
/// - Row 0 and the first/last column are the reference values, untouched
/// - Every interior cell of rows `1..M` is written exactly once
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::{Solver, Scenario, TemperatureTable};
/// use diffusion_rs::Result;
///
/// /// A scheme that freezes the initial profile
/// struct Frozen;
///
/// impl Solver for Frozen {
///     fn solve(&self, scenario: &Scenario) -> Result<TemperatureTable> {
///         # unimplemented!()
///         /* seed, march, return */
///     }
///
///     fn name(&self) -> &'static str {
///         "Frozen"
///     }
/// }
/// ```
pub trait Solver {
    /// Integrate the whole time axis of `scenario`
    fn solve(&self, scenario: &Scenario) -> Result<TemperatureTable>;

    /// Scheme name, used to tag tables and logs
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Scheme
// =================================================================================================

/// Finite-difference schemes available for the rod problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Forward-time, centered-space (FTCS). Conditionally stable.
    Explicit,

    /// Backward-time, solved per step with the Thomas algorithm
    Implicit,
}

impl Scheme {
    /// Get name identifier
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Explicit => "explicit",
            Scheme::Implicit => "implicit",
        }
    }

    /// Solver implementing this scheme
    pub fn solver(&self) -> Box<dyn Solver> {
        match self {
            Scheme::Explicit => Box::new(ExplicitSolver::new()),
            Scheme::Implicit => Box::new(ImplicitSolver::new()),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// =================================================================================================
// Simulation configuration
// =================================================================================================

/// Parameters of a rod simulation
///
/// # Examples
///
/// ```rust
/// use diffusion_rs::solver::SimulationConfiguration;
///
/// // Default: t ∈ [0, 20], dt = 0.01, x ∈ [-50, 50], 300 points, implicit only
/// let config = SimulationConfiguration::default();
/// assert!(config.enable_implicit && !config.enable_explicit);
///
/// // Short comparison run with both schemes
/// let config = SimulationConfiguration::default()
///     .time_range(0.0, 0.01, 1.0)
///     .with_explicit(true);
/// config.validate().unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfiguration {
    /// First instant of the time axis (≥ 0)
    pub time_start: f64,

    /// Time step (> 0)
    pub time_delta: f64,

    /// Last instant to cover (the axis may overshoot by less than a step)
    pub time_max: f64,

    /// Left end of the rod
    pub x0: f64,

    /// Right end of the rod (> x0)
    pub x1: f64,

    /// Number of spatial points (≥ 2)
    pub num_points: usize,

    /// Run the explicit (FTCS) scheme
    pub enable_explicit: bool,

    /// Run the implicit (Thomas) scheme
    pub enable_implicit: bool,
}

impl Default for SimulationConfiguration {
    fn default() -> Self {
        Self {
            time_start: 0.0,
            time_delta: 0.01,
            time_max: 20.0,
            x0: -50.0,
            x1: 50.0,
            num_points: 300,
            enable_explicit: false,
            enable_implicit: true,
        }
    }
}

impl SimulationConfiguration {
    /// Create a configuration with both schemes enabled
    pub fn new(
        time_start: f64,
        time_delta: f64,
        time_max: f64,
        x0: f64,
        x1: f64,
        num_points: usize,
    ) -> Self {
        Self {
            time_start,
            time_delta,
            time_max,
            x0,
            x1,
            num_points,
            enable_explicit: true,
            enable_implicit: true,
        }
    }

    /// Default rod and step, both schemes, `time_max` = 1
    pub fn comparison() -> Self {
        Self::default().time_range(0.0, 0.01, 1.0).with_explicit(true)
    }

    /// Builder pattern: set the time axis
    pub fn time_range(mut self, time_start: f64, time_delta: f64, time_max: f64) -> Self {
        self.time_start = time_start;
        self.time_delta = time_delta;
        self.time_max = time_max;
        self
    }

    /// Builder pattern: set the rod and its sampling
    pub fn rod(mut self, x0: f64, x1: f64, num_points: usize) -> Self {
        self.x0 = x0;
        self.x1 = x1;
        self.num_points = num_points;
        self
    }

    /// Builder pattern: toggle the explicit scheme
    pub fn with_explicit(mut self, enabled: bool) -> Self {
        self.enable_explicit = enabled;
        self
    }

    /// Builder pattern: toggle the implicit scheme
    pub fn with_implicit(mut self, enabled: bool) -> Self {
        self.enable_implicit = enabled;
        self
    }

    /// Enabled schemes, explicit first
    pub fn schemes(&self) -> Vec<Scheme> {
        let mut schemes = Vec::with_capacity(2);
        if self.enable_explicit {
            schemes.push(Scheme::Explicit);
        }
        if self.enable_implicit {
            schemes.push(Scheme::Implicit);
        }
        schemes
    }

    /// Validate configuration
    ///
    /// Builds the grid and the time axis as a dry run, so the rules are
    /// exactly those of [`SpatialGrid::uniform`] and [`TimeAxis::uniform`].
    pub fn validate(&self) -> Result<()> {
        SpatialGrid::uniform(self.x0, self.x1, self.num_points)?;
        TimeAxis::uniform(self.time_start, self.time_delta, self.time_max)?;
        Ok(())
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Outcome of a run: the scenario plus one table per enabled scheme
///
/// Tables are immutable; consumers index them by time step.
#[derive(Debug)]
pub struct SimulationResult {
    /// Grid, axis and reference field the tables were computed on
    pub scenario: Scenario,

    /// FTCS table, when the explicit scheme was enabled
    pub explicit: Option<TemperatureTable>,

    /// Thomas table, when the implicit scheme was enabled
    pub implicit: Option<TemperatureTable>,

    /// Free-form diagnostics (scheme constants, sizes...)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Empty result for a scenario
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            explicit: None,
            implicit: None,
            metadata: HashMap::new(),
        }
    }

    /// Record a diagnostic entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Store a table under its scheme
    pub fn insert_table(&mut self, scheme: Scheme, table: TemperatureTable) {
        match scheme {
            Scheme::Explicit => self.explicit = Some(table),
            Scheme::Implicit => self.implicit = Some(table),
        }
    }

    /// Table of a scheme, if it was run
    pub fn table(&self, scheme: Scheme) -> Option<&TemperatureTable> {
        match scheme {
            Scheme::Explicit => self.explicit.as_ref(),
            Scheme::Implicit => self.implicit.as_ref(),
        }
    }

    /// Spatial grid
    pub fn grid(&self) -> &SpatialGrid {
        &self.scenario.grid
    }

    /// Time axis
    pub fn axis(&self) -> &TimeAxis {
        &self.scenario.axis
    }

    /// Reference field
    pub fn field(&self) -> &dyn ReferenceField {
        self.scenario.field.as_ref()
    }

    /// Reference curve on the grid at time step `j`
    pub fn reference_profile(&self, j: usize) -> Option<DVector<f64>> {
        let t = self.axis().get(j)?;
        Some(self.field().profile(self.grid(), t))
    }

    /// Number of time steps
    pub fn len(&self) -> usize {
        self.scenario.n_steps()
    }

    /// Never true for a valid scenario
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =================================================================================================
// Tests
// =================================================================================================
