//! Numerical solvers
//!
//! This module turns a [`Scenario`] into [`TemperatureTable`]s.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Spatial grid and time axis
//!    - Reference field (initial and boundary values)
//!
//! 2. **Configuration** (`SimulationConfiguration`) - the parameter set
//!    - Rod bounds and point count
//!    - Time range and step
//!    - Which schemes to run
//!
//! 3. **Solver** (`Solver` trait) - HOW to solve
//!    - `ExplicitSolver`: FTCS time-marching
//!    - `ImplicitSolver`: backward time, Thomas algorithm
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver`, `Scheme`, `SimulationConfiguration`, `SimulationResult`
//! - **`scenario`**: `Scenario`
//! - **`table`**: `TemperatureTable`, `ErrorSummary`
//! - **`methods`**: the two schemes
//! - **`playback`**: `FrameCursor`, a read-only cursor over a finished run
//!
//! # Quick Start Example
//!
//! ```rust
//! use diffusion_rs::solver::{simulate, Scheme, SimulationConfiguration};
//!
//! # fn main() -> diffusion_rs::Result<()> {
//! let config = SimulationConfiguration::comparison();
//! let result = simulate(&config)?;
//!
//! let implicit = result.table(Scheme::Implicit).unwrap();
//! let explicit = result.table(Scheme::Explicit).unwrap();
//! assert_eq!(implicit.n_steps(), 101);
//! assert_eq!(explicit.n_points(), 300);
//! # Ok(())
//! # }
//! ```
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌──────────────────────────┐
//! │ SimulationConfiguration  │
//! └────────────┬─────────────┘
//!              │ validate + build
//!     ┌────────▼────────┐
//!     │ Scenario        │  grid · axis · reference field
//!     └───┬─────────┬───┘
//!         │         │
//! ┌───────▼──┐  ┌───▼───────┐
//! │ Explicit │  │ Implicit  │  (each seeds and owns its table)
//! └───────┬──┘  └───┬───────┘
//!         │         │
//!     ┌───▼─────────▼───┐
//!     │ SimulationResult│ ──► FrameCursor / CSV export
//!     └─────────────────┘
//! ```
//!
//! # Error Handling
//!
//! - Precondition violations are reported before any integration
//! - Explicit blow-up is **not** an error: the table simply holds huge,
//!   infinite or NaN values
//! - A NaN in the implicit table is fatal: `simulate` returns
//!   `DiffusionError::NumericalCorruption` and no table is kept

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod scenario;
mod table;
pub mod methods;
pub mod playback;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Reference profiles over large grids may be evaluated on rayon when the
// `parallel` feature is on. Tables are never written in parallel.
//
// The threshold is an AtomicUsize so tests and benchmarks can change it at
// runtime. Relaxed ordering: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default grid size above which reference profiles go parallel
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// [`ReferenceField::profile`](crate::physics::ReferenceField::profile)
/// evaluates sequentially on grids with at most this many points, and on
/// rayon above it when the crate is built with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Restores the previous threshold on drop. Test builds only.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{Scheme, SimulationConfiguration, SimulationResult, Solver};

pub use scenario::Scenario;
pub use table::{ErrorSummary, TemperatureTable};
pub use playback::{Frame, FrameCursor};

pub use methods::{ExplicitSolver, ImplicitSolver, TridiagonalCoefficients, STABILITY_LIMIT};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::Result;

/// Run every enabled scheme of a configuration
///
/// Builds the scenario (failing fast on any precondition violation), then
/// integrates the explicit and implicit tables one after the other.
///
/// # Errors
///
/// - setup errors from [`Scenario::from_configuration`]
/// - [`DiffusionError::NumericalCorruption`](crate::DiffusionError::NumericalCorruption)
///   from the implicit scheme; the whole run is abandoned
pub fn simulate(configuration: &SimulationConfiguration) -> Result<SimulationResult> {
    let scenario = Scenario::from_configuration(configuration)?;

    log::info!(
        "simulating {} on {} points × {} steps (dx = {}, dt = {})",
        scenario.field_name(),
        scenario.n_points(),
        scenario.n_steps(),
        scenario.dx(),
        scenario.dt()
    );

    let mut tables = Vec::new();
    for scheme in configuration.schemes() {
        let start = std::time::Instant::now();
        let table = scheme.solver().solve(&scenario)?;
        log::info!(
            "{} table done in {:.3} s",
            scheme,
            start.elapsed().as_secs_f64()
        );
        tables.push((scheme, table));
    }

    let mut result = SimulationResult::new(scenario);
    for (scheme, table) in tables {
        result.insert_table(scheme, table);
    }

    // Diagnostics for reproducibility
    let explicit = ExplicitSolver::new();
    let implicit = ImplicitSolver::new();
    let stability = explicit.stability_number(&result.scenario).to_string();
    let coupling = implicit.coupling(&result.scenario).to_string();
    let points = result.scenario.n_points().to_string();
    let steps = result.scenario.n_steps().to_string();
    let dx = result.scenario.dx().to_string();
    let dt = result.scenario.dt().to_string();

    result.add_metadata("points", &points);
    result.add_metadata("time steps", &steps);
    result.add_metadata("dx", &dx);
    result.add_metadata("dt", &dt);
    result.add_metadata("explicit stability number", &stability);
    result.add_metadata("implicit coupling", &coupling);

    Ok(result)
}

// =================================================================================================
// Tests
// =================================================================================================
