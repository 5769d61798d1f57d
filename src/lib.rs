//! diffusion-rs: one-dimensional heat diffusion on a rod
//!
//! Solves `∂U/∂t = D·∂²U/∂x²` (D = 13) on a finite rod with two
//! finite-difference schemes and compares both against a closed-form
//! Gaussian solution that supplies the initial profile and the boundary
//! temperatures.
//!
//! # Architecture
//!
//! diffusion-rs keeps the same split everywhere:
//!
//! 1. **Separation of Physics and Numerics**
//!    - The reference field defines the problem (what to solve)
//!    - Solvers provide the schemes (how to solve)
//!
//! 2. **Precompute, then play back**
//!    - Every table is filled before anything is read
//!    - Playback and export only borrow finished tables
//!
//! # Quick Start
//!
//! ```rust
//! use diffusion_rs::solver::{simulate, Scheme, SimulationConfiguration};
//!
//! # fn main() -> diffusion_rs::Result<()> {
//! // 1. Configure the run: rod [-50, 50] on 300 points, t in [0, 1] with dt = 0.01
//! let config = SimulationConfiguration::comparison();
//!
//! // 2. Integrate both schemes
//! let result = simulate(&config)?;
//!
//! // 3. Compare against the reference field
//! let implicit = result.table(Scheme::Implicit).unwrap();
//! let error = implicit.error_against(&result.scenario);
//! println!("implicit max error: {:.3e}", error.max_abs);
//!
//! // 4. Play back step by step
//! for frame in result.frames().take(3) {
//!     println!("t = {:.2}", frame.time);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`grid`]: spatial grid and time axis
//! - [`physics`]: reference field (analytic solution)
//! - [`solver`]: explicit and implicit schemes, results, playback
//! - [`output`]: CSV export
//! - [`error`]: crate error type
//!
//! # Features
//!
//! - `parallel`: evaluate reference profiles on large grids with rayon

// Core modules
pub mod error;
pub mod grid;
pub mod physics;
pub mod solver;

pub mod output;

pub use error::{DiffusionError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use diffusion_rs::prelude::*;
    //!
    //! let config = SimulationConfiguration::default();
    //! assert_eq!(config.schemes(), vec![Scheme::Implicit]);
    //! ```
    pub use crate::error::{DiffusionError, Result};
    pub use crate::grid::{SpatialGrid, TimeAxis};
    pub use crate::physics::{AnalyticSolution, ReferenceField, DIFFUSIVITY};
    pub use crate::solver::{
        simulate, ExplicitSolver, ImplicitSolver, Scenario, Scheme, SimulationConfiguration,
        SimulationResult, Solver, TemperatureTable,
    };
}
