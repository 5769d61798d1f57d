//! Finite-difference schemes for the rod problem
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! - **[`ExplicitSolver`]**: forward-time, centered-space (FTCS)
//!   - Cost: one stencil evaluation per cell
//!   - Stability: conditional, `D·dt/dx² ≤ 1/2`, never checked
//!
//! - **[`ImplicitSolver`]**: backward-time, Thomas algorithm per step
//!   - Cost: two sweeps per row
//!   - Stability: the pivot stays positive for any step size
//!   - Fails with `NumericalCorruption` if the finished table holds a NaN
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::solver::{ExplicitSolver, ImplicitSolver, Scenario, Solver, SimulationConfiguration};
//!
//! fn main() -> diffusion_rs::Result<()> {
//!     let config = SimulationConfiguration::new(0.0, 0.01, 0.2, -10.0, 10.0, 21);
//!     let scenario = Scenario::from_configuration(&config)?;
//!
//!     let explicit = ExplicitSolver::new().solve(&scenario)?;
//!     let implicit = ImplicitSolver::new().solve(&scenario)?;
//!
//!     // Same fixed cells, independent interiors
//!     assert_eq!(explicit.row(0), implicit.row(0));
//!     Ok(())
//! }
//! ```
//!
//! # Design Philosophy
//!
//! Each solver is:
//! - **Stateless**: can be reused for multiple scenarios
//! - **Self-contained**: owns only the table it returns and its per-step scratch

pub mod explicit;
pub mod implicit;

// Re-exports for convenience
pub use explicit::{ExplicitSolver, STABILITY_LIMIT};
pub use implicit::{ImplicitSolver, TridiagonalCoefficients};
