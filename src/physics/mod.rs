//! Physical model of the rod
//!
//! This module provides the physics side of the crate: the equation being
//! solved and its exact solution.
//!
//! # Core Concepts
//!
//! - **Reference Field**: a known solution `u(x, t)`, used as ground truth
//!   and as the source of every initial and boundary value
//! - **Diffusivity**: the constant `D` in `∂u/∂t = D·∂²u/∂x²`, here 13
//!
//! # Architecture
//!
//! Physics is **separate from numerics**:
//! - The field provides the **values** (physics)
//! - The integrators provide the **method** to march in time (numerics)
//!
//! Integrators depend on the [`ReferenceField`] trait only, so a different
//! exact solution can be plugged in without touching the solvers.
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::physics::{AnalyticSolution, ReferenceField};
//! use diffusion_rs::grid::SpatialGrid;
//!
//! let field = AnalyticSolution::new();
//! let grid = SpatialGrid::uniform(-5.0, 5.0, 11).unwrap();
//!
//! // Reference curve at t = 0.5
//! let curve = field.profile(&grid, 0.5);
//! assert_eq!(curve.len(), 11);
//! ```

pub mod analytic;
pub mod traits;

pub use analytic::{AnalyticSolution, DIFFUSIVITY};
pub use traits::ReferenceField;
