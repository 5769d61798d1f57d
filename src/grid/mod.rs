//! Sampling grids
//!
//! This module builds the two discretisation axes every integrator works on:
//!
//! - [`SpatialGrid`]: N uniformly spaced positions along the rod, `x0..=x1`
//! - [`TimeAxis`]: M uniformly spaced instants, `time_start..=time_max`
//!
//! Both are immutable value objects. They are validated once at
//! construction and only read afterwards, so a table indexed by
//! `(time step, spatial index)` can always be mapped back to `(t, x)`.
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::grid::{SpatialGrid, TimeAxis};
//!
//! # fn main() -> diffusion_rs::Result<()> {
//! let grid = SpatialGrid::uniform(-50.0, 50.0, 300)?;
//! let axis = TimeAxis::uniform(0.0, 0.01, 1.0)?;
//!
//! assert_eq!(grid.len(), 300);
//! assert_eq!(axis.len(), 101);
//! # Ok(())
//! # }
//! ```

mod spatial;
mod temporal;

pub use spatial::SpatialGrid;
pub use temporal::{TimeAxis, MAX_TIME_STEPS};
