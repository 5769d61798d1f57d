//! Reference field trait
//!
//! This module defines the seam between the physics (a known solution of
//! the diffusion equation) and the numerics (the integrators):
//!
//! - `ReferenceField`: value of the solution at any `(x, t)`
//!
//! Integrators only ever call through this trait. They read boundary and
//! initial values from it and never evaluate the closed form directly.

use nalgebra::DVector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::grid::SpatialGrid;

// =================================================================================================
// Reference Field
// =================================================================================================

/// A known solution `u(x, t)` of `∂u/∂t = D·∂²u/∂x²`
///
/// # Contract
///
/// - `value` is pure and deterministic, defined for every `x` and `t >= 0`
/// - `diffusivity` is the `D` the solution satisfies; integrators use it to
///   build their coefficients
///
/// # Example
///
/// ```rust
/// use diffusion_rs::physics::{AnalyticSolution, ReferenceField};
///
/// let field = AnalyticSolution::new();
/// assert_eq!(field.diffusivity(), 13.0);
/// assert!((field.value(0.0, 0.0) - 1.0).abs() < 1e-15);
/// ```
pub trait ReferenceField: Send + Sync {
    /// Value of the solution at position `x` and time `t`
    fn value(&self, x: f64, t: f64) -> f64;

    /// Diffusivity `D` of the equation this field solves
    fn diffusivity(&self) -> f64;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Reference profile over a whole grid at time `t`
    ///
    /// With the `parallel` feature, grids larger than
    /// [`parallel_threshold()`](crate::solver::parallel_threshold) are
    /// evaluated on the rayon pool. The result does not depend on the path.
    fn profile(&self, grid: &SpatialGrid, t: f64) -> DVector<f64> {
        let xs = grid.as_slice();

        #[cfg(feature = "parallel")]
        if xs.len() > crate::solver::parallel_threshold() {
            let values: Vec<f64> = xs.par_iter().map(|&x| self.value(x, t)).collect();
            return DVector::from_vec(values);
        }

        DVector::from_iterator(xs.len(), xs.iter().map(|&x| self.value(x, t)))
    }
}
