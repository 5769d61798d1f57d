//! Uniform spatial grid along the rod

use crate::error::{DiffusionError, Result};

/// Uniformly spaced positions along the rod
///
/// Points are `x_i = x0 + i·dx` with `dx = (x1 - x0) / (N - 1)`. The last
/// point is pinned to `x1` so the right boundary is sampled exactly.
///
/// # Invariants
///
/// - at least two points
/// - strictly increasing, constant spacing `dx > 0`
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialGrid {
    points: Vec<f64>,
    dx: f64,
}

impl SpatialGrid {
    /// Build a grid of `num_points` positions from `x0` to `x1` inclusive
    ///
    /// # Errors
    ///
    /// [`DiffusionError::InvalidGrid`] when `num_points < 2`, when a bound
    /// is not finite, when `x1 <= x0`, or when the span overflows so that
    /// the spacing is not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use diffusion_rs::grid::SpatialGrid;
    ///
    /// let grid = SpatialGrid::uniform(0.0, 1.0, 5).unwrap();
    /// assert_eq!(grid.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn uniform(x0: f64, x1: f64, num_points: usize) -> Result<Self> {
        if num_points < 2 {
            return Err(DiffusionError::InvalidGrid(format!(
                "at least 2 points are required, got {}",
                num_points
            )));
        }
        if !x0.is_finite() || !x1.is_finite() {
            return Err(DiffusionError::InvalidGrid(format!(
                "rod bounds must be finite, got [{}, {}]",
                x0, x1
            )));
        }
        if x1 <= x0 {
            return Err(DiffusionError::InvalidGrid(format!(
                "rod end {} must be greater than rod start {}",
                x1, x0
            )));
        }

        let dx = (x1 - x0) / (num_points - 1) as f64;
        if !dx.is_finite() {
            return Err(DiffusionError::InvalidGrid(format!(
                "rod [{}, {}] is too long to sample: spacing overflows",
                x0, x1
            )));
        }

        // Index-based positions avoid drift from repeated `x += dx`
        let mut points: Vec<f64> = (0..num_points).map(|i| x0 + i as f64 * dx).collect();
        points[num_points - 1] = x1;

        Ok(Self { points, dx })
    }

    /// Number of points N
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a valid grid holds at least two points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Spacing between consecutive points
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Left end of the rod
    pub fn start(&self) -> f64 {
        self.points[0]
    }

    /// Right end of the rod
    pub fn end(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Position of point `i`, if it exists
    pub fn get(&self, i: usize) -> Option<f64> {
        self.points.get(i).copied()
    }

    /// All positions, in increasing order
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// Iterate over positions
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().copied()
    }

    /// Index of the last point (right boundary)
    pub(crate) fn last_index(&self) -> usize {
        self.points.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_endpoints_and_length() {
        let grid = SpatialGrid::uniform(-50.0, 50.0, 300).unwrap();

        assert_eq!(grid.len(), 300);
        assert_eq!(grid.start(), -50.0);
        assert_eq!(grid.end(), 50.0);
        assert_relative_eq!(grid.dx(), 100.0 / 299.0, epsilon = 1e-15);
    }

    #[test]
    fn test_grid_constant_spacing() {
        let grid = SpatialGrid::uniform(-1.3, 2.7, 41).unwrap();

        for pair in grid.as_slice().windows(2) {
            assert!(pair[1] > pair[0], "grid must be strictly increasing");
            assert_relative_eq!(pair[1] - pair[0], grid.dx(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_two_point_grid() {
        let grid = SpatialGrid::uniform(0.0, 3.0, 2).unwrap();
        assert_eq!(grid.as_slice(), &[0.0, 3.0]);
        assert_eq!(grid.dx(), 3.0);
        assert_eq!(grid.last_index(), 1);
    }

    #[test]
    fn test_too_few_points_rejected() {
        for n in [0, 1] {
            let result = SpatialGrid::uniform(0.0, 1.0, n);
            assert!(matches!(result, Err(DiffusionError::InvalidGrid(_))));
        }
    }

    #[test]
    fn test_reversed_or_empty_rod_rejected() {
        assert!(SpatialGrid::uniform(1.0, 1.0, 10).is_err());
        assert!(SpatialGrid::uniform(2.0, -2.0, 10).is_err());
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        assert!(SpatialGrid::uniform(f64::NAN, 1.0, 10).is_err());
        assert!(SpatialGrid::uniform(0.0, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = SpatialGrid::uniform(0.0, 1.0, 3).unwrap();
        assert_eq!(grid.get(1), Some(0.5));
        assert_eq!(grid.get(3), None);
    }

    #[test]
    fn test_overflowing_span_rejected() {
        let result = SpatialGrid::uniform(-1e308, 1e308, 10);
        assert!(matches!(result, Err(DiffusionError::InvalidGrid(_))));

        // Large but representable span still works
        let grid = SpatialGrid::uniform(-1e307, 1e307, 3).unwrap();
        assert_eq!(grid.get(1), Some(0.0));
    }
}
