//! Temperature table: the M×N output of an integrator
//!
//! Rows are time steps, columns are spatial indices. A freshly seeded table
//! already holds every *fixed* cell:
//!
//! ```text
//!              t(j)
//!              ^
//!     t_{M-1}  | u   ·   ·   ·   ·   ·   u
//!     ...      | u   ·   ·   ·   ·   ·   u
//!     t_1      | u   ·   ·   ·   ·   ·   u
//!     t_0      | u   u   u   u   u   u   u
//!               -------------------------> x(i)
//!                x0                      x1
//!
//!     u : reference value (initial row, both boundary columns)
//!     · : NaN until the integrator fills it
//! ```
//!
//! Unfilled cells stay NaN, so the implicit scheme's final NaN scan also
//! catches any cell an integrator forgot to write.

use nalgebra::{DMatrix, DVector};

use crate::solver::scenario::Scenario;

// =================================================================================================
// Temperature Table
// =================================================================================================

/// Dense table of temperatures, one [`DVector`] per time step
///
/// Read-only once the owning integrator returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureTable {
    scheme: &'static str,
    rows: Vec<DVector<f64>>,
}

impl TemperatureTable {
    /// Seed a table with the initial row and both boundary columns
    ///
    /// Interior cells of rows `j >= 1` are NaN.
    pub(crate) fn seeded(scheme: &'static str, scenario: &Scenario) -> Self {
        let grid = &scenario.grid;
        let field = scenario.field.as_ref();
        let last = grid.last_index();
        let (x0, x1) = (grid.start(), grid.end());

        let mut rows = Vec::with_capacity(scenario.axis.len());

        for (j, t) in scenario.axis.iter().enumerate() {
            let row = if j == 0 {
                field.profile(grid, t)
            } else {
                let mut row = DVector::from_element(grid.len(), f64::NAN);
                row[0] = field.value(x0, t);
                row[last] = field.value(x1, t);
                row
            };
            rows.push(row);
        }

        Self { scheme, rows }
    }

    /// Previous row (read) and row `j` (write), for time-marching
    ///
    /// # Panics
    ///
    /// Panics when `j == 0` or `j >= n_steps()`.
    pub(crate) fn step_pair_mut(&mut self, j: usize) -> (&DVector<f64>, &mut DVector<f64>) {
        let (before, after) = self.rows.split_at_mut(j);
        (&before[j - 1], &mut after[0])
    }

    /// Name of the scheme that produced this table
    pub fn scheme(&self) -> &'static str {
        self.scheme
    }

    /// Number of time steps M (rows)
    pub fn n_steps(&self) -> usize {
        self.rows.len()
    }

    /// Number of spatial points N (columns)
    pub fn n_points(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Temperatures along the rod at time step `j`
    pub fn row(&self, j: usize) -> Option<&DVector<f64>> {
        self.rows.get(j)
    }

    /// Single cell `(time step j, point i)`
    pub fn get(&self, j: usize, i: usize) -> Option<f64> {
        self.rows.get(j).and_then(|row| row.get(i).copied())
    }

    /// All rows, in time order
    pub fn rows(&self) -> &[DVector<f64>] {
        &self.rows
    }

    /// Copy into an M×N matrix (row = time step)
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.n_steps(), self.n_points(), |j, i| self.rows[j][i])
    }

    /// Whether `(j, i)` is an initial or boundary cell
    pub fn is_fixed(&self, j: usize, i: usize) -> bool {
        j == 0 || i == 0 || i + 1 == self.n_points()
    }

    /// First NaN cell in row-major order
    ///
    /// Infinity is not reported: only NaN marks a corrupted table.
    pub fn first_nan(&self) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(j, row)| {
            row.iter().position(|value| value.is_nan()).map(|i| (j, i))
        })
    }

    /// Number of NaN or infinite cells
    pub fn count_non_finite(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|value| !value.is_finite()).count())
            .sum()
    }

    /// Largest absolute value in row `j` (NaN cells ignored, infinity kept)
    pub fn row_max_abs(&self, j: usize) -> Option<f64> {
        self.rows.get(j).map(|row| {
            row.iter()
                .filter(|value| !value.is_nan())
                .fold(0.0_f64, |acc, value| acc.max(value.abs()))
        })
    }

    /// Error of row `j` against the scenario's reference field
    pub fn row_error(&self, scenario: &Scenario, j: usize) -> Option<ErrorSummary> {
        let row = self.rows.get(j)?;
        let t = scenario.axis.get(j)?;
        let reference = scenario.field.profile(&scenario.grid, t);

        let mut summary = ErrorAccumulator::default();
        for (i, (&value, &exact)) in row.iter().zip(reference.iter()).enumerate() {
            summary.push(j, i, value - exact);
        }
        Some(summary.finish())
    }

    /// Error of the whole table against the scenario's reference field
    pub fn error_against(&self, scenario: &Scenario) -> ErrorSummary {
        let mut summary = ErrorAccumulator::default();

        for (j, (row, t)) in self.rows.iter().zip(scenario.axis.iter()).enumerate() {
            let reference = scenario.field.profile(&scenario.grid, t);
            for (i, (&value, &exact)) in row.iter().zip(reference.iter()).enumerate() {
                summary.push(j, i, value - exact);
            }
        }

        summary.finish()
    }
}

// =================================================================================================
// Error Statistics
// =================================================================================================

/// Deviation of a table (or row) from the reference field
///
/// Non-finite differences count as infinite error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorSummary {
    /// Largest |numeric - exact|
    pub max_abs: f64,

    /// Root-mean-square of the differences
    pub rms: f64,

    /// Cell `(time step, point)` where `max_abs` occurs
    pub worst_cell: (usize, usize),

    /// Number of cells compared
    pub cells: usize,
}

#[derive(Default)]
struct ErrorAccumulator {
    max_abs: f64,
    sum_squared: f64,
    worst_cell: (usize, usize),
    cells: usize,
}

impl ErrorAccumulator {
    fn push(&mut self, j: usize, i: usize, difference: f64) {
        let magnitude = if difference.is_finite() {
            difference.abs()
        } else {
            f64::INFINITY
        };

        if magnitude > self.max_abs || self.cells == 0 {
            self.max_abs = magnitude;
            self.worst_cell = (j, i);
        }
        self.sum_squared += magnitude * magnitude;
        self.cells += 1;
    }

    fn finish(self) -> ErrorSummary {
        let rms = if self.cells > 0 {
            (self.sum_squared / self.cells as f64).sqrt()
        } else {
            0.0
        };

        ErrorSummary {
            max_abs: self.max_abs,
            rms,
            worst_cell: self.worst_cell,
            cells: self.cells,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
