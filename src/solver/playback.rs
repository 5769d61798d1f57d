//! Read-only playback over a finished run
//!
//! A renderer (out of scope for this crate) walks the time axis one step at
//! a time. [`FrameCursor`] is that walk: it holds an index into the
//! precomputed tables and yields one [`Frame`] per time step. When the axis
//! is exhausted the cursor returns `None`; what happens next (stop, loop,
//! ask the user) is the caller's decision.
//!
//! ```rust
//! use diffusion_rs::solver::{simulate, SimulationConfiguration};
//!
//! # fn main() -> diffusion_rs::Result<()> {
//! let config = SimulationConfiguration::comparison().time_range(0.0, 0.01, 0.05);
//! let result = simulate(&config)?;
//!
//! let mut cursor = result.frames();
//! while let Some(frame) = cursor.next() {
//!     let implicit = frame.implicit.expect("implicit enabled");
//!     assert_eq!(implicit.len(), frame.reference.len());
//! }
//! assert!(cursor.is_exhausted());
//! # Ok(())
//! # }
//! ```

use nalgebra::DVector;

use crate::solver::traits::SimulationResult;

/// Everything a renderer needs for one time step
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    /// Time step index j
    pub step: usize,

    /// Instant t_j
    pub time: f64,

    /// Reference profile on the grid at t_j
    pub reference: DVector<f64>,

    /// Explicit row j, if that scheme was run
    pub explicit: Option<&'a DVector<f64>>,

    /// Implicit row j, if that scheme was run
    pub implicit: Option<&'a DVector<f64>>,
}

/// Index cursor over the time steps of a [`SimulationResult`]
#[derive(Debug, Clone)]
pub struct FrameCursor<'a> {
    result: &'a SimulationResult,
    next: usize,
}

impl<'a> FrameCursor<'a> {
    /// Cursor positioned on the first time step
    pub fn new(result: &'a SimulationResult) -> Self {
        Self { result, next: 0 }
    }

    /// Index of the step the next call to `next()` yields
    pub fn position(&self) -> usize {
        self.next
    }

    /// Whether the time axis has been fully played
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.result.len()
    }

    /// Jump to step `j` (clamped to the end of the axis)
    pub fn seek(&mut self, j: usize) {
        self.next = j.min(self.result.len());
    }

    /// Back to the first step
    pub fn rewind(&mut self) {
        self.next = 0;
    }

    /// Frame of step `j` without moving the cursor
    pub fn frame_at(&self, j: usize) -> Option<Frame<'a>> {
        let time = self.result.axis().get(j)?;
        let reference = self.result.field().profile(self.result.grid(), time);

        Some(Frame {
            step: j,
            time,
            reference,
            explicit: self.result.explicit.as_ref().and_then(|table| table.row(j)),
            implicit: self.result.implicit.as_ref().and_then(|table| table.row(j)),
        })
    }
}

impl<'a> Iterator for FrameCursor<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.frame_at(self.next)?;
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.result.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameCursor<'_> {}

impl SimulationResult {
    /// Cursor over every time step, from the first
    pub fn frames(&self) -> FrameCursor<'_> {
        FrameCursor::new(self)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{simulate, SimulationConfiguration};

    fn short_run() -> SimulationResult {
        let config = SimulationConfiguration::new(0.0, 0.01, 0.05, -5.0, 5.0, 11);
        simulate(&config).unwrap()
    }

    #[test]
    fn test_cursor_visits_every_step_once() {
        let result = short_run();
        let steps: Vec<usize> = result.frames().map(|frame| frame.step).collect();

        assert_eq!(steps, (0..result.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_cursor_reports_exhaustion() {
        let result = short_run();
        let mut cursor = result.frames();

        assert_eq!(cursor.len(), 6);
        for _ in 0..6 {
            assert!(!cursor.is_exhausted());
            assert!(cursor.next().is_some());
        }
        assert!(cursor.is_exhausted());
        assert!(cursor.next().is_none());
        assert_eq!(cursor.len(), 0);
    }

    #[test]
    fn test_frame_rows_come_from_tables() {
        let result = short_run();
        let frame = result.frames().frame_at(3).unwrap();

        assert_eq!(frame.explicit, result.explicit.as_ref().unwrap().row(3));
        assert_eq!(frame.implicit, result.implicit.as_ref().unwrap().row(3));
        assert_eq!(frame.time, result.axis().get(3).unwrap());
        assert_eq!(Some(frame.reference), result.reference_profile(3));
    }

    #[test]
    fn test_disabled_scheme_yields_none() {
        let config = SimulationConfiguration::new(0.0, 0.01, 0.02, -5.0, 5.0, 11)
            .with_implicit(false);
        let result = simulate(&config).unwrap();

        for frame in result.frames() {
            assert!(frame.explicit.is_some());
            assert!(frame.implicit.is_none());
        }
    }

    #[test]
    fn test_seek_and_rewind() {
        let result = short_run();
        let mut cursor = result.frames();

        cursor.seek(4);
        assert_eq!(cursor.next().map(|frame| frame.step), Some(4));

        cursor.seek(100);
        assert!(cursor.is_exhausted());

        cursor.rewind();
        assert_eq!(cursor.position(), 0);
    }
}
