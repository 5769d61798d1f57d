//! Uniform time axis

use crate::error::{DiffusionError, Result};

/// Relative distance to an integer below which a step count is snapped to it
///
/// `1.0 / 0.01` is not exactly 100 in binary floating point; without the
/// snap the ceiling would occasionally add a spurious extra instant.
const STEP_COUNT_SNAP: f64 = 1e-9;

/// Largest number of steps an axis may hold
///
/// Every step becomes one table row per scheme, so the cap keeps the axis
/// (and the tables built on it) allocatable.
pub const MAX_TIME_STEPS: usize = 100_000_000;

/// Uniformly spaced instants from `time_start` up to (at least) `time_max`
///
/// The axis holds `M = ⌈(time_max - time_start) / dt⌉ + 1` instants
/// `t_j = time_start + j·dt`. When the range is not a multiple of `dt`
/// the last instant overshoots `time_max` by less than one step.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    instants: Vec<f64>,
    dt: f64,
    time_max: f64,
}

impl TimeAxis {
    /// Build the axis covering `[time_start, time_max]`
    ///
    /// # Errors
    ///
    /// [`DiffusionError::InvalidTimeAxis`] when `time_delta <= 0`, when a
    /// parameter is not finite, when `time_start < 0` (the reference
    /// solution is only defined for t ≥ 0), when `time_max < time_start` or
    /// when the range needs more than [`MAX_TIME_STEPS`] steps.
    ///
    /// # Example
    ///
    /// ```rust
    /// use diffusion_rs::grid::TimeAxis;
    ///
    /// let axis = TimeAxis::uniform(0.0, 0.4, 1.0).unwrap();
    /// assert_eq!(axis.len(), 4);              // 0.0, 0.4, 0.8, 1.2
    /// assert!(axis.end() >= 1.0);
    /// ```
    pub fn uniform(time_start: f64, time_delta: f64, time_max: f64) -> Result<Self> {
        if !time_start.is_finite() || !time_delta.is_finite() || !time_max.is_finite() {
            return Err(DiffusionError::InvalidTimeAxis(format!(
                "time parameters must be finite (start {}, step {}, max {})",
                time_start, time_delta, time_max
            )));
        }
        if time_delta <= 0.0 {
            return Err(DiffusionError::InvalidTimeAxis(format!(
                "time step must be positive, got {}",
                time_delta
            )));
        }
        if time_start < 0.0 {
            return Err(DiffusionError::InvalidTimeAxis(format!(
                "start time must be non-negative, got {}",
                time_start
            )));
        }
        if time_max < time_start {
            return Err(DiffusionError::InvalidTimeAxis(format!(
                "max time {} precedes start time {}",
                time_max, time_start
            )));
        }

        let steps = step_count(time_max - time_start, time_delta).ok_or_else(|| {
            DiffusionError::InvalidTimeAxis(format!(
                "range [{}, {}] with step {} needs more than {} steps",
                time_start, time_max, time_delta, MAX_TIME_STEPS
            ))
        })?;

        // t_j = start + j·dt, computed from the index to avoid accumulation
        let instants = (0..=steps)
            .map(|j| time_start + j as f64 * time_delta)
            .collect();

        Ok(Self {
            instants,
            dt: time_delta,
            time_max,
        })
    }

    /// Number of instants M
    pub fn len(&self) -> usize {
        self.instants.len()
    }

    /// Always false: a valid axis holds at least its start instant
    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    /// Step between consecutive instants
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// First instant
    pub fn start(&self) -> f64 {
        self.instants[0]
    }

    /// Requested upper bound (may be below [`end`](Self::end))
    pub fn max(&self) -> f64 {
        self.time_max
    }

    /// Last generated instant, `>= max()`
    pub fn end(&self) -> f64 {
        self.instants[self.instants.len() - 1]
    }

    /// Instant of step `j`, if it exists
    pub fn get(&self, j: usize) -> Option<f64> {
        self.instants.get(j).copied()
    }

    /// All instants, in increasing order
    pub fn as_slice(&self) -> &[f64] {
        &self.instants
    }

    /// Iterate over instants
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.instants.iter().copied()
    }

    /// Index of the instant nearest to `t`, clamped to the axis
    pub fn step_of(&self, t: f64) -> usize {
        let raw = ((t - self.start()) / self.dt).round();
        if raw.is_nan() || raw <= 0.0 {
            0
        } else {
            (raw as usize).min(self.instants.len() - 1)
        }
    }
}

/// `⌈span / delta⌉`, snapping quotients that are an integer up to rounding
///
/// `None` when the count overflows or exceeds [`MAX_TIME_STEPS`].
fn step_count(span: f64, delta: f64) -> Option<usize> {
    let quotient = span / delta;
    if !quotient.is_finite() {
        return None;
    }

    let nearest = quotient.round();
    let steps = if (quotient - nearest).abs() <= STEP_COUNT_SNAP * nearest.max(1.0) {
        nearest
    } else {
        quotient.ceil()
    };

    if steps > MAX_TIME_STEPS as f64 {
        None
    } else {
        Some(steps as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_multiple_includes_endpoint() {
        let axis = TimeAxis::uniform(0.0, 0.01, 1.0).unwrap();

        assert_eq!(axis.len(), 101);
        assert_eq!(axis.start(), 0.0);
        assert_relative_eq!(axis.end(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_multiple_overshoots_max() {
        let axis = TimeAxis::uniform(0.0, 0.3, 1.0).unwrap();

        // ⌈1 / 0.3⌉ + 1 = 5 instants: 0, 0.3, 0.6, 0.9, 1.2
        assert_eq!(axis.len(), 5);
        assert!(axis.end() >= axis.max());
        assert!(axis.end() - axis.max() < axis.dt());
    }

    #[test]
    fn test_uniform_spacing() {
        let axis = TimeAxis::uniform(0.5, 0.07, 3.0).unwrap();

        assert_eq!(axis.start(), 0.5);
        for pair in axis.as_slice().windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.07, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_degenerate_range_single_instant() {
        let axis = TimeAxis::uniform(2.0, 0.1, 2.0).unwrap();
        assert_eq!(axis.len(), 1);
        assert_eq!(axis.end(), 2.0);
    }

    #[test]
    fn test_invalid_step_rejected() {
        for dt in [0.0, -0.1, f64::NAN] {
            let result = TimeAxis::uniform(0.0, dt, 1.0);
            assert!(matches!(result, Err(DiffusionError::InvalidTimeAxis(_))));
        }
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(TimeAxis::uniform(1.0, 0.1, 0.5).is_err());
    }

    #[test]
    fn test_negative_start_rejected() {
        assert!(TimeAxis::uniform(-0.5, 0.1, 1.0).is_err());
    }

    #[test]
    fn test_step_of_nearest_and_clamped() {
        let axis = TimeAxis::uniform(0.0, 0.1, 1.0).unwrap();

        assert_eq!(axis.step_of(0.0), 0);
        assert_eq!(axis.step_of(0.31), 3);
        assert_eq!(axis.step_of(-4.0), 0);
        assert_eq!(axis.step_of(99.0), axis.len() - 1);
    }

    #[test]
    fn test_step_count_snaps_rounding_noise() {
        assert_eq!(step_count(1.0, 0.01), Some(100));
        assert_eq!(step_count(20.0, 0.01), Some(2000));
        assert_eq!(step_count(1.0, 0.3), Some(4));
        assert_eq!(step_count(0.0, 0.1), Some(0));
    }

    #[test]
    fn test_oversized_axis_rejected() {
        // 1e10 / 1e-300 overflows to inf
        let result = TimeAxis::uniform(0.0, 1e-300, 1e10);
        assert!(matches!(result, Err(DiffusionError::InvalidTimeAxis(_))));

        // Finite but far beyond the cap
        let result = TimeAxis::uniform(0.0, 1e-6, 1e6);
        assert!(matches!(result, Err(DiffusionError::InvalidTimeAxis(_))));

        assert_eq!(step_count(MAX_TIME_STEPS as f64, 1.0), Some(MAX_TIME_STEPS));
        assert_eq!(step_count(MAX_TIME_STEPS as f64 + 1.0, 1.0), None);
    }
}
