//! Crate error type
//!
//! Every fallible operation returns [`Result<T>`]. Setup failures
//! (grid, time axis, configuration) are raised before any integration
//! starts; [`DiffusionError::NumericalCorruption`] is the only error an
//! integrator itself produces.

use thiserror::Error;

/// Errors raised while building or running a diffusion simulation
#[derive(Debug, Error)]
pub enum DiffusionError {
    /// Spatial grid parameters are unusable (too few points, empty rod...)
    #[error("invalid spatial grid: {0}")]
    InvalidGrid(String),

    /// Time axis parameters are unusable (non-positive step, reversed range...)
    #[error("invalid time axis: {0}")]
    InvalidTimeAxis(String),

    /// Configuration-level inconsistency
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A NaN was found in a finished table
    ///
    /// Fatal: the whole table is discarded.
    #[error("NaN detected in {scheme} table at time step {step}, point {point}")]
    NumericalCorruption {
        scheme: &'static str,
        step: usize,
        point: usize,
    },

    /// Export rejected its input
    #[error("export failed: {0}")]
    Export(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, DiffusionError>;
