//! Export of simulation results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use diffusion_rs::output::export::{CsvExporter, Exporter};
//! use diffusion_rs::solver::{simulate, Scheme, SimulationConfiguration};
//!
//! # fn main() -> diffusion_rs::Result<()> {
//! let result = simulate(&SimulationConfiguration::comparison())?;
//! let exporter = CsvExporter::default();
//!
//! // Whole implicit table, one line per time step
//! exporter.export_table(&result, Scheme::Implicit, "implicit.csv")?;
//!
//! // Reference and both schemes side by side at step 50
//! exporter.export_step(&result, 50, "step_50.csv")?;
//! # Ok(())
//! # }
//! ```

pub mod csv;

pub use csv::{export_profile_csv, export_table_csv, CsvConfig, CsvExporter, CsvMetadata};

use crate::error::Result;
use crate::solver::{Scheme, SimulationResult};

/// Abstraction trait for all export formats.
pub trait Exporter {
    /// Exports the full table of one scheme.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `scheme` was not run
    /// - the path is invalid or the directory does not exist
    fn export_table(&self, result: &SimulationResult, scheme: Scheme, path: &str) -> Result<()>;

    /// Exports the reference profile and every computed row at one time step.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is past the end of the time axis, or on I/O failure.
    fn export_step(&self, result: &SimulationResult, step: usize, path: &str) -> Result<()>;
}
