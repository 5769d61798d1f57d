//! Output module for simulation results
//!
//! Rendering is left to the caller (see [`FrameCursor`](crate::solver::FrameCursor)
//! for step-by-step playback). This module only writes data files:
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── export/             ← Data export
//!     ├── mod.rs          ← Exporter trait
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use diffusion_rs::output::export::{export_table_csv, CsvConfig};
//!
//! export_table_csv(table, &result.scenario, "data.csv", None)?;
//! ```

pub mod export;

pub use export::{export_profile_csv, export_table_csv, CsvConfig, CsvExporter, Exporter};
