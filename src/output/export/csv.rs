//! CSV export of temperature tables and profiles
//!
//! Two layouts are supported:
//!
//! - **Table** (`export_table_csv`): one line per time step, first column
//!   the instant, then one column per grid point
//! - **Profile** (`export_profile_csv`): one line per grid point, first
//!   column the position, then one column per labelled profile (reference,
//!   explicit, implicit...) at a single instant
//!
//! # Quick Examples
//!
//! ```rust,ignore
//! use diffusion_rs::output::export::{export_table_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata::from_scenario("implicit", &result.scenario);
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_table_csv(implicit, &result.scenario, "implicit.csv", Some(&config))?;
//! ```
//!
//! **Output** (`implicit.csv`):
//! ```csv
//! # Diffusion Simulation Data
//! # Generated: 2026-10-18T09:30:00+00:00
//! # Scheme: implicit
//! # Field: Analytic Gaussian (D = 13)
//! # Points: 300
//! # Time Steps: 101
//! #
//! Time,-50.000000,-49.665552,...
//! 0.000000,0.000000,0.000000,...
//! ```
//!
//! # Non-finite values
//!
//! An unstable explicit run legitimately produces `inf` and `NaN` cells.
//! They are written as-is (with a warning in the log) unless
//! `CsvConfig::allow_non_finite` is false, in which case export fails.

use std::fs::File;
use std::io::{BufWriter, Write};

use nalgebra::DVector;

use crate::error::{DiffusionError, Result};
use crate::grid::SpatialGrid;
use crate::output::export::Exporter;
use crate::solver::{Scenario, Scheme, SimulationResult, TemperatureTable};

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use diffusion_rs::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// assert!(config.allow_non_finite);
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the first column in table layout (default: "Time")
    pub time_header: String,

    /// Header of the first column in profile layout (default: "x")
    pub position_header: String,

    /// Write NaN/inf cells instead of failing (default: true)
    pub allow_non_finite: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            time_header: "Time".to_string(),
            position_header: "x".to_string(),
            allow_non_finite: true,
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }

    /// Builder pattern: refuse NaN/inf cells
    pub fn finite_only(mut self) -> Self {
        self.allow_non_finite = false;
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are `Some` are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Scheme that produced the data ("explicit", "implicit")
    pub scheme: Option<String>,

    /// Reference field name
    pub field_name: Option<String>,

    /// Number of grid points
    pub points: Option<usize>,

    /// Number of time steps
    pub time_steps: Option<usize>,

    /// Grid spacing
    pub dx: Option<f64>,

    /// Time step
    pub dt: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata describing a scenario
    pub fn from_scenario(scheme: &str, scenario: &Scenario) -> Self {
        Self {
            scheme: Some(scheme.to_string()),
            field_name: Some(scenario.field_name().to_string()),
            points: Some(scenario.n_points()),
            time_steps: Some(scenario.n_steps()),
            dx: Some(scenario.dx()),
            dt: Some(scenario.dt()),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(writer: &mut W, metadata: &CsvMetadata) -> Result<()> {
    writeln!(writer, "# Diffusion Simulation Data")?;

    let now = chrono::Utc::now();
    writeln!(writer, "# Generated: {}", now.to_rfc3339())?;

    if let Some(scheme) = &metadata.scheme {
        writeln!(writer, "# Scheme: {}", scheme)?;
    }
    if let Some(field) = &metadata.field_name {
        writeln!(writer, "# Field: {}", field)?;
    }
    if let Some(points) = metadata.points {
        writeln!(writer, "# Points: {}", points)?;
    }
    if let Some(steps) = metadata.time_steps {
        writeln!(writer, "# Time Steps: {}", steps)?;
    }
    if let Some(dx) = metadata.dx {
        writeln!(writer, "# dx: {}", dx)?;
    }
    if let Some(dt) = metadata.dt {
        writeln!(writer, "# dt: {}", dt)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(writer, "# {}: {}", key, value)?;
    }

    writeln!(writer, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn write_line<W: Write>(writer: &mut W, first: &str, rest: impl Iterator<Item = String>, delimiter: char) -> Result<()> {
    write!(writer, "{}", first)?;
    for cell in rest {
        write!(writer, "{}{}", delimiter, cell)?;
    }
    writeln!(writer)?;
    Ok(())
}

fn check_non_finite(count: usize, what: &str, config: &CsvConfig) -> Result<()> {
    if count == 0 {
        return Ok(());
    }
    if !config.allow_non_finite {
        return Err(DiffusionError::Export(format!(
            "{} non-finite values in {}",
            count, what
        )));
    }
    log::warn!("exporting {} with {} non-finite values", what, count);
    Ok(())
}

fn open(output_path: &str, config: &CsvConfig) -> Result<BufWriter<File>> {
    let mut writer = BufWriter::new(File::create(output_path)?);

    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut writer, metadata)?;
        }
    }

    Ok(writer)
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a whole table, one line per time step
///
/// # Errors
///
/// - table shape does not match the scenario
/// - non-finite cells while `allow_non_finite` is false
/// - file creation or write errors
pub fn export_table_csv(
    table: &TemperatureTable,
    scenario: &Scenario,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<()> {
    // ============================= Validation =============================

    if table.n_steps() != scenario.n_steps() || table.n_points() != scenario.n_points() {
        return Err(DiffusionError::Export(format!(
            "table is {}×{} but scenario is {}×{}",
            table.n_steps(),
            table.n_points(),
            scenario.n_steps(),
            scenario.n_points()
        )));
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    check_non_finite(
        table.count_non_finite(),
        &format!("{} table", table.scheme()),
        configuration,
    )?;

    // ============================= Write ==================================

    let mut writer = open(output_path, configuration)?;

    write_line(
        &mut writer,
        &configuration.time_header,
        scenario.grid.iter().map(|x| format_number(x, configuration)),
        configuration.delimiter,
    )?;

    for (row, t) in table.rows().iter().zip(scenario.axis.iter()) {
        write_line(
            &mut writer,
            &format_number(t, configuration),
            row.iter().map(|&value| format_number(value, configuration)),
            configuration.delimiter,
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Export labelled profiles at a single instant, one line per grid point
///
/// # Example
///
/// ```rust,ignore
/// export_profile_csv(
///     result.grid(),
///     &[("reference", &reference), ("implicit", implicit_row)],
///     "step_100.csv",
///     None,
/// )?;
/// ```
pub fn export_profile_csv(
    grid: &SpatialGrid,
    profiles: &[(&str, &DVector<f64>)],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<()> {
    // ============================= Validation =============================

    if profiles.is_empty() {
        return Err(DiffusionError::Export("no profile to export".to_string()));
    }

    for (label, profile) in profiles {
        if profile.len() != grid.len() {
            return Err(DiffusionError::Export(format!(
                "profile '{}' has {} values for {} grid points",
                label,
                profile.len(),
                grid.len()
            )));
        }
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    for (label, profile) in profiles {
        let count = profile.iter().filter(|value| !value.is_finite()).count();
        check_non_finite(count, &format!("profile '{}'", label), configuration)?;
    }

    // ============================= Write ==================================

    let mut writer = open(output_path, configuration)?;

    write_line(
        &mut writer,
        &configuration.position_header,
        profiles.iter().map(|(label, _)| label.to_string()),
        configuration.delimiter,
    )?;

    for (i, x) in grid.iter().enumerate() {
        write_line(
            &mut writer,
            &format_number(x, configuration),
            profiles.iter().map(|(_, profile)| format_number(profile[i], configuration)),
            configuration.delimiter,
        )?;
    }

    writer.flush()?;
    Ok(())
}

// =============================================================================
// Exporter
// =============================================================================

/// [`Exporter`] writing CSV files with a fixed [`CsvConfig`]
///
/// Metadata headers are filled from the result when `include_metadata` is
/// set and no explicit metadata was given.
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    fn config_for(&self, scheme: &str, result: &SimulationResult) -> CsvConfig {
        let mut config = self.config.clone();
        if config.include_metadata && config.metadata.is_none() {
            let mut metadata = CsvMetadata::from_scenario(scheme, &result.scenario);
            let mut keys: Vec<_> = result.metadata.iter().collect();
            keys.sort();
            for (key, value) in keys {
                metadata.add_custom(key.clone(), value.clone());
            }
            config.metadata = Some(metadata);
        }
        config
    }
}

impl Exporter for CsvExporter {
    fn export_table(&self, result: &SimulationResult, scheme: Scheme, path: &str) -> Result<()> {
        let table = result.table(scheme).ok_or_else(|| {
            DiffusionError::Export(format!("{} scheme was not run", scheme))
        })?;
        let config = self.config_for(scheme.name(), result);
        export_table_csv(table, &result.scenario, path, Some(&config))
    }

    fn export_step(&self, result: &SimulationResult, step: usize, path: &str) -> Result<()> {
        let reference = result.reference_profile(step).ok_or_else(|| {
            DiffusionError::Export(format!(
                "step {} is past the last of {} time steps",
                step,
                result.len()
            ))
        })?;

        let mut profiles = vec![("reference", &reference)];
        for scheme in [Scheme::Explicit, Scheme::Implicit] {
            if let Some(row) = result.table(scheme).and_then(|table| table.row(step)) {
                profiles.push((scheme.name(), row));
            }
        }

        let config = self.config_for("comparison", result);
        export_profile_csv(result.grid(), &profiles, path, Some(&config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
