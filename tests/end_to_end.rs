//! Full runs through `simulate`, playback and export

use std::fs;

use approx::assert_relative_eq;
use diffusion_rs::output::export::{CsvConfig, CsvExporter, Exporter};
use diffusion_rs::physics::{AnalyticSolution, ReferenceField};
use diffusion_rs::solver::{simulate, ExplicitSolver, Scheme, SimulationConfiguration};
use diffusion_rs::DiffusionError;

mod common;
use common::{assert_fixed_cells_exact, run};

#[test]
fn test_reference_comparison_run() {
    // x0 = -50, x1 = 50, N = 300, dt = 0.01, time_max = 1
    let config = SimulationConfiguration::comparison();
    let result = simulate(&config).unwrap();
    let implicit = result.table(Scheme::Implicit).unwrap();
    let field = AnalyticSolution::new();

    assert_eq!(result.grid().len(), 300);
    assert_eq!(result.axis().len(), 101);

    let x = result.grid().get(149).unwrap();
    assert_eq!(implicit.get(0, 149).unwrap(), field.value(x, 0.0));

    let first_step = implicit.get(1, 149).unwrap();
    assert!(first_step.is_finite());
    assert!(
        (first_step - field.value(x, 0.01)).abs() < 5e-2,
        "implicit[1][149] = {} vs analytic {}",
        first_step,
        field.value(x, 0.01)
    );

    assert_eq!(implicit.count_non_finite(), 0);
    assert_fixed_cells_exact(implicit, &result.scenario);
}

#[test]
fn test_comparison_explicit_is_unstable_but_kept() {
    let result = simulate(&SimulationConfiguration::comparison()).unwrap();
    let explicit = result.table(Scheme::Explicit).unwrap();

    // dx ≈ 0.334, dt = 0.01: r ≈ 1.16
    assert!(!ExplicitSolver::new().is_stable(&result.scenario));
    assert_eq!(explicit.n_steps(), 101);
    assert_fixed_cells_exact(explicit, &result.scenario);
}

#[test]
fn test_grid_and_axis_properties() {
    let result = run(-7.5, 12.5, 81, 0.5, 0.025, 1.5);
    let grid = result.grid();
    let axis = result.axis();

    assert_eq!(grid.len(), 81);
    assert_eq!(grid.get(0), Some(-7.5));
    assert_eq!(grid.get(80), Some(12.5));
    for pair in grid.as_slice().windows(2) {
        assert_relative_eq!(pair[1] - pair[0], 0.25, epsilon = 1e-12);
    }

    assert_eq!(axis.get(0), Some(0.5));
    assert_relative_eq!(axis.dt(), 0.025);
    assert!(axis.end() >= 1.5);
    assert_eq!(axis.len(), 41);
}

#[test]
fn test_setup_errors_surface_before_integration() {
    let base = SimulationConfiguration::default();

    assert!(matches!(
        simulate(&base.clone().rod(0.0, 1.0, 1)),
        Err(DiffusionError::InvalidGrid(_))
    ));
    assert!(matches!(
        simulate(&base.clone().rod(1.0, 1.0, 10)),
        Err(DiffusionError::InvalidGrid(_))
    ));
    assert!(matches!(
        simulate(&base.clone().time_range(0.0, 0.0, 1.0)),
        Err(DiffusionError::InvalidTimeAxis(_))
    ));
    assert!(matches!(
        simulate(&base.clone().time_range(2.0, 0.1, 1.0)),
        Err(DiffusionError::InvalidTimeAxis(_))
    ));
    assert!(matches!(
        simulate(&base.time_range(0.0, f64::NAN, 1.0)),
        Err(DiffusionError::InvalidTimeAxis(_))
    ));
}

#[test]
fn test_playback_walks_whole_axis() {
    let result = run(-10.0, 10.0, 41, 0.0, 0.01, 0.1);
    let mut cursor = result.frames();
    let mut seen = 0;

    while let Some(frame) = cursor.next() {
        assert_eq!(frame.step, seen);
        assert_relative_eq!(frame.time, 0.01 * seen as f64, epsilon = 1e-15);
        assert_eq!(frame.explicit.unwrap().len(), 41);
        assert_eq!(frame.implicit.unwrap().len(), 41);
        assert_eq!(frame.reference.len(), 41);
        seen += 1;
    }

    assert_eq!(seen, 11);
    assert!(cursor.is_exhausted());

    cursor.rewind();
    assert_eq!(cursor.next().map(|frame| frame.step), Some(0));
}

#[test]
fn test_export_run_to_directory() {
    let result = run(-10.0, 10.0, 21, 0.0, 0.01, 0.05);
    let directory = tempfile::tempdir().unwrap();
    let exporter = CsvExporter::new(CsvConfig {
        include_metadata: true,
        ..Default::default()
    });

    let table_path = directory.path().join("implicit.csv");
    let step_path = directory.path().join("step_3.csv");
    exporter
        .export_table(&result, Scheme::Implicit, table_path.to_str().unwrap())
        .unwrap();
    exporter
        .export_step(&result, 3, step_path.to_str().unwrap())
        .unwrap();

    let table = fs::read_to_string(&table_path).unwrap();
    let rows: Vec<&str> = table.lines().filter(|line| !line.starts_with('#')).collect();
    assert_eq!(rows.len(), 1 + 6);
    assert!(rows[0].starts_with("Time,-10.000000,"));
    assert!(table.contains("# Field: Analytic Gaussian (D = 13)"));

    let step = fs::read_to_string(&step_path).unwrap();
    let rows: Vec<&str> = step.lines().filter(|line| !line.starts_with('#')).collect();
    assert_eq!(rows[0], "x,reference,explicit,implicit");
    assert_eq!(rows.len(), 1 + 21);
}
