//! Helper functions for integration tests

use diffusion_rs::solver::{
    simulate, Scenario, SimulationConfiguration, SimulationResult, TemperatureTable,
};

/// Scenario on the analytic field, both schemes enabled
pub fn scenario(x0: f64, x1: f64, n: usize, t0: f64, dt: f64, t_max: f64) -> Scenario {
    let config = SimulationConfiguration::new(t0, dt, t_max, x0, x1, n);
    Scenario::from_configuration(&config).expect("valid test configuration")
}

/// Full run on the analytic field, both schemes enabled
pub fn run(x0: f64, x1: f64, n: usize, t0: f64, dt: f64, t_max: f64) -> SimulationResult {
    let config = SimulationConfiguration::new(t0, dt, t_max, x0, x1, n);
    simulate(&config).expect("simulation should succeed")
}

/// Largest |numeric - exact| over a whole table
pub fn max_error(table: &TemperatureTable, scenario: &Scenario) -> f64 {
    table.error_against(scenario).max_abs
}

/// Row 0 and both boundary columns hold the reference values bit for bit
pub fn assert_fixed_cells_exact(table: &TemperatureTable, scenario: &Scenario) {
    let last = scenario.n_points() - 1;

    for (j, t) in scenario.axis.iter().enumerate() {
        for i in 0..scenario.n_points() {
            if !table.is_fixed(j, i) {
                continue;
            }
            let x = scenario.grid.get(i).unwrap();
            assert_eq!(
                table.get(j, i).unwrap(),
                scenario.field.value(x, t),
                "{} table: fixed cell ({}, {}) altered",
                table.scheme(),
                j,
                i
            );
        }
        assert!(table.is_fixed(j, 0) && table.is_fixed(j, last));
    }
}
