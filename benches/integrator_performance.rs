//! Performance benchmarks for the two integrators
//!
//! # What We're Measuring
//!
//! 1. **Explicit (FTCS)**:
//!    - One stencil evaluation per interior cell
//!    - Cost ∝ points × time steps
//!
//! 2. **Implicit (Thomas)**:
//!    - Forward sweep + back substitution per row, two scratch vectors
//!    - Cost ∝ points × time steps, with a larger constant
//!
//! 3. **Reference profiles**:
//!    - One analytic evaluation per point (`exp` + `sqrt`)
//!    - Sequential vs rayon with `--features parallel`
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench integrator_performance
//! cargo bench --bench integrator_performance implicit
//! cargo bench --bench integrator_performance --features parallel profile
//! ```
//!
//! # Expected Results
//!
//! Both schemes scale linearly in points and in steps. The implicit
//! scheme should stay within a small factor (≈ 2–4×) of the explicit one:
//! it touches every cell twice and divides once per cell.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use diffusion_rs::physics::{AnalyticSolution, ReferenceField};
use diffusion_rs::solver::{
    set_parallel_threshold, ExplicitSolver, ImplicitSolver, Scenario, SimulationConfiguration,
    Solver,
};
use std::hint::black_box;

// =================================================================================================
// Setup
// =================================================================================================

/// Unit-spaced rod with `points` points, 100 steps of dt = 0.01
///
/// dx = 1 keeps the explicit scheme stable (r = 0.13), so the benchmark
/// measures ordinary arithmetic rather than overflowing values.
fn unit_rod(points: usize, time_steps: usize) -> Scenario {
    let half = (points - 1) as f64 / 2.0;
    let config = SimulationConfiguration::new(
        0.0,
        0.01,
        0.01 * time_steps as f64,
        -half,
        half,
        points,
    );
    Scenario::from_configuration(&config).unwrap()
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Scaling with the number of grid points, 100 time steps
fn benchmark_point_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Point Scaling");

    for points in [50, 300, 1000, 5000] {
        let scenario = unit_rod(points, 100);
        group.throughput(Throughput::Elements((points * 100) as u64));

        group.bench_with_input(BenchmarkId::new("explicit", points), &scenario, |b, scenario| {
            let solver = ExplicitSolver::new();
            b.iter(|| solver.solve(black_box(scenario)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("implicit", points), &scenario, |b, scenario| {
            let solver = ImplicitSolver::new();
            b.iter(|| solver.solve(black_box(scenario)).unwrap());
        });
    }

    group.finish();
}

/// Scaling with the number of time steps, 300 points (the default rod)
fn benchmark_step_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Step Scaling");

    for time_steps in [100, 1000, 2000] {
        let scenario = unit_rod(300, time_steps);
        group.throughput(Throughput::Elements((300 * time_steps) as u64));

        group.bench_with_input(
            BenchmarkId::new("implicit", time_steps),
            &scenario,
            |b, scenario| {
                let solver = ImplicitSolver::new();
                b.iter(|| solver.solve(black_box(scenario)).unwrap());
            },
        );
    }

    group.finish();
}

/// Reference profile evaluation below and above the parallel threshold
///
/// Without the `parallel` feature both entries take the sequential path.
fn benchmark_reference_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reference Profile");
    let field = AnalyticSolution::new();
    let scenario = unit_rod(100_001, 1);

    set_parallel_threshold(usize::MAX);
    group.bench_function("profile sequential", |b| {
        b.iter(|| field.profile(black_box(&scenario.grid), black_box(0.5)))
    });

    set_parallel_threshold(1024);
    group.bench_function("profile above threshold", |b| {
        b.iter(|| field.profile(black_box(&scenario.grid), black_box(0.5)))
    });

    group.finish();
}

// =================================================================================================
// Criterion Configuration
// =================================================================================================

criterion_group!(
    benches,
    benchmark_point_scaling,
    benchmark_step_scaling,
    benchmark_reference_profile,
);
criterion_main!(benches);
