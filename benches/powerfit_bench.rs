//! Criterion benchmarks for u-powerfit.
//!
//! One row of each algorithm on the default box, plus a small batch to
//! measure driver overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_powerfit::driver::{run_row, BatchRunner, OptimizerConfig};
use u_powerfit::ga::{GaConfig, GeneticAlgorithm};
use u_powerfit::pso::{ParticleSwarm, PsoConfig};
use u_powerfit::sa::{SaConfig, SimulatedAnnealing};
use u_powerfit::{Bounds, StrategyKind};

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_single_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_row");
    group.sample_size(10);

    for kind in StrategyKind::ALL {
        let config = OptimizerConfig::new(kind)
            .with_iteration_budget(200)
            .with_population_size(30)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(kind), &config, |b, c| {
            b.iter(|| {
                let result = BatchRunner::run(black_box(c), 1);
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_row_budget(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_budget");
    group.sample_size(10);

    let bounds = Bounds::default();
    for &budget in &[100usize, 500, 2000] {
        let sa = SimulatedAnnealing::new(bounds, SaConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("SA", budget), &budget, |b, &n| {
            b.iter(|| black_box(run_row(&sa, 0, n, 42, None)))
        });

        let ga = GeneticAlgorithm::new(bounds, GaConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("GA", budget), &budget, |b, &n| {
            b.iter(|| black_box(run_row(&ga, 0, n, 42, None)))
        });

        let pso = ParticleSwarm::new(bounds, PsoConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("PSO", budget), &budget, |b, &n| {
            b.iter(|| black_box(run_row(&pso, 0, n, 42, None)))
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);

    for &rows in &[10usize, 50] {
        let config = OptimizerConfig::new(StrategyKind::Pso)
            .with_iteration_budget(100)
            .with_seed(42)
            .with_parallel(true);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &n| {
            b.iter(|| black_box(BatchRunner::run(&config, n)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_row, bench_row_budget, bench_batch);
criterion_main!(benches);
