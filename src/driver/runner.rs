//! Batch execution.
//!
//! [`BatchRunner`] runs one fresh strategy state per row:
//! initialize → step × budget → refine → collect, then averages the curves
//! and detects convergence once on the average.

use super::config::OptimizerConfig;
use super::types::{BatchResult, RunResult};
use crate::convergence::{average_curves, detect};
use crate::cro::CoralReef;
use crate::csa::CuckooSearch;
use crate::error::Result;
use crate::ftma::FineTuning;
use crate::ga::GeneticAlgorithm;
use crate::jaya::Jaya;
use crate::pso::ParticleSwarm;
use crate::sa::SimulatedAnnealing;
use crate::strategy::{Strategy, StrategyKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Executes batches of independent per-row runs.
///
/// # Usage
///
/// ```
/// use u_powerfit::driver::{BatchRunner, OptimizerConfig};
/// use u_powerfit::strategy::StrategyKind;
///
/// let config = OptimizerConfig::new(StrategyKind::Jaya)
///     .with_iteration_budget(20)
///     .with_population_size(10)
///     .with_seed(42);
/// let result = BatchRunner::run(&config, 3).unwrap();
/// assert_eq!(result.runs.len(), 3);
/// assert_eq!(result.average_curve.len(), 20);
/// ```
pub struct BatchRunner;

impl BatchRunner {
    /// Runs `rows` independent optimizations with the configured algorithm.
    ///
    /// Fails before any row runs if the configuration is invalid.
    pub fn run(config: &OptimizerConfig, rows: usize) -> Result<BatchResult> {
        Self::run_with_cancel(config, rows, None)
    }

    /// Runs the batch with an optional cancellation token.
    ///
    /// Once the flag is set, the row in progress stops after its current
    /// iteration and is discarded, and no further rows start. Completed rows
    /// are kept and [`BatchResult::cancelled`] is set.
    pub fn run_with_cancel(
        config: &OptimizerConfig,
        rows: usize,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BatchResult> {
        config.validate()?;
        let bounds = config.bounds;
        let cancel = cancel.as_deref();

        match config.kind {
            StrategyKind::Sa => {
                let strategy = SimulatedAnnealing::new(bounds, config.sa_config()?)?;
                Self::run_strategy(&strategy, config, rows, cancel)
            }
            StrategyKind::Ga => {
                let strategy = GeneticAlgorithm::new(bounds, config.ga_config()?)?;
                Self::run_strategy(&strategy, config, rows, cancel)
            }
            StrategyKind::Pso => {
                let strategy = ParticleSwarm::new(bounds, config.pso_config()?)?;
                Self::run_strategy(&strategy, config, rows, cancel)
            }
            StrategyKind::Cro => {
                let strategy = CoralReef::new(bounds, config.cro_config()?)?;
                Self::run_strategy(&strategy, config, rows, cancel)
            }
            StrategyKind::Csa => {
                let strategy = CuckooSearch::new(bounds, config.csa_config()?)?;
                Self::run_strategy(&strategy, config, rows, cancel)
            }
            StrategyKind::Jaya => {
                let strategy = Jaya::new(bounds, config.jaya_config()?)?;
                Self::run_strategy(&strategy, config, rows, cancel)
            }
            StrategyKind::Ftma => {
                let strategy = FineTuning::new(bounds, config.ftma_config()?)?;
                Self::run_strategy(&strategy, config, rows, cancel)
            }
        }
    }

    /// Runs a batch with an already-built strategy.
    ///
    /// `config.kind`, `population_size` and `params` are not consulted; the
    /// strategy carries its own settings.
    pub fn run_strategy<S: Strategy>(
        strategy: &S,
        config: &OptimizerConfig,
        rows: usize,
        cancel: Option<&AtomicBool>,
    ) -> Result<BatchResult> {
        config.validate()?;
        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random();
                log::info!("{}: no seed configured, using {seed}", strategy.kind());
                seed
            }
        };

        let outcomes = execute_rows(
            strategy,
            rows,
            config.iteration_budget,
            seed,
            config.parallel,
            cancel,
        );
        let cancelled = outcomes.iter().any(Option::is_none);
        let runs: Vec<RunResult> = outcomes.into_iter().flatten().collect();

        for run in runs.iter().filter(|r| r.failed) {
            log::warn!(
                "{}: row {} produced no finite power output",
                strategy.kind(),
                run.row_index
            );
        }
        if cancelled {
            log::warn!(
                "{}: batch cancelled after {} of {rows} rows",
                strategy.kind(),
                runs.len()
            );
        }

        let average_curve =
            average_curves(runs.iter().filter(|r| !r.failed).map(|r| r.curve.as_slice()));
        let convergence_iteration = detect(&average_curve, config.convergence_epsilon);

        let result = BatchResult {
            kind: strategy.kind(),
            seed,
            runs,
            average_curve,
            convergence_iteration,
            cancelled,
        };
        log::info!(
            "{}: {} rows, mean best fitness {:?}, converged at iteration {}",
            result.kind,
            result.runs.len(),
            result.mean_best_fitness(),
            result.convergence_iteration
        );
        Ok(result)
    }
}

/// Runs a single row: fresh state, `iteration_budget` steps, then the
/// strategy's post-loop phase.
///
/// The row's generator is ChaCha8 seeded with `seed` on stream `row_index`,
/// so the outcome depends only on `(strategy, seed, row_index)` and not on
/// which other rows run or in what order. Returns `None` if `cancel` was
/// raised before the row finished.
pub fn run_row<S: Strategy>(
    strategy: &S,
    row_index: usize,
    iteration_budget: usize,
    seed: u64,
    cancel: Option<&AtomicBool>,
) -> Option<RunResult> {
    let is_cancelled = || cancel.is_some_and(|flag| flag.load(Ordering::Relaxed));

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(row_index as u64);

    let mut state = strategy.initialize(&mut rng);
    let mut curve = Vec::with_capacity(iteration_budget);
    for _ in 0..iteration_budget {
        if is_cancelled() {
            return None;
        }
        strategy.step(&mut state, &mut rng);
        curve.push(strategy.best_of(&state).fitness);
    }
    if is_cancelled() {
        return None;
    }
    strategy.refine(&mut state, &mut rng, &mut curve);

    let best = strategy.best_of(&state);
    let failed = !best.is_valid();
    log::debug!(
        "{} row {row_index}: best fitness {} after {} iterations",
        strategy.kind(),
        best.fitness,
        curve.len()
    );

    Some(RunResult {
        row_index,
        best: best.candidate,
        best_fitness: best.fitness,
        curve,
        failed,
        clip_events: strategy.progress(&state).clips,
        stagnation_iteration: strategy.stagnation_iteration(&state),
    })
}

fn run_rows_sequential<S: Strategy>(
    strategy: &S,
    rows: usize,
    iteration_budget: usize,
    seed: u64,
    cancel: Option<&AtomicBool>,
) -> Vec<Option<RunResult>> {
    (0..rows)
        .map(|row| run_row(strategy, row, iteration_budget, seed, cancel))
        .collect()
}

#[cfg(feature = "parallel")]
fn execute_rows<S: Strategy>(
    strategy: &S,
    rows: usize,
    iteration_budget: usize,
    seed: u64,
    parallel: bool,
    cancel: Option<&AtomicBool>,
) -> Vec<Option<RunResult>> {
    use rayon::prelude::*;

    if parallel {
        (0..rows)
            .into_par_iter()
            .map(|row| run_row(strategy, row, iteration_budget, seed, cancel))
            .collect()
    } else {
        run_rows_sequential(strategy, rows, iteration_budget, seed, cancel)
    }
}

#[cfg(not(feature = "parallel"))]
fn execute_rows<S: Strategy>(
    strategy: &S,
    rows: usize,
    iteration_budget: usize,
    seed: u64,
    parallel: bool,
    cancel: Option<&AtomicBool>,
) -> Vec<Option<RunResult>> {
    if parallel {
        log::debug!("built without the `parallel` feature; running rows sequentially");
    }
    run_rows_sequential(strategy, rows, iteration_budget, seed, cancel)
}
