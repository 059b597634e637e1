//! Per-row stochastic design search for hybrid solar/wind power output.
//!
//! Searches an 8-dimensional box of design parameters (panel voltage and
//! current, irradiance, temperature, wind speed, tower height, rotor
//! diameter, blade offset) for the point that maximizes a closed-form
//! power model. Seven interchangeable optimizers share one contract:
//!
//! - **Simulated Annealing (SA)**: single trajectory with Metropolis
//!   acceptance and geometric or Lundy–Mees cooling.
//! - **Genetic Algorithm (GA)**: elitism, tournament/roulette/rank
//!   selection, blended crossover and per-gene resampling.
//! - **Particle Swarm (PSO)**: inertia-weighted swarm with a velocity limit
//!   and its own stagnation detector.
//! - **Coral-Reef Optimization (CRO)**: broadcast spawning, budding,
//!   settling and depredation on a fixed-capacity reef.
//! - **Cuckoo Search (CSA)**: Lévy flights with nest abandonment.
//! - **Jaya**: parameter-free pull toward the best and away from the worst.
//! - **Fine-Tuning Metaheuristic (FTMA)**: mutate-and-average generations
//!   followed by a greedy local phase.
//!
//! # Architecture
//!
//! [`space`] and [`model`] define the box and the objective. Each algorithm
//! module provides a config and a [`strategy::Strategy`] implementation.
//! [`driver`] runs one fresh state per row with a per-row ChaCha stream and
//! aggregates the curves; [`convergence`] finds where the averaged curve
//! settles.
//!
//! ```
//! use u_powerfit::driver::{BatchRunner, OptimizerConfig};
//! use u_powerfit::strategy::StrategyKind;
//!
//! let config = OptimizerConfig::new(StrategyKind::Ga)
//!     .with_iteration_budget(25)
//!     .with_population_size(16)
//!     .with_seed(1);
//! let batch = BatchRunner::run(&config, 4)?;
//! assert_eq!(batch.runs.len(), 4);
//! assert!(batch.mean_best_fitness().is_some());
//! # Ok::<(), u_powerfit::PowerfitError>(())
//! ```

pub mod convergence;
pub mod cro;
pub mod csa;
pub mod driver;
pub mod error;
pub mod ftma;
pub mod ga;
pub mod jaya;
pub mod model;
pub mod pso;
pub mod sa;
pub mod space;
pub mod strategy;

pub use error::{PowerfitError, Result};
pub use model::{Objective, PowerModel, WORST_FITNESS};
pub use space::{Bound, Bounds, Candidate, Dimension};
pub use strategy::{Strategy, StrategyKind, StrategyParams};
