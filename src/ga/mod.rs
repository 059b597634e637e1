//! Genetic Algorithm (GA).
//!
//! A real-coded GA on the 8-dimensional design box. Each generation keeps
//! the single fittest individual and refills the rest of the population
//! from tournament-selected parents:
//!
//! - **Crossover**: per-gene convex blend of the two parents, applied with
//!   `crossover_rate`; otherwise both parents pass through unchanged.
//! - **Mutation**: each gene independently resampled within its bound with
//!   `mutation_rate`.
//! - **Projection**: offspring are clipped into the box before evaluation.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Eshelman & Schaffer (1993), "Real-Coded Genetic Algorithms and
//!   Interval-Schemata"

mod config;
mod selection;
mod strategy;
mod types;

pub use config::GaConfig;
pub use selection::Selection;
pub use strategy::GeneticAlgorithm;
pub use types::GaState;
