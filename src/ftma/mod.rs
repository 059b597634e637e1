//! Fine-Tuning Metaheuristic (FTMA).
//!
//! A hybrid of a population method and a local search. The generational
//! phase replaces crossover with forced exploitation: each individual is
//! mutated with Gaussian noise and then averaged with the current best,
//!
//! ```text
//! x' = project( (x + σ ⊙ z  +  best) / 2 ),    z ~ N(0, I)
//! ```
//!
//! keeping the move only if it improves that individual. Once the iteration
//! budget is spent, [`refine`](crate::strategy::Strategy::refine) runs a
//! fixed number of small uniform perturbations of the best, accepted
//! greedily, each adding one entry to the convergence curve.

mod config;
mod strategy;
mod types;

pub use config::FtmaConfig;
pub use strategy::FineTuning;
pub use types::FtmaState;
