//! Coral-Reef Optimization (CRO).
//!
//! The reef is a fixed-capacity list of candidate designs. Each generation:
//!
//! 1. **Broadcast spawning**: larvae at the midpoint of two random corals,
//!    plus Gaussian noise.
//! 2. **Budding**: larvae at a single coral, plus Gaussian noise.
//! 3. **Settling**: reef and larvae are merged; the fittest `reef_size`
//!    survive.
//! 4. **Depredation**: a fixed fraction of the worst survivors is replaced
//!    by fresh random corals, whatever their fitness.
//!
//! # References
//!
//! - Salcedo-Sanz et al. (2014), "The Coral Reefs Optimization Algorithm:
//!   A Novel Metaheuristic for Efficiently Solving Optimization Problems"

mod config;
mod strategy;
mod types;

pub use config::CroConfig;
pub use strategy::CoralReef;
pub use types::CroState;
