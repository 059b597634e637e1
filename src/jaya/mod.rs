//! Jaya.
//!
//! A parameter-free population method: every individual moves toward the
//! generation's best and away from its worst,
//!
//! ```text
//! x' = x + r1·(best − |x|) − r2·(worst − |x|),    r1, r2 ~ U[0, 1) per gene
//! ```
//!
//! and keeps the move only if it is fitter than where it started.
//!
//! # References
//!
//! - Rao (2016), "Jaya: A simple and new optimization algorithm for solving
//!   constrained and unconstrained optimization problems"

mod config;
mod strategy;
mod types;

pub use config::JayaConfig;
pub use strategy::Jaya;
pub use types::JayaState;
