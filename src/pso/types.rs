//! Swarm state.

use crate::space::DIM;
use crate::strategy::{Progress, Scored};

/// One particle: where it is, how it moves, and the best it has seen.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Scored,
    pub velocity: [f64; DIM],
    pub personal_best: Scored,
}

/// The swarm plus stagnation bookkeeping.
///
/// The global best is `progress.best`.
#[derive(Debug, Clone)]
pub struct PsoState {
    pub particles: Vec<Particle>,

    /// Length of the current run of sub-threshold global-best improvements.
    pub stagnant_run: usize,

    /// First iteration at which `stagnant_run` reached the configured
    /// patience. Never overwritten once set.
    pub stagnation_iteration: Option<usize>,

    pub progress: Progress,
}
