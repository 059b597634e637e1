//! CRO state.

use crate::strategy::{Progress, Scored};

/// The reef and its per-run statistics.
#[derive(Debug, Clone)]
pub struct CroState {
    /// Corals, fittest first after every step.
    pub reef: Vec<Scored>,

    /// Larvae that survived settlement, over the whole run.
    pub settled_larvae: usize,

    /// Corals removed by depredation, over the whole run.
    pub depredated: usize,

    pub progress: Progress,
}
