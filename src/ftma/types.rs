//! FTMA state.

use crate::strategy::{Progress, Scored};

/// The population and its per-run statistics.
#[derive(Debug, Clone)]
pub struct FtmaState {
    pub population: Vec<Scored>,

    /// Generational moves that replaced their individual.
    pub accepted_moves: usize,

    /// Local-phase perturbations that improved the best.
    pub local_improvements: usize,

    pub progress: Progress,
}
