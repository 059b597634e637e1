//! Jaya state.

use crate::strategy::{Progress, Scored};

/// The population and its per-run statistics.
#[derive(Debug, Clone)]
pub struct JayaState {
    pub population: Vec<Scored>,

    /// Moves that replaced their individual, over the whole run.
    pub accepted_moves: usize,

    pub progress: Progress,
}
