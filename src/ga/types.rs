//! GA state.

use crate::strategy::{Progress, Scored};

/// The current generation and run progress.
#[derive(Debug, Clone)]
pub struct GaState {
    /// Individuals of the current generation. Index 0 holds the elite
    /// after every step.
    pub population: Vec<Scored>,

    /// Offspring produced by blending, over the whole run.
    pub crossovers: usize,

    /// Genes resampled by mutation, over the whole run.
    pub mutated_genes: usize,

    pub progress: Progress,
}
