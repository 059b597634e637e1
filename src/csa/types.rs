//! CSA state.

use crate::strategy::{Progress, Scored};

/// The nests and their per-run statistics.
#[derive(Debug, Clone)]
pub struct CsaState {
    pub nests: Vec<Scored>,

    /// Flights that replaced their nest, over the whole run.
    pub successful_flights: usize,

    /// Nests abandoned and rebuilt, over the whole run.
    pub abandoned: usize,

    pub progress: Progress,
}
