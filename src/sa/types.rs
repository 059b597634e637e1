//! SA state.

use crate::strategy::{Progress, Scored};

/// Everything one SA run mutates: the wandering current point, the
/// temperature, and move statistics.
///
/// The best-so-far lives in [`Progress`] and is tracked independently of
/// `current`, which may move downhill.
#[derive(Debug, Clone)]
pub struct SaState {
    /// The point the chain currently sits on.
    pub current: Scored,

    /// Current temperature.
    pub temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    pub progress: Progress,
}
