//! The contract every optimizer implements.
//!
//! A [`Strategy`] is an immutable description of one algorithm (its
//! config, the bounds and the objective). All mutable data lives in its
//! [`Strategy::State`], which the driver creates fresh for every row and
//! drops afterwards, so rows never share anything but the read-only
//! strategy.
//!
//! ```text
//! initialize(rng) ─▶ state ─▶ step(state, rng) × budget ─▶ refine(state, rng, curve)
//!                               │
//!                               └─▶ best_of(state) recorded after every step
//! ```
//!
//! Randomness is always injected: strategies never touch a global
//! generator, so a seeded `R` reproduces a run bit for bit.

mod kind;
pub(crate) mod params;
mod population;

pub use kind::StrategyKind;
pub use params::StrategyParams;
pub use population::{
    best_index, improve, random_population, rank_descending, worst_index, Scored,
};

use crate::space::{Bounds, Candidate};
use rand::Rng;

/// Progress every state carries: the best-so-far, how many steps have run,
/// and how many coordinates projection had to clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub best: Scored,
    pub iteration: usize,
    pub clips: usize,
}

impl Progress {
    pub fn new(best: Scored) -> Self {
        Self {
            best,
            iteration: 0,
            clips: 0,
        }
    }

    /// Starts from the fittest member of a freshly sampled population.
    ///
    /// # Panics
    /// Panics if `members` is empty; every config rejects a zero size.
    pub fn from_population(members: &[Scored]) -> Self {
        let i = best_index(members).expect("population must not be empty");
        Self::new(members[i])
    }

    /// Folds `challenger` into the best-so-far. Returns `true` on improvement.
    pub fn observe(&mut self, challenger: &Scored) -> bool {
        improve(&mut self.best, challenger)
    }

    /// Folds the fittest of `members` into the best-so-far.
    pub fn observe_all(&mut self, members: &[Scored]) -> bool {
        match best_index(members) {
            Some(i) => self.observe(&members[i]),
            None => false,
        }
    }
}

/// One stochastic optimizer.
///
/// Maximizes the guarded objective inside [`Strategy::bounds`]. Every
/// candidate a state holds has been sampled from or projected into the
/// bounds.
pub trait Strategy: Send + Sync {
    /// Everything that changes between steps of one row's run.
    type State: Clone + Send;

    fn kind(&self) -> StrategyKind;

    fn bounds(&self) -> &Bounds;

    /// Builds a fresh state for one row.
    fn initialize<R: Rng>(&self, rng: &mut R) -> Self::State;

    /// Advances the state by one iteration.
    fn step<R: Rng>(&self, state: &mut Self::State, rng: &mut R);

    /// Read access to the state's progress counters.
    fn progress<'a>(&self, state: &'a Self::State) -> &'a Progress;

    /// Every candidate currently held by the state.
    fn members(&self, state: &Self::State) -> Vec<Candidate>;

    /// Post-loop phase. Strategies that keep searching after the iteration
    /// budget push one best-so-far value per extra iteration onto `curve`.
    fn refine<R: Rng>(&self, _state: &mut Self::State, _rng: &mut R, _curve: &mut Vec<f64>) {}

    /// Iteration at which the strategy's own stagnation test fired, if it
    /// has one.
    fn stagnation_iteration(&self, _state: &Self::State) -> Option<usize> {
        None
    }

    /// Best candidate and fitness seen so far.
    fn best_of(&self, state: &Self::State) -> Scored {
        self.progress(state).best
    }
}
