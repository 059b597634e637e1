//! CRO generation step.
//!
//! spawning → budding → settling → depredation

use super::config::CroConfig;
use super::types::CroState;
use crate::error::Result;
use crate::model::{Objective, PowerModel};
use crate::space::{Bounds, Candidate, DIM};
use crate::strategy::{random_population, rank_descending, Progress, Scored, Strategy, StrategyKind};
use rand::Rng;
use rand_distr::StandardNormal;

/// Coral-reef optimization over the design box.
#[derive(Debug, Clone)]
pub struct CoralReef<O = PowerModel> {
    config: CroConfig,
    bounds: Bounds,
    objective: O,
    sigma: [f64; DIM],
}

impl CoralReef {
    pub fn new(bounds: Bounds, config: CroConfig) -> Result<Self> {
        Self::with_objective(bounds, config, PowerModel)
    }
}

impl<O: Objective> CoralReef<O> {
    pub fn with_objective(bounds: Bounds, config: CroConfig, objective: O) -> Result<Self> {
        bounds.validate()?;
        config.validate()?;
        let sigma = bounds.scaled_widths("noise_fraction", config.noise_fraction)?;
        Ok(Self {
            config,
            bounds,
            objective,
            sigma,
        })
    }

    pub fn config(&self) -> &CroConfig {
        &self.config
    }

    fn larva<R: Rng>(&self, centre: [f64; DIM], clips: &mut usize, rng: &mut R) -> Scored {
        let raw = std::array::from_fn(|i| {
            let z: f64 = rng.sample(StandardNormal);
            centre[i] + z * self.sigma[i]
        });
        Scored::evaluate(&self.objective, self.bounds.project_counting(raw, clips))
    }

    fn spawn<R: Rng>(&self, reef: &[Scored], clips: &mut usize, rng: &mut R) -> Vec<Scored> {
        let n = reef.len();
        let broadcast = self.config.count(self.config.broadcast_fraction);
        let budding = self.config.count(self.config.budding_fraction);
        let mut larvae = Vec::with_capacity(broadcast + budding);

        // Broadcast spawning: midpoint of two random corals plus noise.
        for _ in 0..broadcast {
            let a = &reef[rng.random_range(0..n)].candidate;
            let b = &reef[rng.random_range(0..n)].candidate;
            larvae.push(self.larva(a.midpoint(b), clips, rng));
        }

        // Asexual budding: one coral plus noise.
        for _ in 0..budding {
            let parent = reef[rng.random_range(0..n)].candidate;
            larvae.push(self.larva(parent.into_values(), clips, rng));
        }

        larvae
    }
}

impl<O: Objective> Strategy for CoralReef<O> {
    type State = CroState;

    fn kind(&self) -> StrategyKind {
        StrategyKind::Cro
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn initialize<R: Rng>(&self, rng: &mut R) -> CroState {
        let mut reef = random_population(&self.bounds, &self.objective, self.config.reef_size, rng);
        rank_descending(&mut reef);
        CroState {
            progress: Progress::from_population(&reef),
            reef,
            settled_larvae: 0,
            depredated: 0,
        }
    }

    fn step<R: Rng>(&self, state: &mut CroState, rng: &mut R) {
        let capacity = self.config.reef_size;
        let larvae = self.spawn(&state.reef, &mut state.progress.clips, rng);

        // Settling: parents first so they win ties, then keep the top corals.
        let mut merged: Vec<(bool, Scored)> = state
            .reef
            .drain(..)
            .map(|s| (false, s))
            .chain(larvae.into_iter().map(|s| (true, s)))
            .collect();
        merged.sort_by(|a, b| {
            b.1.fitness
                .partial_cmp(&a.1.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        merged.truncate(capacity);
        state.settled_larvae += merged.iter().filter(|(larva, _)| *larva).count();
        state.reef = merged.into_iter().map(|(_, s)| s).collect();
        state.progress.observe_all(&state.reef);

        // Depredation: the worst survivors make room for fresh corals.
        let victims = self.config.count(self.config.depredation_fraction).min(state.reef.len());
        let start = state.reef.len() - victims;
        for slot in &mut state.reef[start..] {
            *slot = Scored::evaluate(&self.objective, self.bounds.sample(rng));
        }
        state.depredated += victims;
        state.progress.observe_all(&state.reef[start..]);
        rank_descending(&mut state.reef);

        state.progress.iteration += 1;
    }

    fn progress<'a>(&self, state: &'a CroState) -> &'a Progress {
        &state.progress
    }

    fn members(&self, state: &CroState) -> Vec<Candidate> {
        state.reef.iter().map(|s| s.candidate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::testing;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn cro(config: CroConfig) -> CoralReef {
        CoralReef::new(Bounds::default(), config).unwrap()
    }

    #[test]
    fn test_cro_well_behaved() {
        testing::assert_well_behaved(&cro(CroConfig::default()), 42, 100);
    }

    #[test]
    fn test_cro_reproducible() {
        testing::assert_reproducible(&cro(CroConfig::default()), 5, 60);
    }

    #[test]
    fn test_cro_reef_keeps_capacity() {
        let strategy = cro(CroConfig::default().with_reef_size(12));
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = strategy.initialize(&mut rng);
        for _ in 0..20 {
            strategy.step(&mut state, &mut rng);
            assert_eq!(state.reef.len(), 12);
        }
        assert_eq!(state.depredated, 20 * strategy.config().count(0.1));
    }

    #[test]
    fn test_cro_depredation_replaces_even_good_reefs() {
        // Depredating the whole reef still keeps the best-so-far.
        let strategy = cro(CroConfig::default().with_depredation_fraction(1.0));
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut state = strategy.initialize(&mut rng);
        let mut previous = strategy.best_of(&state).fitness;
        for _ in 0..30 {
            strategy.step(&mut state, &mut rng);
            let best = strategy.best_of(&state).fitness;
            assert!(best >= previous);
            previous = best;
        }
        assert!(state.settled_larvae > 0);
    }

    #[test]
    fn test_cro_without_spawning_only_depredates() {
        let strategy = cro(CroConfig::default().with_spawning(0.0, 0.0));
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut state = strategy.initialize(&mut rng);
        strategy.step(&mut state, &mut rng);
        assert_eq!(state.settled_larvae, 0);
        assert_eq!(state.progress.clips, 0);
    }

    #[test]
    fn test_cro_never_selects_non_finite() {
        let strategy =
            CoralReef::with_objective(Bounds::default(), CroConfig::default(), testing::half_broken)
                .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut state = strategy.initialize(&mut rng);
        for _ in 0..30 {
            strategy.step(&mut state, &mut rng);
        }
        let best = strategy.best_of(&state);
        assert!(best.is_valid());
        assert!(best.candidate[crate::space::Dimension::WindSpeed] <= 14.0);
    }
}
