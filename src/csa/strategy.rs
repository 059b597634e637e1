//! CSA generation step.

use super::config::CsaConfig;
use super::levy::LevyFlight;
use super::types::CsaState;
use crate::error::Result;
use crate::model::{Objective, PowerModel};
use crate::space::{Bounds, Candidate, DIM};
use crate::strategy::{random_population, Progress, Scored, Strategy, StrategyKind};
use rand::seq::index;
use rand::Rng;

/// Cuckoo Search over the design box.
#[derive(Debug, Clone)]
pub struct CuckooSearch<O = PowerModel> {
    config: CsaConfig,
    bounds: Bounds,
    objective: O,
    levy: LevyFlight,
    step: [f64; DIM],
}

impl CuckooSearch {
    pub fn new(bounds: Bounds, config: CsaConfig) -> Result<Self> {
        Self::with_objective(bounds, config, PowerModel)
    }
}

impl<O: Objective> CuckooSearch<O> {
    pub fn with_objective(bounds: Bounds, config: CsaConfig, objective: O) -> Result<Self> {
        bounds.validate()?;
        config.validate()?;
        let levy = LevyFlight::new(config.levy_exponent);
        let step = bounds.scaled_widths("step_scale", config.step_scale)?;
        Ok(Self {
            config,
            bounds,
            objective,
            levy,
            step,
        })
    }

    pub fn config(&self) -> &CsaConfig {
        &self.config
    }

    fn fly<R: Rng>(&self, nest: &Scored, clips: &mut usize, rng: &mut R) -> Scored {
        let from = nest.candidate;
        let raw = std::array::from_fn(|i| from[i] + self.step[i] * self.levy.sample(rng));
        Scored::evaluate(&self.objective, self.bounds.project_counting(raw, clips))
    }
}

impl<O: Objective> Strategy for CuckooSearch<O> {
    type State = CsaState;

    fn kind(&self) -> StrategyKind {
        StrategyKind::Csa
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn initialize<R: Rng>(&self, rng: &mut R) -> CsaState {
        let nests = random_population(&self.bounds, &self.objective, self.config.nest_count, rng);
        CsaState {
            progress: Progress::from_population(&nests),
            nests,
            successful_flights: 0,
            abandoned: 0,
        }
    }

    fn step<R: Rng>(&self, state: &mut CsaState, rng: &mut R) {
        // Each cuckoo competes only with the nest it flew from.
        for i in 0..state.nests.len() {
            let egg = self.fly(&state.nests[i], &mut state.progress.clips, rng);
            if egg.beats(&state.nests[i]) {
                state.nests[i] = egg;
                state.successful_flights += 1;
            }
        }
        state.progress.observe_all(&state.nests);

        // Discovered nests are rebuilt from scratch, whatever they held.
        let n = state.nests.len();
        for i in index::sample(rng, n, self.config.abandoned()).into_vec() {
            state.nests[i] = Scored::evaluate(&self.objective, self.bounds.sample(rng));
            state.progress.observe(&state.nests[i]);
        }
        state.abandoned += self.config.abandoned();

        state.progress.iteration += 1;
        log::trace!(
            "CSA iteration {}: best {:.3}",
            state.progress.iteration,
            state.progress.best.fitness
        );
    }

    fn progress<'a>(&self, state: &'a CsaState) -> &'a Progress {
        &state.progress
    }

    fn members(&self, state: &CsaState) -> Vec<Candidate> {
        state.nests.iter().map(|s| s.candidate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::testing;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn csa(config: CsaConfig) -> CuckooSearch {
        CuckooSearch::new(Bounds::default(), config).unwrap()
    }

    #[test]
    fn test_csa_well_behaved() {
        testing::assert_well_behaved(&csa(CsaConfig::default()), 42, 100);
    }

    #[test]
    fn test_csa_reproducible() {
        testing::assert_reproducible(&csa(CsaConfig::default()), 9, 60);
    }

    #[test]
    fn test_csa_flights_never_worsen_a_nest() {
        let strategy = csa(CsaConfig::default().with_discovery_rate(0.0));
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut state = strategy.initialize(&mut rng);
        for _ in 0..25 {
            let before: Vec<f64> = state.nests.iter().map(|s| s.fitness).collect();
            strategy.step(&mut state, &mut rng);
            for (old, new) in before.iter().zip(&state.nests) {
                assert!(new.fitness >= *old);
            }
        }
        assert_eq!(state.abandoned, 0);
        assert!(state.successful_flights > 0);
    }

    #[test]
    fn test_csa_abandons_fixed_fraction() {
        let strategy = csa(CsaConfig::default().with_nest_count(20).with_discovery_rate(0.5));
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut state = strategy.initialize(&mut rng);
        for _ in 0..4 {
            strategy.step(&mut state, &mut rng);
        }
        assert_eq!(state.abandoned, 40);
        assert_eq!(state.nests.len(), 20);
    }

    #[test]
    fn test_csa_improves_on_random_start() {
        let strategy = csa(CsaConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut state = strategy.initialize(&mut rng);
        let start = strategy.best_of(&state).fitness;
        for _ in 0..200 {
            strategy.step(&mut state, &mut rng);
        }
        assert!(strategy.best_of(&state).fitness > start);
    }

    #[test]
    fn test_csa_never_selects_non_finite() {
        let strategy =
            CuckooSearch::with_objective(Bounds::default(), CsaConfig::default(), testing::half_broken)
                .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut state = strategy.initialize(&mut rng);
        for _ in 0..40 {
            strategy.step(&mut state, &mut rng);
        }
        let best = strategy.best_of(&state);
        assert!(best.is_valid());
        assert!(best.candidate[crate::space::Dimension::WindSpeed] <= 14.0);
    }
}
