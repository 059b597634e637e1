//! Jaya update rule.

use super::config::JayaConfig;
use super::types::JayaState;
use crate::error::Result;
use crate::model::{Objective, PowerModel};
use crate::space::{Bounds, Candidate};
use crate::strategy::{
    best_index, random_population, worst_index, Progress, Scored, Strategy, StrategyKind,
};
use rand::Rng;

/// Jaya over the design box.
#[derive(Debug, Clone)]
pub struct Jaya<O = PowerModel> {
    config: JayaConfig,
    bounds: Bounds,
    objective: O,
}

impl Jaya {
    pub fn new(bounds: Bounds, config: JayaConfig) -> Result<Self> {
        Self::with_objective(bounds, config, PowerModel)
    }
}

impl<O: Objective> Jaya<O> {
    pub fn with_objective(bounds: Bounds, config: JayaConfig, objective: O) -> Result<Self> {
        bounds.validate()?;
        config.validate()?;
        Ok(Self {
            config,
            bounds,
            objective,
        })
    }

    pub fn config(&self) -> &JayaConfig {
        &self.config
    }
}

impl<O: Objective> Strategy for Jaya<O> {
    type State = JayaState;

    fn kind(&self) -> StrategyKind {
        StrategyKind::Jaya
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn initialize<R: Rng>(&self, rng: &mut R) -> JayaState {
        let population =
            random_population(&self.bounds, &self.objective, self.config.population_size, rng);
        JayaState {
            progress: Progress::from_population(&population),
            population,
            accepted_moves: 0,
        }
    }

    fn step<R: Rng>(&self, state: &mut JayaState, rng: &mut R) {
        let (Some(b), Some(w)) = (best_index(&state.population), worst_index(&state.population))
        else {
            return;
        };
        // Attractor and repeller are fixed for the whole generation.
        let best = state.population[b].candidate;
        let worst = state.population[w].candidate;

        for member in state.population.iter_mut() {
            let x = member.candidate;
            let raw = std::array::from_fn(|i| {
                let r1: f64 = rng.random_range(0.0..1.0);
                let r2: f64 = rng.random_range(0.0..1.0);
                x[i] + r1 * (best[i] - x[i].abs()) - r2 * (worst[i] - x[i].abs())
            });
            let moved = Scored::evaluate(
                &self.objective,
                self.bounds.project_counting(raw, &mut state.progress.clips),
            );
            if moved.beats(member) {
                *member = moved;
                state.accepted_moves += 1;
            }
        }

        state.progress.observe_all(&state.population);
        state.progress.iteration += 1;
    }

    fn progress<'a>(&self, state: &'a JayaState) -> &'a Progress {
        &state.progress
    }

    fn members(&self, state: &JayaState) -> Vec<Candidate> {
        state.population.iter().map(|s| s.candidate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::testing;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn jaya(size: usize) -> Jaya {
        Jaya::new(Bounds::default(), JayaConfig::default().with_population_size(size)).unwrap()
    }

    #[test]
    fn test_jaya_well_behaved() {
        testing::assert_well_behaved(&jaya(20), 42, 100);
    }

    #[test]
    fn test_jaya_reproducible() {
        testing::assert_reproducible(&jaya(20), 3, 60);
    }

    #[test]
    fn test_jaya_individuals_only_improve() {
        let strategy = jaya(15);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut state = strategy.initialize(&mut rng);
        for _ in 0..30 {
            let before: Vec<f64> = state.population.iter().map(|s| s.fitness).collect();
            strategy.step(&mut state, &mut rng);
            for (old, new) in before.iter().zip(&state.population) {
                assert!(new.fitness >= *old);
            }
        }
        assert!(state.accepted_moves > 0);
    }

    #[test]
    fn test_jaya_single_member_is_stationary() {
        // Best and worst coincide, so every move is x + (r1 - r2)(x - |x|) = x
        // for the non-negative default box.
        let strategy = jaya(1);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut state = strategy.initialize(&mut rng);
        let start = state.population[0];
        for _ in 0..10 {
            strategy.step(&mut state, &mut rng);
        }
        assert_eq!(state.population[0], start);
        assert_eq!(state.accepted_moves, 0);
    }

    #[test]
    fn test_jaya_never_selects_non_finite() {
        let strategy =
            Jaya::with_objective(Bounds::default(), JayaConfig::default(), testing::half_broken)
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
