//! FTMA generational and local phases.

use super::config::FtmaConfig;
use super::types::FtmaState;
use crate::error::Result;
use crate::model::{Objective, PowerModel};
use crate::space::{Bounds, Candidate, DIM};
use crate::strategy::{best_index, random_population, Progress, Scored, Strategy, StrategyKind};
use rand::Rng;
use rand_distr::StandardNormal;

/// Fine-tuning metaheuristic over the design box.
#[derive(Debug, Clone)]
pub struct FineTuning<O = PowerModel> {
    config: FtmaConfig,
    bounds: Bounds,
    objective: O,
    sigma: [f64; DIM],
    radius: [f64; DIM],
}

impl FineTuning {
    pub fn new(bounds: Bounds, config: FtmaConfig) -> Result<Self> {
        Self::with_objective(bounds, config, PowerModel)
    }
}

impl<O: Objective> FineTuning<O> {
    pub fn with_objective(bounds: Bounds, config: FtmaConfig, objective: O) -> Result<Self> {
        bounds.validate()?;
        config.validate()?;
        let sigma = bounds.scaled_widths("mutation_fraction", config.mutation_fraction)?;
        let radius = bounds.scaled_widths("local_radius", config.local_radius)?;
        Ok(Self {
            sigma,
            radius,
            config,
            bounds,
            objective,
        })
    }

    pub fn config(&self) -> &FtmaConfig {
        &self.config
    }
}

impl<O: Objective> Strategy for FineTuning<O> {
    type State = FtmaState;

    fn kind(&self) -> StrategyKind {
        StrategyKind::Ftma
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn initialize<R: Rng>(&self, rng: &mut R) -> FtmaState {
        let population =
            random_population(&self.bounds, &self.objective, self.config.population_size, rng);
        FtmaState {
            progress: Progress::from_population(&population),
            population,
            accepted_moves: 0,
            local_improvements: 0,
        }
    }

    /// Mutate, then average with the generation's best.
    fn step<R: Rng>(&self, state: &mut FtmaState, rng: &mut R) {
        let Some(b) = best_index(&state.population) else {
            return;
        };
        let best = state.population[b].candidate;

        for member in state.population.iter_mut() {
            let x = member.candidate;
            let raw = std::array::from_fn(|i| {
                let z: f64 = rng.sample(StandardNormal);
                let mutated = x[i] + z * self.sigma[i];
                0.5 * (mutated + best[i])
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

    /// Greedy small-radius search around the best, one curve entry per try.
    fn refine<R: Rng>(&self, state: &mut FtmaState, rng: &mut R, curve: &mut Vec<f64>) {
        curve.reserve(self.config.local_iterations);
        for _ in 0..self.config.local_iterations {
            let centre = state.progress.best.candidate;
            let raw = std::array::from_fn(|i| {
                let u: f64 = rng.random_range(-1.0..=1.0);
                centre[i] + u * self.radius[i]
            });
            let trial = Scored::evaluate(
                &self.objective,
                self.bounds.project_counting(raw, &mut state.progress.clips),
            );
            if state.progress.observe(&trial) {
                state.local_improvements += 1;
            }
            curve.push(state.progress.best.fitness);
        }
        log::trace!(
            "FTMA local phase: {} of {} tries improved",
            state.local_improvements,
            self.config.local_iterations
        );
    }

    fn progress<'a>(&self, state: &'a FtmaState) -> &'a Progress {
        &state.progress
    }

    fn members(&self, state: &FtmaState) -> Vec<Candidate> {
        state.population.iter().map(|s| s.candidate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::testing;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ftma(config: FtmaConfig) -> FineTuning {
        FineTuning::new(Bounds::default(), config).unwrap()
    }

    #[test]
    fn test_ftma_well_behaved() {
        testing::assert_well_behaved(&ftma(FtmaConfig::default()), 42, 100);
    }

    #[test]
    fn test_ftma_reproducible() {
        testing::assert_reproducible(&ftma(FtmaConfig::default()), 17, 60);
    }

    #[test]
    fn test_ftma_refine_extends_curve() {
        let strategy = ftma(FtmaConfig::default().with_local_phase(40, 0.01));
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut state = strategy.initialize(&mut rng);
        for _ in 0..10 {
            strategy.step(&mut state, &mut rng);
        }
        let before = strategy.best_of(&state).fitness;

        let mut curve = vec![before];
        strategy.refine(&mut state, &mut rng, &mut curve);
        assert_eq!(curve.len(), 41);
        assert!(curve.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(*curve.last().unwrap(), strategy.best_of(&state).fitness);
        assert!(strategy.bounds().contains(&strategy.best_of(&state).candidate));
        // Iteration count covers the generational loop only.
        assert_eq!(state.progress.iteration, 10);
    }

    #[test]
    fn test_ftma_refine_disabled() {
        let strategy = ftma(FtmaConfig::default().with_local_phase(0, 0.01));
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let mut state = strategy.initialize(&mut rng);
        let mut curve = Vec::new();
        strategy.refine(&mut state, &mut rng, &mut curve);
        assert!(curve.is_empty());
        assert_eq!(state.local_improvements, 0);
    }

    #[test]
    fn test_ftma_population_pulled_toward_best() {
        let strategy = ftma(FtmaConfig::default().with_population_size(20));
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let mut state = strategy.initialize(&mut rng);
        let start = strategy.best_of(&state).fitness;
        for _ in 0..50 {
            strategy.step(&mut state, &mut rng);
        }
        assert!(state.accepted_moves > 0);
        assert!(strategy.best_of(&state).fitness > start);
    }

    #[test]
    fn test_ftma_generational_moves_never_worsen_an_individual() {
        let strategy = ftma(FtmaConfig::default().with_population_size(15));
        let mut rng = ChaCha8Rng::seed_from_u64(25);
        let mut state = strategy.initialize(&mut rng);
        for _ in 0..20 {
            let before: Vec<f64> = state.population.iter().map(|s| s.fitness).collect();
            let accepted = state.accepted_moves;
            strategy.step(&mut state, &mut rng);
            let replaced = before
                .iter()
                .zip(&state.population)
                .filter(|(old, new)| new.fitness != **old)
                .count();
            for (old, new) in before.iter().zip(&state.population) {
                assert!(new.fitness >= *old);
            }
            assert_eq!(state.accepted_moves - accepted, replaced);
        }
    }

    #[test]
    fn test_ftma_rejects_overflowing_radius() {
        let mut pairs = [(0.0, 1.0); DIM];
        pairs[5] = (-8e307, 8e307);
        let wide = Bounds::new(pairs).unwrap();
        assert!(matches!(
            FineTuning::new(wide, FtmaConfig::default().with_local_phase(10, 1.0)),
            Err(crate::error::PowerfitError::InvalidConfig(_))
        ));

        let strategy = FineTuning::new(wide, FtmaConfig::default().with_population_size(6)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(24);
        let mut state = strategy.initialize(&mut rng);
        strategy.step(&mut state, &mut rng);
        let mut curve = Vec::new();
        strategy.refine(&mut state, &mut rng, &mut curve);
        assert!(wide.contains(&strategy.best_of(&state).candidate));
    }

    #[test]
    fn test_ftma_never_selects_non_finite() {
        let strategy =
            FineTuning::with_objective(Bounds::default(), FtmaConfig::default(), testing::half_broken)
                .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut state = strategy.initialize(&mut rng);
        for _ in 0..30 {
            strategy.step(&mut state, &mut rng);
        }
        let mut curve = Vec::new();
        strategy.refine(&mut state, &mut rng, &mut curve);
        let best = strategy.best_of(&state);
        assert!(best.is_valid());
        assert!(best.candidate[crate::space::Dimension::WindSpeed] <= 14.0);
    }
}
