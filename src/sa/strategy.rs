//! SA update rule.

use super::config::SaConfig;
use super::types::SaState;
use crate::error::Result;
use crate::model::{Objective, PowerModel};
use crate::space::{Bounds, Candidate, DIM};
use crate::strategy::{Progress, Scored, Strategy, StrategyKind};
use rand::Rng;

/// Simulated Annealing over the design box.
///
/// Each step perturbs the current point by uniform noise bounded by
/// `step_fraction` of each dimension's width, projects it, and applies the
/// Metropolis criterion. The temperature is cooled once per step.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing<O = PowerModel> {
    config: SaConfig,
    bounds: Bounds,
    objective: O,
    half_width: [f64; DIM],
}

impl SimulatedAnnealing {
    /// Builds SA on the fixed power model.
    pub fn new(bounds: Bounds, config: SaConfig) -> Result<Self> {
        Self::with_objective(bounds, config, PowerModel)
    }
}

impl<O: Objective> SimulatedAnnealing<O> {
    /// Builds SA on an arbitrary objective.
    pub fn with_objective(bounds: Bounds, config: SaConfig, objective: O) -> Result<Self> {
        bounds.validate()?;
        config.validate()?;
        let half_width = bounds.scaled_widths("step_fraction", config.step_fraction)?;
        Ok(Self {
            config,
            bounds,
            objective,
            half_width,
        })
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    fn neighbor<R: Rng>(&self, current: &Candidate, clips: &mut usize, rng: &mut R) -> Scored {
        let raw = std::array::from_fn(|i| {
            let half_width = self.half_width[i];
            current[i] + rng.random_range(-half_width..=half_width)
        });
        Scored::evaluate(&self.objective, self.bounds.project_counting(raw, clips))
    }
}

impl<O: Objective> Strategy for SimulatedAnnealing<O> {
    type State = SaState;

    fn kind(&self) -> StrategyKind {
        StrategyKind::Sa
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn initialize<R: Rng>(&self, rng: &mut R) -> SaState {
        let current = Scored::evaluate(&self.objective, self.bounds.sample(rng));
        SaState {
            current,
            temperature: self.config.initial_temperature,
            accepted_moves: 0,
            improving_moves: 0,
            progress: Progress::new(current),
        }
    }

    fn step<R: Rng>(&self, state: &mut SaState, rng: &mut R) {
        let neighbor = self.neighbor(&state.current.candidate, &mut state.progress.clips, rng);

        // Metropolis acceptance criterion, maximizing.
        let accept = if neighbor.beats(&state.current) {
            state.improving_moves += 1;
            true
        } else if neighbor.is_valid() {
            let delta = state.current.fitness - neighbor.fitness;
            let probability = (-delta / state.temperature).exp();
            rng.random_range(0.0..1.0) < probability
        } else {
            false
        };

        if accept {
            state.current = neighbor;
            state.accepted_moves += 1;
            state.progress.observe(&neighbor);
        }

        state.temperature = self
            .config
            .cooling
            .cool(state.temperature, self.config.min_temperature);
        state.progress.iteration += 1;
    }

    fn progress<'a>(&self, state: &'a SaState) -> &'a Progress {
        &state.progress
    }

    fn members(&self, state: &SaState) -> Vec<Candidate> {
        vec![state.current.candidate]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::CoolingSchedule;
    use crate::strategy::testing;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sa(config: SaConfig) -> SimulatedAnnealing {
        SimulatedAnnealing::new(Bounds::default(), config).unwrap()
    }

    #[test]
    fn test_sa_well_behaved() {
        testing::assert_well_behaved(&sa(SaConfig::default()), 42, 300);
    }

    #[test]
    fn test_sa_reproducible() {
        testing::assert_reproducible(&sa(SaConfig::default()), 7, 200);
    }

    #[test]
    fn test_sa_improves_on_start() {
        let strategy = sa(SaConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut state = strategy.initialize(&mut rng);
        let start = strategy.best_of(&state).fitness;
        for _ in 0..500 {
            strategy.step(&mut state, &mut rng);
        }
        assert!(strategy.best_of(&state).fitness > start);
        assert!(state.improving_moves > 0);
    }

    #[test]
    fn test_sa_cold_chain_rejects_worsening_moves() {
        let strategy = sa(SaConfig::default().with_min_temperature(1e-12));
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut base = strategy.initialize(&mut rng);
        base.temperature = 1e-9;

        let trials = 2000;
        let mut worsening_accepted = 0;
        for _ in 0..trials {
            let mut state = base.clone();
            strategy.step(&mut state, &mut rng);
            if state.current.fitness < base.current.fitness {
                worsening_accepted += 1;
            }
        }
        let rate = worsening_accepted as f64 / trials as f64;
        assert!(rate < 0.01, "cold chain accepted {rate} of worsening moves");
    }

    #[test]
    fn test_sa_hot_chain_accepts_most_moves() {
        let config = SaConfig::default()
            .with_initial_temperature(1e12)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.9999 });
        let strategy = sa(config);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut state = strategy.initialize(&mut rng);
        for _ in 0..1000 {
            strategy.step(&mut state, &mut rng);
        }
        let acceptance_ratio = state.accepted_moves as f64 / 1000.0;
        assert!(
            acceptance_ratio > 0.8,
            "expected high acceptance at high temp, got {acceptance_ratio}"
        );
    }

    #[test]
    fn test_sa_temperature_cools_each_step() {
        let strategy = sa(SaConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = strategy.initialize(&mut rng);
        strategy.step(&mut state, &mut rng);
        assert!((state.temperature - 950.0).abs() < 1e-9);
    }

    #[test]
    fn test_sa_never_selects_non_finite() {
        let strategy =
            SimulatedAnnealing::with_objective(Bounds::default(), SaConfig::default(), testing::half_broken)
                .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut state = strategy.initialize(&mut rng);
        for _ in 0..300 {
            strategy.step(&mut state, &mut rng);
        }
        let best = strategy.best_of(&state);
        if best.is_valid() {
            assert!(best.candidate[crate::space::Dimension::WindSpeed] <= 14.0);
        }
        assert!(!best.fitness.is_nan());
    }

    #[test]
    fn test_sa_rejects_invalid_config() {
        let bad = SaConfig::default().with_step_fraction(0.0);
        assert!(SimulatedAnnealing::new(Bounds::default(), bad).is_err());
    }
}
