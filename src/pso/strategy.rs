//! PSO velocity and position update.

use super::config::PsoConfig;
use super::types::{Particle, PsoState};
use crate::error::Result;
use crate::model::{Objective, PowerModel};
use crate::space::{Bounds, Candidate, DIM};
use crate::strategy::{improve, random_population, Progress, Scored, Strategy, StrategyKind};
use rand::Rng;

/// Global-best particle swarm over the design box.
#[derive(Debug, Clone)]
pub struct ParticleSwarm<O = PowerModel> {
    config: PsoConfig,
    bounds: Bounds,
    objective: O,
    max_velocity: [f64; DIM],
}

impl ParticleSwarm {
    pub fn new(bounds: Bounds, config: PsoConfig) -> Result<Self> {
        Self::with_objective(bounds, config, PowerModel)
    }
}

impl<O: Objective> ParticleSwarm<O> {
    pub fn with_objective(bounds: Bounds, config: PsoConfig, objective: O) -> Result<Self> {
        bounds.validate()?;
        config.validate()?;
        let max_velocity = bounds.scaled_widths("velocity_fraction", config.velocity_fraction)?;
        Ok(Self {
            config,
            bounds,
            objective,
            max_velocity,
        })
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }

    fn fly<R: Rng>(&self, particle: &mut Particle, global: &Candidate, clips: &mut usize, rng: &mut R) {
        let x = particle.position.candidate;
        let pbest = particle.personal_best.candidate;
        let mut raw = [0.0; DIM];
        for i in 0..DIM {
            let r1: f64 = rng.random_range(0.0..1.0);
            let r2: f64 = rng.random_range(0.0..1.0);
            let v = self.config.inertia * particle.velocity[i]
                + self.config.cognitive * r1 * (pbest[i] - x[i])
                + self.config.social * r2 * (global[i] - x[i]);
            let limit = self.max_velocity[i];
            particle.velocity[i] = v.clamp(-limit, limit);
            raw[i] = x[i] + particle.velocity[i];
        }
        particle.position = Scored::evaluate(&self.objective, self.bounds.project_counting(raw, clips));
        improve(&mut particle.personal_best, &particle.position);
    }

    fn track_stagnation(&self, state: &mut PsoState, previous_best: f64) {
        let gain = state.progress.best.fitness - previous_best;
        if gain >= self.config.stagnation_threshold {
            state.stagnant_run = 0;
            return;
        }
        state.stagnant_run += 1;
        if state.stagnation_iteration.is_none()
            && state.stagnant_run >= self.config.stagnation_patience
        {
            state.stagnation_iteration = Some(state.progress.iteration);
            log::trace!("PSO stagnated at iteration {}", state.progress.iteration);
        }
    }
}

impl<O: Objective> Strategy for ParticleSwarm<O> {
    type State = PsoState;

    fn kind(&self) -> StrategyKind {
        StrategyKind::Pso
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn initialize<R: Rng>(&self, rng: &mut R) -> PsoState {
        let positions = random_population(&self.bounds, &self.objective, self.config.swarm_size, rng);
        let progress = Progress::from_population(&positions);
        let particles = positions
            .into_iter()
            .map(|position| Particle {
                position,
                velocity: std::array::from_fn(|i| {
                    let limit = self.max_velocity[i];
                    rng.random_range(-limit..=limit)
                }),
                personal_best: position,
            })
            .collect();
        PsoState {
            particles,
            stagnant_run: 0,
            stagnation_iteration: None,
            progress,
        }
    }

    fn step<R: Rng>(&self, state: &mut PsoState, rng: &mut R) {
        let global = state.progress.best.candidate;
        let previous_best = state.progress.best.fitness;

        for particle in state.particles.iter_mut() {
            self.fly(particle, &global, &mut state.progress.clips, rng);
        }
        for particle in &state.particles {
            state.progress.observe(&particle.personal_best);
        }

        state.progress.iteration += 1;
        self.track_stagnation(state, previous_best);
    }

    fn progress<'a>(&self, state: &'a PsoState) -> &'a Progress {
        &state.progress
    }

    fn members(&self, state: &PsoState) -> Vec<Candidate> {
        state
            .particles
            .iter()
            .flat_map(|p| [p.position.candidate, p.personal_best.candidate])
            .collect()
    }

    fn stagnation_iteration(&self, state: &PsoState) -> Option<usize> {
        state.stagnation_iteration
    }
}
