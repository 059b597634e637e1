//! GA generation step.
//!
//! elitism → selection → blended crossover → per-gene mutation → projection

use super::config::GaConfig;
use super::types::GaState;
use crate::error::Result;
use crate::model::{Objective, PowerModel};
use crate::space::{Bounds, Candidate, DIM};
use crate::strategy::{best_index, random_population, Progress, Scored, Strategy, StrategyKind};
use rand::Rng;

/// Real-coded genetic algorithm over the design box.
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm<O = PowerModel> {
    config: GaConfig,
    bounds: Bounds,
    objective: O,
}

impl GeneticAlgorithm {
    pub fn new(bounds: Bounds, config: GaConfig) -> Result<Self> {
        Self::with_objective(bounds, config, PowerModel)
    }
}

impl<O: Objective> GeneticAlgorithm<O> {
    pub fn with_objective(bounds: Bounds, config: GaConfig, objective: O) -> Result<Self> {
        bounds.validate()?;
        config.validate()?;
        Ok(Self {
            config,
            bounds,
            objective,
        })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Per-gene convex combination with an independent weight per gene.
    /// Returns the two complementary children.
    fn blend<R: Rng>(a: &Candidate, b: &Candidate, rng: &mut R) -> [[f64; DIM]; 2] {
        let mut first = [0.0; DIM];
        let mut second = [0.0; DIM];
        for i in 0..DIM {
            let w: f64 = rng.random_range(0.0..1.0);
            first[i] = w * a[i] + (1.0 - w) * b[i];
            second[i] = (1.0 - w) * a[i] + w * b[i];
        }
        [first, second]
    }

    /// Resamples each gene uniformly within its bound with `mutation_rate`.
    fn mutate<R: Rng>(&self, genes: &mut [f64; DIM], rng: &mut R) -> usize {
        let mut mutated = 0;
        for (i, gene) in genes.iter_mut().enumerate() {
            if rng.random_range(0.0..1.0) < self.config.mutation_rate {
                *gene = self.bounds.sample_coordinate(i, rng);
                mutated += 1;
            }
        }
        mutated
    }
}

impl<O: Objective> Strategy for GeneticAlgorithm<O> {
    type State = GaState;

    fn kind(&self) -> StrategyKind {
        StrategyKind::Ga
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn initialize<R: Rng>(&self, rng: &mut R) -> GaState {
        let population =
            random_population(&self.bounds, &self.objective, self.config.population_size, rng);
        GaState {
            progress: Progress::from_population(&population),
            population,
            crossovers: 0,
            mutated_genes: 0,
        }
    }

    fn step<R: Rng>(&self, state: &mut GaState, rng: &mut R) {
        let size = self.config.population_size;
        let population = &state.population;

        // Elite preservation
        let elite = match best_index(population) {
            Some(i) => population[i],
            None => return,
        };
        let mut next_gen = Vec::with_capacity(size);
        next_gen.push(elite);

        // Generate offspring
        while next_gen.len() < size {
            let p1 = &population[self.config.selection.select(population, rng)];
            let p2 = &population[self.config.selection.select(population, rng)];

            let children = if rng.random_range(0.0..1.0) < self.config.crossover_rate {
                state.crossovers += 2;
                Self::blend(&p1.candidate, &p2.candidate, rng)
            } else {
                [p1.candidate.into_values(), p2.candidate.into_values()]
            };

            for mut genes in children {
                if next_gen.len() >= size {
                    break;
                }
                state.mutated_genes += self.mutate(&mut genes, rng);
                let child = self.bounds.project_counting(genes, &mut state.progress.clips);
                next_gen.push(Scored::evaluate(&self.objective, child));
            }
        }

        state.progress.observe_all(&next_gen);
        state.population = next_gen;
        state.progress.iteration += 1;
    }

    fn progress<'a>(&self, state: &'a GaState) -> &'a Progress {
        &state.progress
    }

    fn members(&self, state: &GaState) -> Vec<Candidate> {
        state.population.iter().map(|s| s.candidate).collect()
    }
}
