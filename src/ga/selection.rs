//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Different strategies provide different selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::strategy::Scored;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use u_powerfit::ga::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Roulette wheel (fitness-proportionate)
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: sample `k` individuals uniformly with
    /// replacement, keep the fittest. The first drawn wins ties.
    ///
    /// - k=2: light pressure (good for diversity)
    /// - k=3-5: moderate pressure (typical default)
    /// - k>5: strong pressure (risk of premature convergence)
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection on fitness
    /// shifted so the worst member has a small positive weight.
    ///
    /// **Warning**: Susceptible to super-individual dominance when
    /// fitness variance is high.
    Roulette,

    /// Linear rank-based selection: weight proportional to rank position,
    /// not raw fitness.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Select a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Scored], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
            Selection::Rank => rank(population, rng),
        }
    }
}

fn tournament<R: Rng>(population: &[Scored], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].beats(&population[best_idx]) {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel on shifted fitness: `weight_i = fitness_i - min + epsilon`.
///
/// Members with sentinel fitness get only `epsilon`.
fn roulette<R: Rng>(population: &[Scored], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let epsilon = 1e-10;
    let min_valid = population
        .iter()
        .filter(|s| s.is_valid())
        .map(|s| s.fitness)
        .fold(f64::INFINITY, f64::min);

    let weights: Vec<f64> = population
        .iter()
        .map(|s| {
            let w = s.fitness - min_valid + epsilon;
            if s.is_valid() && w.is_finite() && w > 0.0 {
                w
            } else {
                epsilon
            }
        })
        .collect();

    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

fn rank<R: Rng>(population: &[Scored], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    // Best first; stable so equal fitness keeps index order.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        population[b]
            .fitness
            .partial_cmp(&population[a].fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // weight = n - rank
    let total: f64 = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (rank, &original_idx) in order.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return original_idx;
        }
    }

    order[n - 1]
}
