//! GA configuration.
//!
//! [`GaConfig`] holds the parameters that control one generation.

use super::selection::Selection;
use crate::error::{invalid, Result};
use crate::strategy::params::{as_count, check_population, check_unit, unknown_parameter};
use crate::strategy::{StrategyKind, StrategyParams};

/// Configuration for the Genetic Algorithm.
///
/// The single fittest individual always survives unchanged; every other
/// slot is refilled by selection, blended crossover and per-gene mutation.
///
/// # Defaults
///
/// ```
/// use u_powerfit::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.selection, Selection::Tournament(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Probability of blending a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, both parents pass through unchanged.
    pub crossover_rate: f64,

    /// Per-gene probability of resampling the gene uniformly within its
    /// bound (0.0–1.0).
    pub mutation_rate: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            selection: Selection::default(),
            crossover_rate: 0.8,
            mutation_rate: 0.1,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Applies overrides from a parameter map.
    ///
    /// Keys: `tournament_size`, `crossover_rate`, `mutation_rate`,
    /// `selection` (0 = tournament, 1 = roulette, 2 = rank).
    pub fn apply_params(mut self, params: &StrategyParams) -> Result<Self> {
        for (key, &value) in params {
            match key.as_str() {
                "tournament_size" => {
                    self.selection = Selection::Tournament(as_count(key, value)?);
                }
                "crossover_rate" => self.crossover_rate = value,
                "mutation_rate" => self.mutation_rate = value,
                "selection" => {
                    self.selection = match as_count(key, value)? {
                        0 => Selection::default(),
                        1 => Selection::Roulette,
                        2 => Selection::Rank,
                        n => return Err(invalid(format!("selection must be 0, 1 or 2, got {n}"))),
                    }
                }
                other => return Err(unknown_parameter(StrategyKind::Ga, other)),
            }
        }
        Ok(self)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_population(self.population_size)?;
        check_unit("crossover_rate", self.crossover_rate)?;
        check_unit("mutation_rate", self.mutation_rate)?;
        if let Selection::Tournament(0) = self.selection {
            return Err(invalid("tournament size must be at least 1"));
        }
        Ok(())
    }
}
