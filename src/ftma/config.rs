//! FTMA configuration.

use crate::error::Result;
use crate::strategy::params::{as_count, check_population, check_positive, unknown_parameter};
use crate::strategy::{StrategyKind, StrategyParams};

/// Configuration for the fine-tuning metaheuristic.
///
/// # Examples
///
/// ```
/// use u_powerfit::ftma::FtmaConfig;
///
/// let config = FtmaConfig::default().with_local_phase(100, 0.005);
/// assert_eq!(config.local_iterations, 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FtmaConfig {
    pub population_size: usize,

    /// Standard deviation of the generational mutation, as a fraction of
    /// each dimension's width.
    pub mutation_fraction: f64,

    /// Perturbations tried around the best after the generational loop.
    /// Zero disables the local phase.
    pub local_iterations: usize,

    /// Half-width of a local perturbation, as a fraction of each
    /// dimension's width.
    pub local_radius: f64,
}

impl Default for FtmaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            mutation_fraction: 0.1,
            local_iterations: 50,
            local_radius: 0.01,
        }
    }
}

impl FtmaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_mutation_fraction(mut self, fraction: f64) -> Self {
        self.mutation_fraction = fraction;
        self
    }

    /// Sets the length and radius of the post-loop local phase.
    pub fn with_local_phase(mut self, iterations: usize, radius: f64) -> Self {
        self.local_iterations = iterations;
        self.local_radius = radius;
        self
    }

    /// Applies overrides from a parameter map.
    ///
    /// Keys: `mutation_fraction`, `local_iterations`, `local_radius`.
    pub fn apply_params(mut self, params: &StrategyParams) -> Result<Self> {
        for (key, &value) in params {
            match key.as_str() {
                "mutation_fraction" => self.mutation_fraction = value,
                "local_iterations" => self.local_iterations = as_count(key, value)?,
                "local_radius" => self.local_radius = value,
                other => return Err(unknown_parameter(StrategyKind::Ftma, other)),
            }
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        check_population(self.population_size)?;
        check_positive("mutation_fraction", self.mutation_fraction)?;
        check_positive("local_radius", self.local_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FtmaConfig::default();
        assert_eq!(config.local_iterations, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(FtmaConfig::default().with_mutation_fraction(0.0).validate().is_err());
        assert!(FtmaConfig::default().with_local_phase(10, -0.1).validate().is_err());
        assert!(FtmaConfig::default().with_local_phase(0, 0.01).validate().is_ok());
    }

    #[test]
    fn test_apply_params() {
        let params: StrategyParams = [("local_iterations".to_string(), 7.0)].into_iter().collect();
        let config = FtmaConfig::default().apply_params(&params).unwrap();
        assert_eq!(config.local_iterations, 7);

        let params: StrategyParams = [("local_iterations".to_string(), 7.5)].into_iter().collect();
        assert!(FtmaConfig::default().apply_params(&params).is_err());
    }
}
