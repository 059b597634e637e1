//! CRO configuration.

use crate::error::Result;
use crate::strategy::params::{check_population, check_positive, check_unit, unknown_parameter};
use crate::strategy::{StrategyKind, StrategyParams};

/// Configuration for Coral-Reef Optimization.
///
/// Offspring counts are fractions of `reef_size`, rounded to the nearest
/// whole coral.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CroConfig {
    /// Reef capacity.
    pub reef_size: usize,

    /// Broadcast-spawning larvae per generation, as a fraction of capacity.
    pub broadcast_fraction: f64,

    /// Budding larvae per generation, as a fraction of capacity.
    pub budding_fraction: f64,

    /// Worst survivors replaced by fresh corals, as a fraction of capacity.
    pub depredation_fraction: f64,

    /// Standard deviation of larval noise, as a fraction of each
    /// dimension's width.
    pub noise_fraction: f64,
}

impl Default for CroConfig {
    fn default() -> Self {
        Self {
            reef_size: 50,
            broadcast_fraction: 0.7,
            budding_fraction: 0.1,
            depredation_fraction: 0.1,
            noise_fraction: 0.05,
        }
    }
}

impl CroConfig {
    pub fn with_reef_size(mut self, n: usize) -> Self {
        self.reef_size = n;
        self
    }

    /// Sets the broadcast and budding fractions.
    pub fn with_spawning(mut self, broadcast: f64, budding: f64) -> Self {
        self.broadcast_fraction = broadcast;
        self.budding_fraction = budding;
        self
    }

    pub fn with_depredation_fraction(mut self, fraction: f64) -> Self {
        self.depredation_fraction = fraction;
        self
    }

    pub fn with_noise_fraction(mut self, fraction: f64) -> Self {
        self.noise_fraction = fraction;
        self
    }

    /// Number of corals a fraction of the reef amounts to.
    pub fn count(&self, fraction: f64) -> usize {
        (fraction * self.reef_size as f64).round() as usize
    }

    /// Applies overrides from a parameter map.
    ///
    /// Keys: `broadcast_fraction`, `budding_fraction`,
    /// `depredation_fraction`, `noise_fraction`.
    pub fn apply_params(mut self, params: &StrategyParams) -> Result<Self> {
        for (key, &value) in params {
            match key.as_str() {
                "broadcast_fraction" => self.broadcast_fraction = value,
                "budding_fraction" => self.budding_fraction = value,
                "depredation_fraction" => self.depredation_fraction = value,
                "noise_fraction" => self.noise_fraction = value,
                other => return Err(unknown_parameter(StrategyKind::Cro, other)),
            }
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        check_population(self.reef_size)?;
        check_unit("broadcast_fraction", self.broadcast_fraction)?;
        check_unit("budding_fraction", self.budding_fraction)?;
        check_unit("depredation_fraction", self.depredation_fraction)?;
        check_positive("noise_fraction", self.noise_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts() {
        let config = CroConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.count(config.broadcast_fraction), 35);
        assert_eq!(config.count(config.budding_fraction), 5);
        assert_eq!(config.count(config.depredation_fraction), 5);
    }

    #[test]
    fn test_validate_fraction_range() {
        assert!(CroConfig::default().with_depredation_fraction(1.2).validate().is_err());
        assert!(CroConfig::default().with_noise_fraction(0.0).validate().is_err());
        assert!(CroConfig::default().with_reef_size(0).validate().is_err());
    }
}
