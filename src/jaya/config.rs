//! Jaya configuration.

use crate::error::Result;
use crate::strategy::params::{check_population, unknown_parameter};
use crate::strategy::{StrategyKind, StrategyParams};

/// Configuration for Jaya.
///
/// Jaya has no algorithm-specific parameters; only the population size is
/// configurable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JayaConfig {
    pub population_size: usize,
}

impl Default for JayaConfig {
    fn default() -> Self {
        Self { population_size: 20 }
    }
}

impl JayaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Every key is rejected.
    pub fn apply_params(self, params: &StrategyParams) -> Result<Self> {
        match params.keys().next() {
            Some(key) => Err(unknown_parameter(StrategyKind::Jaya, key)),
            None => Ok(self),
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_population(self.population_size)
    }
}
