//! CSA configuration.

use crate::error::{invalid, Result};
use crate::strategy::params::{check_population, check_positive, check_unit, unknown_parameter};
use crate::strategy::{StrategyKind, StrategyParams};

/// Configuration for Cuckoo Search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CsaConfig {
    /// Number of nests.
    pub nest_count: usize,

    /// Fraction of nests abandoned and rebuilt every generation (`pa`).
    pub discovery_rate: f64,

    /// Stability exponent of the Lévy distribution, in `(0, 2]`.
    pub levy_exponent: f64,

    /// Flight step as a fraction of each dimension's width.
    pub step_scale: f64,
}

impl Default for CsaConfig {
    fn default() -> Self {
        Self {
            nest_count: 25,
            discovery_rate: 0.25,
            levy_exponent: 1.5,
            step_scale: 0.01,
        }
    }
}

impl CsaConfig {
    pub fn with_nest_count(mut self, n: usize) -> Self {
        self.nest_count = n;
        self
    }

    pub fn with_discovery_rate(mut self, pa: f64) -> Self {
        self.discovery_rate = pa;
        self
    }

    pub fn with_levy_exponent(mut self, beta: f64) -> Self {
        self.levy_exponent = beta;
        self
    }

    pub fn with_step_scale(mut self, scale: f64) -> Self {
        self.step_scale = scale;
        self
    }

    /// Nests abandoned per generation.
    pub fn abandoned(&self) -> usize {
        ((self.discovery_rate * self.nest_count as f64).round() as usize).min(self.nest_count)
    }

    /// Applies overrides from a parameter map.
    ///
    /// Keys: `discovery_rate`, `levy_exponent`, `step_scale`.
    pub fn apply_params(mut self, params: &StrategyParams) -> Result<Self> {
        for (key, &value) in params {
            match key.as_str() {
                "discovery_rate" => self.discovery_rate = value,
                "levy_exponent" => self.levy_exponent = value,
                "step_scale" => self.step_scale = value,
                other => return Err(unknown_parameter(StrategyKind::Csa, other)),
            }
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        check_population(self.nest_count)?;
        check_unit("discovery_rate", self.discovery_rate)?;
        if !(self.levy_exponent > 0.0 && self.levy_exponent <= 2.0) {
            return Err(invalid(format!(
                "levy_exponent must be in (0, 2], got {}",
                self.levy_exponent
            )));
        }
        check_positive("step_scale", self.step_scale)
    }
}
