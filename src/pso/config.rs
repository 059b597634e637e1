//! PSO configuration.

use crate::error::{invalid, Result};
use crate::strategy::params::{as_count, check_population, check_positive, unknown_parameter};
use crate::strategy::{StrategyKind, StrategyParams};

/// Configuration for Particle Swarm Optimization.
///
/// # Examples
///
/// ```
/// use u_powerfit::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_swarm_size(40)
///     .with_inertia(0.6)
///     .with_stagnation(1e-3, 15);
/// assert_eq!(config.stagnation_patience, 15);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of particles.
    pub swarm_size: usize,

    /// Inertia weight applied to the previous velocity.
    pub inertia: f64,

    /// Cognitive coefficient (attraction to the personal best).
    pub cognitive: f64,

    /// Social coefficient (attraction to the global best).
    pub social: f64,

    /// Velocity components are clamped to `±velocity_fraction × width`.
    pub velocity_fraction: f64,

    /// Global-best improvement below this counts as stagnant.
    pub stagnation_threshold: f64,

    /// Consecutive stagnant iterations before the stagnation point is recorded.
    pub stagnation_patience: usize,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            swarm_size: 30,
            inertia: 0.7,
            cognitive: 1.5,
            social: 1.5,
            velocity_fraction: 0.2,
            stagnation_threshold: 1e-6,
            stagnation_patience: 10,
        }
    }
}

impl PsoConfig {
    pub fn with_swarm_size(mut self, n: usize) -> Self {
        self.swarm_size = n;
        self
    }

    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    /// Sets the cognitive and social coefficients.
    pub fn with_coefficients(mut self, cognitive: f64, social: f64) -> Self {
        self.cognitive = cognitive;
        self.social = social;
        self
    }

    pub fn with_velocity_fraction(mut self, fraction: f64) -> Self {
        self.velocity_fraction = fraction;
        self
    }

    /// Sets the stagnation threshold and the run length that triggers it.
    pub fn with_stagnation(mut self, threshold: f64, patience: usize) -> Self {
        self.stagnation_threshold = threshold;
        self.stagnation_patience = patience;
        self
    }

    /// Applies overrides from a parameter map.
    ///
    /// Keys: `inertia`, `cognitive`, `social`, `velocity_fraction`,
    /// `stagnation_threshold`, `stagnation_patience`.
    pub fn apply_params(mut self, params: &StrategyParams) -> Result<Self> {
        for (key, &value) in params {
            match key.as_str() {
                "inertia" => self.inertia = value,
                "cognitive" => self.cognitive = value,
                "social" => self.social = value,
                "velocity_fraction" => self.velocity_fraction = value,
                "stagnation_threshold" => self.stagnation_threshold = value,
                "stagnation_patience" => self.stagnation_patience = as_count(key, value)?,
                other => return Err(unknown_parameter(StrategyKind::Pso, other)),
            }
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        check_population(self.swarm_size)?;
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} must be non-negative, got {value}")));
            }
        }
        check_positive("velocity_fraction", self.velocity_fraction)?;
        if !self.stagnation_threshold.is_finite() || self.stagnation_threshold < 0.0 {
            return Err(invalid("stagnation_threshold must be non-negative"));
        }
        if self.stagnation_patience == 0 {
            return Err(invalid("stagnation_patience must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PsoConfig::default();
        assert_eq!(config.swarm_size, 30);
        assert!((config.inertia - 0.7).abs() < 1e-15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_coefficient() {
        assert!(PsoConfig::default().with_coefficients(-1.0, 1.5).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_patience() {
        assert!(PsoConfig::default().with_stagnation(1e-6, 0).validate().is_err());
    }

    #[test]
    fn test_apply_params() {
        let params: StrategyParams = [
            ("social".to_string(), 2.0),
            ("stagnation_patience".to_string(), 25.0),
        ]
        .into_iter()
        .collect();
        let config = PsoConfig::default().apply_params(&params).unwrap();
        assert!((config.social - 2.0).abs() < 1e-15);
        assert_eq!(config.stagnation_patience, 25);
    }
}
