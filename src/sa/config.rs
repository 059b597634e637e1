//! SA configuration and cooling schedules.

use crate::error::{invalid, Result};
use crate::strategy::params::{check_positive, unknown_parameter};
use crate::strategy::{StrategyKind, StrategyParams};

/// Cooling schedule for temperature reduction, applied once per step.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// Most widely used. Typical `alpha`: 0.95–0.99.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    ///
    /// Reference: Lundy & Mees (1986)
    LundyMees {
        /// Cooling parameter. Typically `(T_0 - T_min) / (budget * T_0 * T_min)`.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

impl CoolingSchedule {
    /// Next temperature, never below `floor`.
    pub fn cool(&self, temperature: f64, floor: f64) -> f64 {
        let next = match *self {
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        };
        next.max(floor)
    }
}

/// Configuration for Simulated Annealing.
///
/// # Examples
///
/// ```
/// use u_powerfit::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.98 })
///     .with_step_fraction(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values accept more worsening moves early on.
    pub initial_temperature: f64,

    /// Temperature floor. Cooling never goes below it, so the Metropolis
    /// test stays well defined.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Half-width of the uniform perturbation, as a fraction of each
    /// dimension's width.
    pub step_fraction: f64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 1e-8,
            cooling: CoolingSchedule::default(),
            step_fraction: 0.1,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_step_fraction(mut self, fraction: f64) -> Self {
        self.step_fraction = fraction;
        self
    }

    /// Applies overrides from a parameter map.
    ///
    /// Keys: `initial_temperature`, `min_temperature`, `cooling_factor`
    /// (geometric alpha), `lundy_mees_beta`, `step_fraction`.
    pub fn apply_params(mut self, params: &StrategyParams) -> Result<Self> {
        for (key, &value) in params {
            match key.as_str() {
                "initial_temperature" => self.initial_temperature = value,
                "min_temperature" => self.min_temperature = value,
                "cooling_factor" => self.cooling = CoolingSchedule::Geometric { alpha: value },
                "lundy_mees_beta" => self.cooling = CoolingSchedule::LundyMees { beta: value },
                "step_fraction" => self.step_fraction = value,
                other => return Err(unknown_parameter(StrategyKind::Sa, other)),
            }
        }
        Ok(self)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_positive("initial_temperature", self.initial_temperature)?;
        check_positive("min_temperature", self.min_temperature)?;
        if self.min_temperature >= self.initial_temperature {
            return Err(invalid(
                "min_temperature must be less than initial_temperature",
            ));
        }
        check_positive("step_fraction", self.step_fraction)?;
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if alpha <= 0.0 || alpha >= 1.0 {
                    return Err(invalid(format!("geometric alpha must be in (0, 1), got {alpha}")));
                }
            }
            CoolingSchedule::LundyMees { beta } => check_positive("lundy-mees beta", beta)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PowerfitError;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
        assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.95 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.5 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_beta() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::LundyMees { beta: -1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cooling_respects_floor() {
        let geometric = CoolingSchedule::Geometric { alpha: 0.5 };
        assert_eq!(geometric.cool(8.0, 1.0), 4.0);
        assert_eq!(geometric.cool(1.5, 1.0), 1.0);
        let lundy = CoolingSchedule::LundyMees { beta: 1.0 };
        assert!((lundy.cool(1.0, 0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_apply_params() {
        let params: StrategyParams = [
            ("cooling_factor".to_string(), 0.9),
            ("step_fraction".to_string(), 0.2),
        ]
        .into_iter()
        .collect();
        let config = SaConfig::default().apply_params(&params).unwrap();
        assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.9 });
        assert!((config.step_fraction - 0.2).abs() < 1e-15);
    }

    #[test]
    fn test_apply_params_unknown_key() {
        let params: StrategyParams = [("inertia".to_string(), 0.7)].into_iter().collect();
        assert!(matches!(
            SaConfig::default().apply_params(&params),
            Err(PowerfitError::UnknownParameter { strategy: "SA", .. })
        ));
    }
}
