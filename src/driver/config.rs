//! Batch run configuration.

use crate::convergence::DEFAULT_EPSILON;
use crate::cro::CroConfig;
use crate::csa::CsaConfig;
use crate::error::{invalid, Result};
use crate::ftma::FtmaConfig;
use crate::ga::GaConfig;
use crate::jaya::JayaConfig;
use crate::pso::PsoConfig;
use crate::sa::SaConfig;
use crate::space::Bounds;
use crate::strategy::params::check_population;
use crate::strategy::{StrategyKind, StrategyParams};

/// Everything a batch run needs besides the row count.
///
/// `population_size` overrides the chosen algorithm's own default and is
/// ignored by SA. `params` carries the algorithm-specific overrides; keys
/// the algorithm does not know are rejected when the batch starts.
///
/// # Examples
///
/// ```
/// use u_powerfit::driver::OptimizerConfig;
/// use u_powerfit::strategy::StrategyKind;
///
/// let config = OptimizerConfig::new(StrategyKind::Pso)
///     .with_iteration_budget(200)
///     .with_population_size(40)
///     .with_param("inertia", 0.6)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerConfig {
    /// Which algorithm to run.
    pub kind: StrategyKind,

    /// Search box shared by every row.
    pub bounds: Bounds,

    /// Steps per row.
    pub iteration_budget: usize,

    /// Population, swarm, reef or nest count.
    pub population_size: usize,

    /// Algorithm-specific overrides.
    pub params: StrategyParams,

    /// Base seed. `None` draws one at random (and logs it).
    pub seed: Option<u64>,

    /// Run rows on the rayon pool. Only honoured with the `parallel` feature.
    pub parallel: bool,

    /// Tolerance used to detect convergence on the averaged curve.
    pub convergence_epsilon: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            kind: StrategyKind::Pso,
            bounds: Bounds::default(),
            iteration_budget: 100,
            population_size: 30,
            params: StrategyParams::new(),
            seed: None,
            parallel: false,
            convergence_epsilon: DEFAULT_EPSILON,
        }
    }
}

impl OptimizerConfig {
    pub fn new(kind: StrategyKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_iteration_budget(mut self, n: usize) -> Self {
        self.iteration_budget = n;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Adds one algorithm-specific override.
    pub fn with_param(mut self, key: impl Into<String>, value: f64) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    pub fn with_params(mut self, params: StrategyParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_convergence_epsilon(mut self, epsilon: f64) -> Self {
        self.convergence_epsilon = epsilon;
        self
    }

    /// Validates the settings shared by every algorithm.
    ///
    /// Algorithm-specific settings are checked when the strategy is built.
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        if self.iteration_budget == 0 {
            return Err(invalid("iteration_budget must be at least 1"));
        }
        if self.kind.is_population_based() {
            check_population(self.population_size)?;
        }
        if !self.convergence_epsilon.is_finite() || self.convergence_epsilon < 0.0 {
            return Err(invalid(format!(
                "convergence_epsilon must be non-negative, got {}",
                self.convergence_epsilon
            )));
        }
        Ok(())
    }

    pub fn sa_config(&self) -> Result<SaConfig> {
        SaConfig::default().apply_params(&self.params)
    }

    pub fn ga_config(&self) -> Result<GaConfig> {
        GaConfig::default()
            .with_population_size(self.population_size)
            .apply_params(&self.params)
    }

    pub fn pso_config(&self) -> Result<PsoConfig> {
        PsoConfig::default()
            .with_swarm_size(self.population_size)
            .apply_params(&self.params)
    }

    pub fn cro_config(&self) -> Result<CroConfig> {
        CroConfig::default()
            .with_reef_size(self.population_size)
            .apply_params(&self.params)
    }

    pub fn csa_config(&self) -> Result<CsaConfig> {
        CsaConfig::default()
            .with_nest_count(self.population_size)
            .apply_params(&self.params)
    }

    pub fn jaya_config(&self) -> Result<JayaConfig> {
        JayaConfig::default()
            .with_population_size(self.population_size)
            .apply_params(&self.params)
    }

    pub fn ftma_config(&self) -> Result<FtmaConfig> {
        FtmaConfig::default()
            .with_population_size(self.population_size)
            .apply_params(&self.params)
    }
}
