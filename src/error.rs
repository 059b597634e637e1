//! Error types for strategy construction and batch configuration.
//!
//! Only configuration problems are errors. A candidate whose power output
//! cannot be evaluated is not an error: the strategy layer maps it to
//! [`WORST_FITNESS`](crate::model::WORST_FITNESS) and the search carries on.

use crate::space::Dimension;
use thiserror::Error;

/// Errors raised while building a strategy or a batch run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PowerfitError {
    /// A bound is empty, inverted, or has a non-finite endpoint.
    #[error("invalid bounds for {dimension}: min ({min}) must be finite and below max ({max})")]
    InvalidBounds {
        /// Dimension whose interval is malformed.
        dimension: Dimension,
        /// Configured lower endpoint.
        min: f64,
        /// Configured upper endpoint.
        max: f64,
    },

    /// A population-based strategy was configured with no members.
    #[error("population size must be positive, got {size}")]
    EmptyPopulation {
        /// The configured size.
        size: usize,
    },

    /// A numeric parameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The strategy-specific parameter map holds a key the strategy does not know.
    #[error("unknown parameter `{key}` for {strategy}")]
    UnknownParameter {
        /// Strategy tag, e.g. `"PSO"`.
        strategy: &'static str,
        /// The offending key.
        key: String,
    },

    /// A strategy tag could not be parsed.
    #[error("unknown strategy `{0}` (expected one of SA, GA, PSO, CRO, CSA, JAYA, FTMA)")]
    UnknownStrategy(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PowerfitError>;

/// Shorthand used by the `validate` methods of the algorithm configs.
pub(crate) fn invalid(message: impl Into<String>) -> PowerfitError {
    PowerfitError::InvalidConfig(message.into())
}
