//! The strategy-specific `key → value` parameter map.

use super::StrategyKind;
use crate::error::{invalid, PowerfitError, Result};
use std::collections::BTreeMap;

/// Loose numeric overrides applied on top of an algorithm's defaults.
///
/// Ordered, so applying a map is deterministic.
pub type StrategyParams = BTreeMap<String, f64>;

pub(crate) fn unknown_parameter(kind: StrategyKind, key: &str) -> PowerfitError {
    PowerfitError::UnknownParameter {
        strategy: kind.tag(),
        key: key.to_string(),
    }
}

/// Reads a parameter that must be a non-negative whole number.
pub(crate) fn as_count(key: &str, value: f64) -> Result<usize> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Ok(value as usize)
    } else {
        Err(invalid(format!("{key} must be a non-negative integer, got {value}")))
    }
}

/// Checks `value` lies in `[0, 1]`.
pub(crate) fn check_unit(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be in [0, 1], got {value}")))
    }
}

/// Checks `value` is finite and strictly positive.
pub(crate) fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be positive, got {value}")))
    }
}

pub(crate) fn check_population(size: usize) -> Result<()> {
    if size == 0 {
        Err(PowerfitError::EmptyPopulation { size })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_count() {
        assert_eq!(as_count("k", 3.0), Ok(3));
        assert!(as_count("k", 2.5).is_err());
        assert!(as_count("k", -1.0).is_err());
        assert!(as_count("k", f64::NAN).is_err());
    }

    #[test]
    fn test_checks() {
        assert!(check_unit("p", 0.0).is_ok());
        assert!(check_unit("p", 1.0).is_ok());
        assert!(check_unit("p", 1.01).is_err());
        assert!(check_unit("p", f64::NAN).is_err());
        assert!(check_positive("t", 0.0).is_err());
        assert!(check_positive("t", f64::INFINITY).is_err());
        assert_eq!(
            check_population(0),
            Err(PowerfitError::EmptyPopulation { size: 0 })
        );
    }
}
