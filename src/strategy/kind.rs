use crate::error::PowerfitError;
use std::fmt;
use std::str::FromStr;

/// Tag naming one of the seven update rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    /// Simulated annealing.
    Sa,
    /// Genetic algorithm.
    Ga,
    /// Particle swarm.
    Pso,
    /// Coral-reef optimization.
    Cro,
    /// Cuckoo search.
    Csa,
    /// Jaya.
    Jaya,
    /// Fine-tuning metaheuristic.
    Ftma,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 7] = [
        StrategyKind::Sa,
        StrategyKind::Ga,
        StrategyKind::Pso,
        StrategyKind::Cro,
        StrategyKind::Csa,
        StrategyKind::Jaya,
        StrategyKind::Ftma,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            StrategyKind::Sa => "SA",
            StrategyKind::Ga => "GA",
            StrategyKind::Pso => "PSO",
            StrategyKind::Cro => "CRO",
            StrategyKind::Csa => "CSA",
            StrategyKind::Jaya => "JAYA",
            StrategyKind::Ftma => "FTMA",
        }
    }

    /// Whether the strategy keeps a population (and so reads `population_size`).
    pub fn is_population_based(self) -> bool {
        !matches!(self, StrategyKind::Sa)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for StrategyKind {
    type Err = PowerfitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PowerfitError::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_tags() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.tag().parse::<StrategyKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("jaya".parse::<StrategyKind>(), Ok(StrategyKind::Jaya));
        assert_eq!(" pso ".parse::<StrategyKind>(), Ok(StrategyKind::Pso));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "ACO".parse::<StrategyKind>(),
            Err(PowerfitError::UnknownStrategy("ACO".into()))
        );
    }
}
