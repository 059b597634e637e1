//! The 8-dimensional design point.

use std::fmt;
use std::ops::Index;

/// Number of design dimensions.
pub const DIM: usize = 8;

/// One axis of the design space, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// Panel open-circuit voltage `V_oc` (V).
    OpenCircuitVoltage,
    /// Panel short-circuit current `I_sc` (A).
    ShortCircuitCurrent,
    /// Incident irradiance `G_theta` (W/m²).
    Irradiance,
    /// Cell temperature `T` (°C).
    Temperature,
    /// Wind speed `v` (m/s).
    WindSpeed,
    /// Tower height `H` (m).
    TowerHeight,
    /// Rotor diameter `D` (m).
    RotorDiameter,
    /// Blade/shaft offset `L` (m).
    BladeOffset,
}

impl Dimension {
    /// All dimensions in storage order.
    pub const ALL: [Dimension; DIM] = [
        Dimension::OpenCircuitVoltage,
        Dimension::ShortCircuitCurrent,
        Dimension::Irradiance,
        Dimension::Temperature,
        Dimension::WindSpeed,
        Dimension::TowerHeight,
        Dimension::RotorDiameter,
        Dimension::BladeOffset,
    ];

    /// Position of this dimension inside a [`Candidate`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short symbol used in tables and messages.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::OpenCircuitVoltage => "V_oc",
            Dimension::ShortCircuitCurrent => "I_sc",
            Dimension::Irradiance => "G_theta",
            Dimension::Temperature => "T",
            Dimension::WindSpeed => "v",
            Dimension::TowerHeight => "H",
            Dimension::RotorDiameter => "D",
            Dimension::BladeOffset => "L",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A point in the bounded design space.
///
/// Strategies only ever hold candidates that came out of
/// [`Bounds::sample`](super::Bounds::sample) or
/// [`Bounds::project`](super::Bounds::project), so every coordinate of a
/// stored candidate lies inside its bound.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate([f64; DIM]);

impl Candidate {
    /// Wraps raw coordinates without projecting them.
    pub fn new(values: [f64; DIM]) -> Self {
        Self(values)
    }

    /// Coordinates in storage order.
    pub fn values(&self) -> &[f64; DIM] {
        &self.0
    }

    /// Consumes the candidate, returning its coordinates.
    pub fn into_values(self) -> [f64; DIM] {
        self.0
    }

    /// Coordinate along `dim`.
    pub fn get(&self, dim: Dimension) -> f64 {
        self.0[dim.index()]
    }

    /// Element-wise midpoint of two candidates.
    pub fn midpoint(&self, other: &Candidate) -> [f64; DIM] {
        std::array::from_fn(|i| 0.5 * (self.0[i] + other.0[i]))
    }
}

impl Index<usize> for Candidate {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl Index<Dimension> for Candidate {
    type Output = f64;

    fn index(&self, dim: Dimension) -> &f64 {
        &self.0[dim.index()]
    }
}

impl From<[f64; DIM]> for Candidate {
    fn from(values: [f64; DIM]) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_order_matches_index() {
        for (i, dim) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dim.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = Dimension::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, ["V_oc", "I_sc", "G_theta", "T", "v", "H", "D", "L"]);
    }

    #[test]
    fn test_named_access() {
        let c = Candidate::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(c.get(Dimension::WindSpeed), 5.0);
        assert_eq!(c[Dimension::BladeOffset], 8.0);
        assert_eq!(c[0], 1.0);
    }

    #[test]
    fn test_midpoint() {
        let a = Candidate::new([0.0; DIM]);
        let b = Candidate::new([2.0; DIM]);
        assert_eq!(a.midpoint(&b), [1.0; DIM]);
    }
}
