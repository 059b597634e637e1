//! Box constraint on the design space.

use super::candidate::{Candidate, Dimension, DIM};
use crate::error::{invalid, PowerfitError, Result};
use rand::Rng;

/// A closed interval `[min, max]` on one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Clamps `x` into the interval. NaN lands on `min`.
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() {
            self.min
        } else {
            x.clamp(self.min, self.max)
        }
    }
}

/// Eight independent closed intervals, one per [`Dimension`].
///
/// Immutable once built and shared read-only by every row of a batch.
///
/// # Examples
///
/// ```
/// use u_powerfit::space::{Bounds, Dimension};
///
/// let bounds = Bounds::default();
/// let raw = [1e9; 8];
/// let c = bounds.project(raw);
/// assert!(bounds.contains(&c));
/// assert_eq!(c.get(Dimension::WindSpeed), bounds.get(Dimension::WindSpeed).max);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    bounds: [Bound; DIM],
}

impl Default for Bounds {
    /// A physically plausible box for a small hybrid installation.
    fn default() -> Self {
        let pairs = [
            (30.0, 50.0),    // V_oc
            (5.0, 10.0),     // I_sc
            (200.0, 1200.0), // G_theta
            (0.0, 50.0),     // T
            (3.0, 25.0),     // v
            (2.0, 10.0),     // H
            (0.5, 3.0),      // D
            (0.0, 1.0),      // L
        ];
        Self {
            bounds: pairs.map(|(min, max)| Bound { min, max }),
        }
    }
}

impl Bounds {
    /// Builds bounds from `(min, max)` pairs in [`Dimension`] order.
    ///
    /// Fails with [`PowerfitError::InvalidBounds`] if any pair has
    /// `min >= max`, a non-finite endpoint, or a width that overflows `f64`.
    pub fn new(pairs: [(f64, f64); DIM]) -> Result<Self> {
        for (dim, &(min, max)) in Dimension::ALL.iter().zip(pairs.iter()) {
            if !min.is_finite() || !max.is_finite() || min >= max || !(max - min).is_finite() {
                return Err(PowerfitError::InvalidBounds {
                    dimension: *dim,
                    min,
                    max,
                });
            }
        }
        Ok(Self {
            bounds: pairs.map(|(min, max)| Bound { min, max }),
        })
    }

    /// Re-checks the interval invariants.
    ///
    /// Values built through [`Bounds::new`] always pass; deserialized ones
    /// may not.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.bounds.map(|b| (b.min, b.max))).map(|_| ())
    }

    pub fn get(&self, dim: Dimension) -> Bound {
        self.bounds[dim.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bound> {
        self.bounds.iter()
    }

    /// Interval widths in storage order.
    pub fn widths(&self) -> [f64; DIM] {
        self.bounds.map(|b| b.width())
    }

    /// Widths scaled by `fraction`, for step sizes derived from the box.
    ///
    /// Fails with [`PowerfitError::InvalidConfig`] if a symmetric range
    /// `±width × fraction` would overflow, since sampling from it panics.
    pub fn scaled_widths(&self, name: &str, fraction: f64) -> Result<[f64; DIM]> {
        let scaled = self.widths().map(|w| w * fraction);
        for (dim, s) in Dimension::ALL.iter().zip(scaled.iter()) {
            if !(2.0 * s).is_finite() {
                return Err(invalid(format!(
                    "{name} ({fraction}) overflows the width of {dim}"
                )));
            }
        }
        Ok(scaled)
    }

    /// Draws a candidate uniformly from the box.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Candidate {
        Candidate::new(std::array::from_fn(|i| self.sample_coordinate(i, rng)))
    }

    /// Draws one coordinate uniformly from the `i`-th interval.
    pub fn sample_coordinate<R: Rng>(&self, i: usize, rng: &mut R) -> f64 {
        let b = self.bounds[i];
        rng.random_range(b.min..=b.max)
    }

    /// Clips an arbitrary vector into the box.
    pub fn project(&self, raw: [f64; DIM]) -> Candidate {
        Candidate::new(std::array::from_fn(|i| self.bounds[i].clamp(raw[i])))
    }

    /// Like [`project`](Self::project), adding the number of clipped
    /// coordinates to `clips`.
    pub fn project_counting(&self, raw: [f64; DIM], clips: &mut usize) -> Candidate {
        *clips += raw
            .iter()
            .zip(self.bounds.iter())
            .filter(|(x, b)| !b.contains(**x))
            .count();
        self.project(raw)
    }

    /// Whether every coordinate of `c` lies inside its interval.
    pub fn contains(&self, c: &Candidate) -> bool {
        c.values()
            .iter()
            .zip(self.bounds.iter())
            .all(|(&x, b)| b.contains(x))
    }
}
