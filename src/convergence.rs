//! Convergence detection on best-so-far curves.
//!
//! A curve is stable at the first index whose value differs from its
//! predecessor by less than `epsilon`. The same test is applied to a single
//! row's curve and to the across-row average.

use crate::model::WORST_FITNESS;

/// Default tolerance on consecutive best-so-far values.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Returns the first index `i ≥ 1` with `|curve[i] − curve[i−1]| < epsilon`.
///
/// If no such index exists the last index is returned ("no observed
/// stabilization"). An empty or single-element curve yields 0.
///
/// # Examples
///
/// ```
/// use u_powerfit::convergence::detect;
///
/// assert_eq!(detect(&[5.0, 5.0, 5.0, 5.0], 1e-6), 1);
/// assert_eq!(detect(&[1.0, 2.0, 3.0], 1e-6), 2);
/// ```
pub fn detect(curve: &[f64], epsilon: f64) -> usize {
    curve
        .windows(2)
        .position(|w| (w[1] - w[0]).abs() < epsilon)
        .map(|i| i + 1)
        .unwrap_or_else(|| curve.len().saturating_sub(1))
}

/// Element-wise mean of curves of possibly different lengths.
///
/// Shorter curves are padded by repeating their final value; empty curves
/// are ignored. Non-finite entries (a row whose early best was still
/// [`WORST_FITNESS`]) are left out of that index's mean, and an index with no
/// finite entry at all stays at [`WORST_FITNESS`]. Returns an empty curve
/// when there is nothing to average.
pub fn average_curves<'a, I>(curves: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let curves: Vec<&[f64]> = curves.into_iter().filter(|c| !c.is_empty()).collect();
    let len = curves.iter().map(|c| c.len()).max().unwrap_or(0);

    (0..len)
        .map(|i| {
            let (sum, n) = curves
                .iter()
                .map(|c| c.get(i).copied().unwrap_or(c[c.len() - 1]))
                .filter(|v| v.is_finite())
                .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
            if n == 0 {
                WORST_FITNESS
            } else {
                sum / n as f64
            }
        })
        .collect()
}

/// Stateless detector holding its tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceDetector {
    pub epsilon: f64,
}

impl Default for ConvergenceDetector {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl ConvergenceDetector {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    pub fn detect(&self, curve: &[f64]) -> usize {
        detect(curve, self.epsilon)
    }
}
