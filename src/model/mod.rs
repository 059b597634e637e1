//! Hybrid solar/wind power-output model.
//!
//! The fitness of a design point is the sum of two closed-form terms:
//!
//! - **Solar**: open-circuit voltage and short-circuit current corrected for
//!   the cell temperature's deviation from 25 °C, scaled by irradiance
//!   relative to 1000 W/m², times a fixed impedance-divider factor.
//! - **Wind**: cubic in wind speed, scaled by a fixed efficiency × air
//!   density constant and by rotor diameter times the effective swept
//!   height `H - L/2`.
//!
//! Higher is better. Strategies never see a non-finite value: [`guard`]
//! maps it to [`WORST_FITNESS`].

use crate::space::{Candidate, Dimension};

/// Fitness assigned to candidates whose output is not a finite number.
pub const WORST_FITNESS: f64 = f64::NEG_INFINITY;

/// Irradiance at which panel ratings are quoted (W/m²).
pub const REFERENCE_IRRADIANCE: f64 = 1000.0;

/// Cell temperature at which panel ratings are quoted (°C).
pub const REFERENCE_TEMPERATURE: f64 = 25.0;

/// Relative change of `V_oc` per °C above the reference.
pub const VOC_TEMPERATURE_COEFFICIENT: f64 = -0.0023;

/// Relative change of `I_sc` per °C above the reference.
pub const ISC_TEMPERATURE_COEFFICIENT: f64 = 0.0005;

/// Fixed impedance-divider factor applied to the panel's `V_oc * I_sc`.
pub const IMPEDANCE_FACTOR: f64 = 0.700 / 18.85;

/// Air density at sea level (kg/m³).
pub const AIR_DENSITY: f64 = 1.225;

/// Rotor power coefficient.
pub const POWER_COEFFICIENT: f64 = 0.3;

/// Geometric factor turning `D * (H - L/2)` into swept area.
pub const SWEPT_AREA_FACTOR: f64 = 4.0;

/// `SWEPT_AREA_FACTOR * Cp * ½ * rho`.
pub const WIND_COEFFICIENT: f64 = SWEPT_AREA_FACTOR * POWER_COEFFICIENT * 0.5 * AIR_DENSITY;

/// Anything that scores a candidate. Higher is better.
///
/// Implemented for [`PowerModel`] and for any `Fn(&Candidate) -> f64`, so
/// tests can inject alternative landscapes.
pub trait Objective: Send + Sync {
    fn evaluate(&self, candidate: &Candidate) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&Candidate) -> f64 + Send + Sync,
{
    fn evaluate(&self, candidate: &Candidate) -> f64 {
        self(candidate)
    }
}

/// The fixed hybrid power-output model.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerModel;

impl PowerModel {
    /// Panel output (W).
    pub fn solar_power(candidate: &Candidate) -> f64 {
        let dt = candidate[Dimension::Temperature] - REFERENCE_TEMPERATURE;
        let voc = candidate[Dimension::OpenCircuitVoltage] * (1.0 + VOC_TEMPERATURE_COEFFICIENT * dt);
        let isc = candidate[Dimension::ShortCircuitCurrent] * (1.0 + ISC_TEMPERATURE_COEFFICIENT * dt);
        let irradiance_ratio = candidate[Dimension::Irradiance] / REFERENCE_IRRADIANCE;
        voc * isc * irradiance_ratio * IMPEDANCE_FACTOR
    }

    /// Turbine output (W).
    pub fn wind_power(candidate: &Candidate) -> f64 {
        let v = candidate[Dimension::WindSpeed];
        let swept_height =
            candidate[Dimension::TowerHeight] - 0.5 * candidate[Dimension::BladeOffset];
        WIND_COEFFICIENT * v.powi(3) * candidate[Dimension::RotorDiameter] * swept_height
    }

    /// Total output (W), unguarded.
    pub fn power_output(candidate: &Candidate) -> f64 {
        Self::solar_power(candidate) + Self::wind_power(candidate)
    }
}

impl Objective for PowerModel {
    fn evaluate(&self, candidate: &Candidate) -> f64 {
        Self::power_output(candidate)
    }
}

/// Maps a raw objective value to a fitness that is safe to compare.
#[inline]
pub fn guard(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        WORST_FITNESS
    }
}

/// Evaluates `candidate` through `objective` and applies [`guard`].
#[inline]
pub fn fitness<O: Objective + ?Sized>(objective: &O, candidate: &Candidate) -> f64 {
    guard(objective.evaluate(candidate))
}
