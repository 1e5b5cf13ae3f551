use serde::{Deserialize, Serialize};

use crate::components::envelope::boundary::EnvelopePoint;
use crate::components::envelope::speeds::DesignSpeeds;
use crate::utils::{
    require_positive, DesignResult, GUST_ALLEVIATION_NUMERATOR, GUST_ALLEVIATION_OFFSET,
    GUST_VELOCITY_AT_VC, GUST_VELOCITY_AT_VD, ISA_SEA_LEVEL_DENSITY,
};

/// Aeroplane mass ratio, CS-VLA 341.
///
/// `mu_g = 2 (M/S) / (rho * MAC * a)` with `M/S = (W/S) / g`.
///
/// # Arguments
/// * `wing_loading` - Wing loading (Pa).
/// * `mac` - Mean geometric chord (m).
/// * `lift_slope` - Aeroplane lift curve slope (1/rad).
/// * `rho` - Air density at the altitude considered (kg/m³).
/// * `g` - Gravitational acceleration (m/s²).
pub fn gust_mass_ratio(
    wing_loading: f64,
    mac: f64,
    lift_slope: f64,
    rho: f64,
    g: f64,
) -> DesignResult<f64> {
    let wing_loading = require_positive("wing loading", wing_loading)?;
    let denominator = require_positive("air density", rho)?
        * require_positive("mean aerodynamic chord", mac)?
        * require_positive("lift curve slope", lift_slope)?
        * require_positive("gravitational acceleration", g)?;
    Ok(2.0 * wing_loading / denominator)
}

/// Gust alleviation factor `Kg = 0.88 mu_g / (5.3 + mu_g)`.
pub fn gust_alleviation_factor(mass_ratio: f64) -> DesignResult<f64> {
    let mu = require_positive("mass ratio", mass_ratio)?;
    Ok(GUST_ALLEVIATION_NUMERATOR * mu / (GUST_ALLEVIATION_OFFSET + mu))
}

/// Positive and negative gust load factors at equivalent airspeed `v`.
///
/// `n = 1 ± (rho0 * V * a * Kg * Ude) / (2 W/S)`
pub fn gust_load_factor(
    v: f64,
    wing_loading: f64,
    lift_slope: f64,
    alleviation: f64,
    gust_velocity: f64,
) -> DesignResult<(f64, f64)> {
    let increment = ISA_SEA_LEVEL_DENSITY * v * lift_slope * alleviation * gust_velocity
        / (2.0 * require_positive("wing loading", wing_loading)?);
    Ok((1.0 + increment, 1.0 - increment))
}

/// A straight gust line from level flight at zero speed to `(V, n)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GustLine {
    pub gust_velocity: f64,
    pub points: Vec<EnvelopePoint>,
}

/// Gust load factors at the design cruise and dive speeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GustLoads {
    pub mass_ratio: f64,
    pub alleviation_factor: f64,
    pub positive_at_vc: f64,
    pub negative_at_vc: f64,
    pub positive_at_vd: f64,
    pub negative_at_vd: f64,
    pub lines: Vec<GustLine>,
}

impl GustLoads {
    pub fn compute(
        wing_loading: f64,
        mac: f64,
        lift_slope: f64,
        rho: f64,
        g: f64,
        speeds: &DesignSpeeds,
    ) -> DesignResult<Self> {
        let mass_ratio = gust_mass_ratio(wing_loading, mac, lift_slope, rho, g)?;
        let kg = gust_alleviation_factor(mass_ratio)?;

        let (positive_at_vc, negative_at_vc) =
            gust_load_factor(speeds.vc, wing_loading, lift_slope, kg, GUST_VELOCITY_AT_VC)?;
        let (positive_at_vd, negative_at_vd) =
            gust_load_factor(speeds.vd, wing_loading, lift_slope, kg, GUST_VELOCITY_AT_VD)?;

        let origin = EnvelopePoint::new(0.0, 1.0);
        let line = |gust_velocity: f64, v: f64, n: f64| GustLine {
            gust_velocity,
            points: vec![origin, EnvelopePoint::new(v, n)],
        };
        let lines = vec![
            line(GUST_VELOCITY_AT_VC, speeds.vc, positive_at_vc),
            line(GUST_VELOCITY_AT_VC, speeds.vc, negative_at_vc),
            line(GUST_VELOCITY_AT_VD, speeds.vd, positive_at_vd),
            line(GUST_VELOCITY_AT_VD, speeds.vd, negative_at_vd),
        ];

        Ok(Self {
            mass_ratio,
            alleviation_factor: kg,
            positive_at_vc,
            negative_at_vc,
            positive_at_vd,
            negative_at_vd,
            lines,
        })
    }

    /// The most demanding positive and negative gust load factors.
    pub fn extremes(&self) -> (f64, f64) {
        (
            self.positive_at_vc.max(self.positive_at_vd),
            self.negative_at_vc.min(self.negative_at_vd),
        )
    }
}
