use serde::{Deserialize, Serialize};

use crate::utils::{
    require_positive, DesignResult, CRUISE_SPEED_COEFFICIENT, CRUISE_SPEED_VH_FRACTION,
    DIVE_SPEED_VC_FACTOR, DIVE_SPEED_VC_MIN_FACTOR,
};

/// Required minimum design cruising speed, `2.4 * sqrt(W/S)` with W/S in Pa.
pub fn minimum_cruise_speed(wing_loading: f64) -> DesignResult<f64> {
    let wing_loading = require_positive("wing loading", wing_loading)?;
    Ok(CRUISE_SPEED_COEFFICIENT * wing_loading.sqrt())
}

/// Design cruise speed, CS-VLA 335 (a).
///
/// Vc may not be less than `2.4 * sqrt(W/S)` and need not be more than
/// `0.9 * Vh`, where Vh is the maximum level speed at maximum continuous power.
pub fn design_cruise_speed(wing_loading: f64, vh: f64) -> DesignResult<f64> {
    let vh = require_positive("maximum level speed", vh)?;
    let vc_min = minimum_cruise_speed(wing_loading)?;
    Ok(vc_min.min(CRUISE_SPEED_VH_FRACTION * vh))
}

/// Design dive speed, CS-VLA 335 (b).
///
/// Vd may not be less than `1.25 * Vc` nor less than `1.40 * Vc_min`. When both
/// bounds coincide the common value is returned.
pub fn design_dive_speed(vc_min: f64, vc: f64) -> DesignResult<f64> {
    let vd1 = DIVE_SPEED_VC_MIN_FACTOR * require_positive("minimum cruise speed", vc_min)?;
    let vd2 = DIVE_SPEED_VC_FACTOR * require_positive("cruise speed", vc)?;
    Ok(if vd2 > vd1 { vd2 } else { vd1 })
}

/// The design airspeeds bounding the V-n diagram (m/s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignSpeeds {
    /// Required minimum design cruising speed.
    pub vc_min: f64,
    /// Design cruise speed.
    pub vc: f64,
    /// Design dive speed.
    pub vd: f64,
    /// Speed at which the negative limit load factor ends the envelope.
    pub vg: f64,
}

impl DesignSpeeds {
    /// Derives all design speeds from wing loading and maximum level speed.
    ///
    /// `vg` defaults to the dive speed when not supplied.
    pub fn compute(wing_loading: f64, vh: f64, vg: Option<f64>) -> DesignResult<Self> {
        let vc_min = minimum_cruise_speed(wing_loading)?;
        let vc = design_cruise_speed(wing_loading, vh)?;
        let vd = design_dive_speed(vc_min, vc)?;
        let vg = match vg {
            Some(vg) => require_positive("negative dive speed", vg)?,
            None => vd,
        };

        Ok(Self { vc_min, vc, vd, vg })
    }
}
