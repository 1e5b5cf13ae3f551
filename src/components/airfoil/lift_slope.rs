use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

use crate::components::airfoil::polar::AirfoilPolar;
use crate::utils::{rad_to_deg, require_positive, DesignError, DesignResult};

/// Lift curve slope taken at zero angle of attack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftSlope {
    /// Section slope (1/deg).
    pub section_per_degree: f64,
    /// Section slope (1/rad).
    pub section_per_radian: f64,
    /// Finite wing slope (1/rad) after the Prandtl correction.
    pub wing_per_radian: f64,
    pub aspect_ratio: f64,
}

/// Prandtl finite-span correction, `a = a0 / (1 + a0 / (π AR))`.
pub fn finite_wing_lift_slope(section_per_radian: f64, aspect_ratio: f64) -> DesignResult<f64> {
    let aspect_ratio = require_positive("aspect ratio", aspect_ratio)?;
    Ok(section_per_radian / (1.0 + section_per_radian / (PI * aspect_ratio)))
}

impl LiftSlope {
    /// Forward difference between the α = 0 row and the one after it.
    ///
    /// The table must contain an exact α = 0 row; no interpolation is done.
    pub fn from_polar(polar: &AirfoilPolar, aspect_ratio: f64) -> DesignResult<Self> {
        let aspect_ratio = require_positive("aspect ratio", aspect_ratio)?;
        let index = polar.zero_alpha_index()?;
        let (zero, next) = match (polar.rows.get(index), polar.rows.get(index + 1)) {
            (Some(zero), Some(next)) => (zero, next),
            _ => {
                return Err(DesignError::NotFound(
                    "no polar row follows the Alpha = 0 row".to_string(),
                ))
            }
        };

        let d_alpha = next.alpha - zero.alpha;
        if d_alpha == 0.0 {
            return Err(DesignError::DomainError(
                "repeated Alpha = 0 rows give a zero angle step".to_string(),
            ));
        }

        let section_per_degree = (next.cl - zero.cl) / d_alpha;
        // 1/deg -> 1/rad
        let section_per_radian = rad_to_deg(section_per_degree);
        let wing_per_radian = finite_wing_lift_slope(section_per_radian, aspect_ratio)?;
        debug!(
            "Lift slope: a0 = {:.4}/rad, a = {:.4}/rad at AR {:.2}",
            section_per_radian, wing_per_radian, aspect_ratio
        );

        Ok(Self {
            section_per_degree,
            section_per_radian,
            wing_per_radian,
            aspect_ratio,
        })
    }
}
