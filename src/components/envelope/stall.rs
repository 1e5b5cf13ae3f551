use serde::{Deserialize, Serialize};

use crate::components::envelope::load_factor::{Branch, LoadFactorCurve};
use crate::utils::{require_positive, DesignError, DesignResult};

/// Stall speed for each load factor sample, CS-VLA 335 (1)(i).
///
/// `VS = sqrt(WS * (2 / rho) * (1 / CLmax) * n)`
///
/// # Arguments
/// * `rho` - Density at the selected altitude (kg/m³).
/// * `wing_loading` - Wing loading (Pa).
/// * `cl_max` - Applicable maximum lift coefficient.
/// * `load_factors` - Load factor samples (g).
pub fn stall_speed(
    rho: f64,
    wing_loading: f64,
    cl_max: f64,
    load_factors: &[f64],
) -> DesignResult<Vec<f64>> {
    if !(rho.is_finite() && rho > 0.0) {
        return Err(DesignError::DomainError(format!(
            "air density must be positive, got {}",
            rho
        )));
    }
    if !(cl_max.is_finite() && cl_max > 0.0) {
        return Err(DesignError::DomainError(format!(
            "maximum lift coefficient must be positive, got {}",
            cl_max
        )));
    }

    let scale = wing_loading * (2.0 / rho) * (1.0 / cl_max);
    load_factors
        .iter()
        .map(|&n| {
            let radicand = scale * n;
            if radicand.is_finite() && radicand >= 0.0 {
                Ok(radicand.sqrt())
            } else {
                Err(DesignError::DomainError(format!(
                    "wing loading {} and load factor {} give a negative stall speed radicand",
                    wing_loading, n
                )))
            }
        })
        .collect()
}

/// Stall speeds paired with the load factor curve they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StallSpeedCurve {
    pub branch: Branch,
    pub load_factors: Vec<f64>,
    pub speeds: Vec<f64>,
}

impl StallSpeedCurve {
    /// Evaluates the stall curve for one branch of the diagram.
    ///
    /// The negative branch is evaluated on `|n|` with `cl_max` taken as the
    /// magnitude of the negative-side maximum lift coefficient, so every
    /// sample must sit on the curve's own side of n = 0.
    pub fn from_load_factors(
        rho: f64,
        wing_loading: f64,
        cl_max: f64,
        curve: &LoadFactorCurve,
    ) -> DesignResult<Self> {
        require_positive("wing loading", wing_loading)?;
        if let Some(n) = curve.samples.iter().find(|&&n| !curve.branch.contains(n)) {
            return Err(DesignError::InvalidInput(format!(
                "load factor {} does not belong to the {:?} branch",
                n, curve.branch
            )));
        }

        let magnitudes: Vec<f64> = curve.samples.iter().map(|n| n.abs()).collect();
        let speeds = stall_speed(rho, wing_loading, cl_max.abs(), &magnitudes)?;

        Ok(Self {
            branch: curve.branch,
            load_factors: curve.samples.clone(),
            speeds,
        })
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }
}
