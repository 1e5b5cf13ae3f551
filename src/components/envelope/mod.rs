mod boundary;
mod gust;
mod load_factor;
mod speeds;
mod stall;

pub use boundary::{EnvelopeBoundary, EnvelopePoint, EnvelopeSegment, SegmentKind};
pub use gust::{
    gust_alleviation_factor, gust_load_factor, gust_mass_ratio, GustLine, GustLoads,
};
pub use load_factor::{check_limit_load_factors, generate_load_factors, Branch, LoadFactorCurve};
pub use speeds::{design_cruise_speed, design_dive_speed, minimum_cruise_speed, DesignSpeeds};
pub use stall::{stall_speed, StallSpeedCurve};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::EnvelopeConfig;
use crate::utils::{DesignResult, GRAVITY};

/// Every curve and scalar making up the V-n diagram of one aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEnvelope {
    pub name: String,
    pub regulation: String,
    /// Air density the stall curves were evaluated at (kg/m³).
    pub density: f64,
    pub positive_load_factors: LoadFactorCurve,
    pub negative_load_factors: LoadFactorCurve,
    pub positive_stall: StallSpeedCurve,
    pub negative_stall: StallSpeedCurve,
    pub speeds: DesignSpeeds,
    pub boundary: EnvelopeBoundary,
    pub gust: Option<GustLoads>,
}

impl FlightEnvelope {
    /// Builds the full envelope from a validated configuration.
    pub fn compute(config: &EnvelopeConfig) -> DesignResult<Self> {
        let density = config.atmosphere.density()?;
        info!(
            "Computing V-n envelope for {} ({}) at rho = {:.4} kg/m^3",
            config.name, config.regulation, density
        );

        let positive_load_factors = generate_load_factors(config.nmax)?;
        let negative_load_factors = generate_load_factors(config.nmin)?;

        let positive_stall = StallSpeedCurve::from_load_factors(
            density,
            config.wing_loading,
            config.cl_max,
            &positive_load_factors,
        )?;
        let negative_stall = StallSpeedCurve::from_load_factors(
            density,
            config.wing_loading,
            config.cl_min,
            &negative_load_factors,
        )?;

        let speeds = DesignSpeeds::compute(config.wing_loading, config.vh, config.vg)?;
        info!(
            "Design speeds: Vc = {:.2} m/s, Vd = {:.2} m/s, Vg = {:.2} m/s",
            speeds.vc, speeds.vd, speeds.vg
        );

        let boundary = EnvelopeBoundary::assemble(
            &positive_stall,
            &negative_stall,
            config.nmax,
            config.nmin,
            speeds.vd,
            speeds.vg,
        )?;

        let gust = match config.gust {
            Some(gust) => Some(GustLoads::compute(
                config.wing_loading,
                gust.mac,
                gust.lift_slope,
                density,
                GRAVITY,
                &speeds,
            )?),
            None => None,
        };

        Ok(Self {
            name: config.name.clone(),
            regulation: config.regulation.clone(),
            density,
            positive_load_factors,
            negative_load_factors,
            positive_stall,
            negative_stall,
            speeds,
            boundary,
            gust,
        })
    }

    /// Stall speed at 1g on the positive branch.
    pub fn stall_speed_1g(&self) -> f64 {
        self.positive_stall.speeds[0]
    }

    /// Manoeuvring speed: where the positive stall curve meets `nmax`.
    pub fn manoeuvring_speed(&self) -> f64 {
        self.positive_stall.speeds[self.positive_stall.len() - 1]
    }
}
