use serde::{Deserialize, Serialize};

use crate::utils::{
    require_positive, DesignError, DesignResult, AIR_GAS_CONSTANT, GRAVITY, ISA_LAPSE_RATE,
    ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_PRESSURE, ISA_SEA_LEVEL_TEMP, ISA_TROPOPAUSE,
};

/// Source of the air density the envelope is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Atmosphere {
    /// Density given directly (kg/m³).
    Constant { density: f64 },
    /// ISA troposphere at a geopotential altitude (m).
    Standard { altitude: f64 },
}

impl Default for Atmosphere {
    fn default() -> Self {
        Atmosphere::Constant {
            density: ISA_SEA_LEVEL_DENSITY,
        }
    }
}

impl Atmosphere {
    pub fn density(&self) -> DesignResult<f64> {
        match *self {
            Atmosphere::Constant { density } => require_positive("air density", density),
            Atmosphere::Standard { altitude } => isa_density(altitude),
        }
    }
}

/// ISA troposphere density at `altitude` metres.
pub fn isa_density(altitude: f64) -> DesignResult<f64> {
    if !altitude.is_finite() || altitude > ISA_TROPOPAUSE {
        return Err(DesignError::InvalidInput(format!(
            "altitude {} m is outside the ISA troposphere",
            altitude
        )));
    }

    let temperature = ISA_SEA_LEVEL_TEMP + ISA_LAPSE_RATE * altitude;
    let exponent = -GRAVITY / (ISA_LAPSE_RATE * AIR_GAS_CONSTANT);
    let pressure = ISA_SEA_LEVEL_PRESSURE * (temperature / ISA_SEA_LEVEL_TEMP).powf(exponent);
    Ok(pressure / (AIR_GAS_CONSTANT * temperature))
}
