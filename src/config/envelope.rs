use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::components::{check_limit_load_factors, Atmosphere};
use crate::config::loader::{read_raw, ConfigError, Quantity};
use crate::utils::require_positive;

/// Envelope inputs as they appear in the data files.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawEnvelopeConfig {
    /// Aircraft identification
    pub name: Option<String>,
    pub regulation: Option<String>,

    /// Wing loading (Pa)
    pub WS: Quantity,

    /// Either density (kg/m³) or ISA altitude (m)
    pub rho: Option<Quantity>,
    pub altitude: Option<Quantity>,

    /// Lift
    pub CLmax: Quantity,
    pub CLmin: Quantity,

    /// Limit manoeuvring load factors
    pub nmax: Quantity,
    pub nmin: Quantity,

    /// Speeds (m/s)
    pub VH: Quantity,
    pub VG: Option<Quantity>,

    /// Gust inputs
    pub MAC: Option<Quantity>,
    pub CLalpha: Option<Quantity>,
}

/// Inputs for the CS-VLA 341 gust lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GustConfig {
    /// Mean aerodynamic chord (m).
    pub mac: f64,
    /// Aeroplane lift curve slope (1/rad).
    pub lift_slope: f64,
}

/// Validated inputs of the V-n envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeConfig {
    pub name: String,
    pub regulation: String,
    /// Wing loading W/S (Pa).
    pub wing_loading: f64,
    pub atmosphere: Atmosphere,
    /// Maximum lift coefficient, positive side.
    pub cl_max: f64,
    /// Maximum lift coefficient, negative side; only its magnitude is used.
    pub cl_min: f64,
    pub nmax: f64,
    pub nmin: f64,
    /// Maximum level speed at maximum continuous power (m/s).
    pub vh: f64,
    /// End of the negative limit line (m/s); the dive speed when absent.
    pub vg: Option<f64>,
    pub gust: Option<GustConfig>,
}

impl EnvelopeConfig {
    /// Loads and validates an envelope configuration from JSON or YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw: RawEnvelopeConfig = read_raw(path)?;
        Self::from_raw_config(raw)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawEnvelopeConfig = serde_json::from_str(json)?;
        Self::from_raw_config(raw)
    }

    pub fn from_raw_config(raw: RawEnvelopeConfig) -> Result<Self, ConfigError> {
        EnvelopeConfigBuilder::from_raw(&raw)?.build()
    }

    pub fn builder() -> EnvelopeConfigBuilder {
        EnvelopeConfigBuilder::new()
    }
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeConfigBuilder {
    pub name: Option<String>,
    pub regulation: Option<String>,
    pub wing_loading: Option<f64>,
    pub atmosphere: Option<Atmosphere>,
    pub cl_max: Option<f64>,
    pub cl_min: Option<f64>,
    pub nmax: Option<f64>,
    pub nmin: Option<f64>,
    pub vh: Option<f64>,
    pub vg: Option<f64>,
    pub gust: Option<GustConfig>,
}

impl EnvelopeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: &RawEnvelopeConfig) -> Result<Self, ConfigError> {
        let atmosphere = match (&raw.rho, &raw.altitude) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::ValidationError(
                    "specify either rho or altitude, not both".to_string(),
                ))
            }
            (Some(rho), None) => Some(Atmosphere::Constant { density: rho.value }),
            (None, Some(altitude)) => Some(Atmosphere::Standard {
                altitude: altitude.value,
            }),
            (None, None) => None,
        };

        let gust = match (&raw.MAC, &raw.CLalpha) {
            (Some(mac), Some(lift_slope)) => Some(GustConfig {
                mac: mac.value,
                lift_slope: lift_slope.value,
            }),
            (None, None) => None,
            _ => {
                return Err(ConfigError::ValidationError(
                    "gust loads need both MAC and CLalpha".to_string(),
                ))
            }
        };

        Ok(Self {
            name: raw.name.clone(),
            regulation: raw.regulation.clone(),
            wing_loading: Some(raw.WS.value),
            atmosphere,
            cl_max: Some(raw.CLmax.value),
            cl_min: Some(raw.CLmin.value),
            nmax: Some(raw.nmax.value),
            nmin: Some(raw.nmin.value),
            vh: Some(raw.VH.value),
            vg: raw.VG.as_ref().map(|q| q.value),
            gust,
        })
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn wing_loading(mut self, wing_loading: f64) -> Self {
        self.wing_loading = Some(wing_loading);
        self
    }

    pub fn atmosphere(mut self, atmosphere: Atmosphere) -> Self {
        self.atmosphere = Some(atmosphere);
        self
    }

    pub fn lift_coefficients(mut self, cl_max: f64, cl_min: f64) -> Self {
        self.cl_max = Some(cl_max);
        self.cl_min = Some(cl_min);
        self
    }

    pub fn load_factors(mut self, nmax: f64, nmin: f64) -> Self {
        self.nmax = Some(nmax);
        self.nmin = Some(nmin);
        self
    }

    pub fn vh(mut self, vh: f64) -> Self {
        self.vh = Some(vh);
        self
    }

    pub fn vg(mut self, vg: f64) -> Self {
        self.vg = Some(vg);
        self
    }

    pub fn gust(mut self, mac: f64, lift_slope: f64) -> Self {
        self.gust = Some(GustConfig { mac, lift_slope });
        self
    }

    pub fn build(self) -> Result<EnvelopeConfig, ConfigError> {
        let name = self.name.unwrap_or_else(|| "Aircraft".to_string());
        let regulation = self.regulation.unwrap_or_else(|| "CS-VLA".to_string());
        info!("Building EnvelopeConfig for {}", name);

        let wing_loading = require_positive("wing loading", required(self.wing_loading, "WS")?)?;
        let cl_max = require_positive("CLmax", required(self.cl_max, "CLmax")?)?;
        let cl_min = required(self.cl_min, "CLmin")?;
        require_positive("CLmin magnitude", cl_min.abs())?;
        let vh = require_positive("VH", required(self.vh, "VH")?)?;
        let nmax = required(self.nmax, "nmax")?;
        let nmin = required(self.nmin, "nmin")?;
        check_limit_load_factors(nmax, nmin)?;

        let atmosphere = self.atmosphere.unwrap_or_default();
        atmosphere.density()?;

        if let Some(vg) = self.vg {
            require_positive("VG", vg)?;
        }
        if let Some(gust) = self.gust {
            require_positive("MAC", gust.mac)?;
            require_positive("CLalpha", gust.lift_slope)?;
        }

        Ok(EnvelopeConfig {
            name,
            regulation,
            wing_loading,
            atmosphere,
            cl_max,
            cl_min,
            nmax,
            nmin,
            vh,
            vg: self.vg,
            gust: self.gust,
        })
    }
}

fn required(value: Option<f64>, name: &str) -> Result<f64, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingRequired(name.to_string()))
}
