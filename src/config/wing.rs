use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::WingPlanform;
use crate::config::loader::{read_raw, ConfigError, Quantity};
use crate::utils::DEFAULT_SPANWISE_STATIONS;

/// Wing geometry as it appears in the data files.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawWingConfig {
    pub S: Quantity,
    pub b: Quantity,
    pub croot: Quantity,
    pub ctip: Quantity,
    pub stations: Option<usize>,
}

/// Validated inputs of the Schrenk calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WingConfig {
    pub planform: WingPlanform,
    pub stations: usize,
}

impl WingConfig {
    pub fn new(planform: WingPlanform) -> Self {
        Self {
            planform,
            stations: DEFAULT_SPANWISE_STATIONS,
        }
    }

    pub fn with_stations(mut self, stations: usize) -> Self {
        self.stations = stations;
        self
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw: RawWingConfig = read_raw(path)?;
        Self::from_raw_config(raw)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawWingConfig = serde_json::from_str(json)?;
        Self::from_raw_config(raw)
    }

    pub fn from_raw_config(raw: RawWingConfig) -> Result<Self, ConfigError> {
        let planform =
            WingPlanform::new(raw.b.value, raw.S.value, raw.croot.value, raw.ctip.value)?;
        Ok(Self {
            planform,
            stations: raw.stations.unwrap_or(DEFAULT_SPANWISE_STATIONS),
        })
    }
}
