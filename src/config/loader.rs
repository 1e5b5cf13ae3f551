use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::utils::DesignError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Missing required parameter: {0}")]
    MissingRequired(String),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
    #[error(transparent)]
    Design(#[from] DesignError),
}

/// A named numeric input as it appears in the data files: `{"Value": .., "Unit": ..}`.
///
/// Units are carried along for reporting only; values are taken as SI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(rename = "Unit", default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Quantity {
    pub fn new(value: f64) -> Self {
        Self { value, unit: None }
    }

    pub fn with_unit(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: Some(unit.to_string()),
        }
    }
}

/// Reads a raw configuration, choosing the parser from the file extension.
///
/// `.json` is parsed with `serde_json`, `.yaml`/`.yml` with `serde_yaml`.
pub fn read_raw<T, P>(path: P) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => {
            let file_contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&file_contents)?)
        }
        Some("yaml") | Some("yml") => {
            let file_contents = std::fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&file_contents)?)
        }
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}
