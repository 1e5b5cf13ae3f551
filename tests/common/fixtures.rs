use std::io::Write;
use tempfile::NamedTempFile;
use vla_loads::components::{AirfoilPolar, PolarRow};
use vla_loads::config::EnvelopeConfig;

pub const FT: f64 = 0.3048;

/// Reference wing: b = 19 ft, S = 66.5 ft², 5 ft root, 2 ft tip
pub mod reference_wing {
    use super::FT;

    pub const SPAN: f64 = 19.0 * FT;
    pub const AREA: f64 = 66.5 * FT * FT;
    pub const ROOT_CHORD: f64 = 5.0 * FT;
    pub const TIP_CHORD: f64 = 2.0 * FT;
    pub const STATIONS: usize = 1000;
}

/// A two-seat trainer meeting the CS-VLA 337 floors
pub fn create_test_envelope_config() -> EnvelopeConfig {
    EnvelopeConfig::builder()
        .name("Trainer")
        .wing_loading(400.0)
        .lift_coefficients(1.5, -0.8)
        .load_factors(3.8, -1.5)
        .vh(60.0)
        .build()
        .expect("Test envelope configuration should be valid")
}

pub fn create_test_polar() -> AirfoilPolar {
    AirfoilPolar::new(vec![
        PolarRow::new(-2.0, -0.1, 0.0060, -0.050),
        PolarRow::new(0.0, 0.05, 0.0058, -0.050),
        PolarRow::new(2.0, 0.25, 0.0061, -0.049),
    ])
}

pub const ENVELOPE_JSON: &str = r#"{
    "name": "Trainer",
    "regulation": "CS-VLA",
    "WS": {"Value": 400.0, "Unit": "Pa"},
    "rho": {"Value": 1.225, "Unit": "kg/m^3"},
    "CLmax": {"Value": 1.5},
    "CLmin": {"Value": -0.8},
    "nmax": {"Value": 3.8},
    "nmin": {"Value": -1.5},
    "VH": {"Value": 60.0, "Unit": "m/s"},
    "MAC": {"Value": 1.2, "Unit": "m"},
    "CLalpha": {"Value": 4.5, "Unit": "1/rad"}
}"#;

pub const ENVELOPE_YAML: &str = r#"
name: Trainer
WS: {Value: 400.0, Unit: Pa}
altitude: {Value: 1500.0, Unit: m}
CLmax: {Value: 1.5}
CLmin: {Value: -0.8}
nmax: {Value: 4.0}
nmin: {Value: -2.0}
VH: {Value: 60.0}
VG: {Value: 55.0}
"#;

pub const WING_JSON: &str = r#"{
    "S": {"Value": 6.17805, "Unit": "m^2"},
    "b": {"Value": 5.7912, "Unit": "m"},
    "croot": {"Value": 1.524, "Unit": "m"},
    "ctip": {"Value": 0.6096, "Unit": "m"},
    "stations": 200
}"#;

/// Writes `contents` to a temporary file with the given extension
pub fn write_temp_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
