use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use vla_loads::{
    components::{Atmosphere, SegmentKind},
    config::{ConfigError, EnvelopeConfig},
    io::EnvelopeReport,
    DesignError, FlightEnvelope,
};

use crate::common::{
    assert_boundary_closed, assert_monotonic_decreasing, assert_monotonic_increasing,
    create_test_envelope_config, write_temp_file, ENVELOPE_JSON, ENVELOPE_YAML,
};

#[test]
fn test_trainer_envelope() {
    let envelope = FlightEnvelope::compute(&create_test_envelope_config()).unwrap();

    assert_eq!(envelope.positive_load_factors.len(), 250);
    assert_eq!(envelope.negative_load_factors.len(), 250);
    assert_monotonic_increasing(&envelope.positive_load_factors.samples);
    assert_monotonic_decreasing(&envelope.negative_load_factors.samples);
    assert_monotonic_increasing(&envelope.positive_stall.speeds);
    assert_monotonic_increasing(&envelope.negative_stall.speeds);

    // W/S = 400 Pa: Vc = 2.4 * 20 = 48 (below 0.9 * 60), Vd = 1.4 * 48
    assert_relative_eq!(envelope.speeds.vc, 48.0);
    assert_relative_eq!(envelope.speeds.vd, 67.2, epsilon = 1e-12);
    assert_relative_eq!(envelope.speeds.vg, envelope.speeds.vd);

    let vs1 = (400.0 * 2.0 / 1.225 / 1.5_f64).sqrt();
    assert_relative_eq!(envelope.stall_speed_1g(), vs1, epsilon = 1e-12);
    assert_relative_eq!(
        envelope.manoeuvring_speed(),
        vs1 * 3.8_f64.sqrt(),
        epsilon = 1e-9
    );

    assert_boundary_closed(&envelope.boundary);
    assert!(envelope.gust.is_none());
}

#[test]
fn test_dive_segment_corners() {
    let envelope = FlightEnvelope::compute(&create_test_envelope_config()).unwrap();
    let dive = envelope.boundary.segment(SegmentKind::Dive).unwrap();

    assert_relative_eq!(dive.points[0].v, envelope.speeds.vd);
    assert_eq!(dive.points[0].n, 3.8);
    assert_relative_eq!(dive.points[1].v, envelope.speeds.vg);
    assert_eq!(dive.points[1].n, -1.5);

    let closure = envelope
        .boundary
        .segment(SegmentKind::PositiveClosure)
        .unwrap();
    assert_eq!(closure.points[0].n, 0.0);
    assert_relative_eq!(closure.points[0].v, envelope.stall_speed_1g());
}

#[test]
fn test_envelope_is_repeatable() {
    let config = create_test_envelope_config();
    let first = FlightEnvelope::compute(&config).unwrap();
    let second = FlightEnvelope::compute(&config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_envelope_from_json_with_gusts() {
    let file = write_temp_file(ENVELOPE_JSON, ".json");
    let config = EnvelopeConfig::from_file(file.path()).unwrap();
    assert_eq!(config.atmosphere, Atmosphere::Constant { density: 1.225 });

    let envelope = FlightEnvelope::compute(&config).unwrap();
    let gust = envelope.gust.as_ref().expect("gust loads requested");
    assert!(gust.positive_at_vc > 1.0);
    assert!(gust.negative_at_vc < 1.0);
    assert_eq!(gust.lines.len(), 4);

    let report = serde_json::to_value(EnvelopeReport::new(&envelope)).unwrap();
    assert_eq!(report["name"], "Trainer");
    assert!(report["polyline"].as_array().unwrap().len() > 4);
    assert!(report["gust"].is_object());
}

#[test]
fn test_envelope_from_yaml_at_altitude() {
    let file = write_temp_file(ENVELOPE_YAML, ".yaml");
    let config = EnvelopeConfig::from_file(file.path()).unwrap();
    assert_eq!(config.atmosphere, Atmosphere::Standard { altitude: 1500.0 });

    let envelope = FlightEnvelope::compute(&config).unwrap();
    assert!(envelope.density < 1.225);
    assert_relative_eq!(envelope.speeds.vg, 55.0);

    let negative_limit = envelope
        .boundary
        .segment(SegmentKind::NegativeLimit)
        .unwrap();
    assert_eq!(negative_limit.points[0].n, -2.0);
    assert_relative_eq!(negative_limit.points[0].v, 55.0);
    assert_boundary_closed(&envelope.boundary);
}

#[test]
fn test_regulatory_violation_from_file() {
    let json = ENVELOPE_JSON.replace(r#""nmax": {"Value": 3.8}"#, r#""nmax": {"Value": 3.0}"#);
    let file = write_temp_file(&json, ".json");
    assert!(matches!(
        EnvelopeConfig::from_file(file.path()),
        Err(ConfigError::Design(DesignError::RegulatoryViolation(_)))
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        EnvelopeConfig::from_file("does/not/exist.json"),
        Err(ConfigError::FileError(_))
    ));
}
