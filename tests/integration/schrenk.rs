use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use vla_loads::{
    components::{schrenk_load, SpanwiseLoadProfile},
    config::WingConfig,
    DesignError,
};

use crate::common::{
    assert_monotonic_decreasing, assert_profile_valid, reference_wing, write_temp_file, WING_JSON,
};

fn reference_profile() -> SpanwiseLoadProfile {
    schrenk_load(
        reference_wing::SPAN,
        reference_wing::AREA,
        reference_wing::ROOT_CHORD,
        reference_wing::TIP_CHORD,
        reference_wing::STATIONS,
    )
    .unwrap()
}

#[test]
fn test_reference_wing() {
    let profile = reference_profile();
    assert_profile_valid(&profile);
    assert_eq!(profile.len(), reference_wing::STATIONS);

    // Index 0 is the tip
    assert_monotonic_decreasing(profile.eta.as_slice());
    let tip = profile.tip().unwrap();
    let root = profile.root().unwrap();
    assert_eq!(tip.eta, 1.0);
    assert_eq!(root.eta, 0.0);
    assert_relative_eq!(tip.chord, reference_wing::TIP_CHORD, epsilon = 1e-12);
    assert_relative_eq!(root.chord, reference_wing::ROOT_CHORD, epsilon = 1e-12);
    assert_relative_eq!(tip.unit_lift_coefficient, 0.5);
}

#[test]
fn test_schrenk_is_mean_of_chord_and_ellipse() {
    let profile = reference_profile();
    for i in (0..profile.len()).step_by(97) {
        let station = profile.station(i).unwrap();
        assert_relative_eq!(
            station.schrenk_load,
            0.5 * (station.chord + station.elliptical_load),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            station.unit_lift_coefficient,
            station.schrenk_load / station.chord,
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_integrated_load() {
    let profile = reference_profile();
    assert_relative_eq!(
        profile.integrated_load(),
        0.5 * reference_wing::AREA,
        max_relative = 1e-3
    );
}

#[test]
fn test_profile_is_repeatable() {
    assert_eq!(reference_profile(), reference_profile());
}

#[test]
fn test_wing_config_file() {
    let file = write_temp_file(WING_JSON, ".json");
    let wing = WingConfig::from_file(file.path()).unwrap();
    assert_eq!(wing.stations, 200);

    let profile = SpanwiseLoadProfile::compute(&wing.planform, wing.stations).unwrap();
    assert_profile_valid(&profile);
    assert_eq!(profile.len(), 200);
}

#[test]
fn test_invalid_geometry() {
    assert!(matches!(
        schrenk_load(-1.0, reference_wing::AREA, 1.5, 0.6, 100),
        Err(DesignError::InvalidInput(_))
    ));
    assert!(matches!(
        schrenk_load(reference_wing::SPAN, 0.0, 1.5, 0.6, 100),
        Err(DesignError::InvalidInput(_))
    ));
}
