use vla_loads::components::{EnvelopeBoundary, SpanwiseLoadProfile};

/// Assert every step of `values` increases strictly
#[track_caller]
pub fn assert_monotonic_increasing(values: &[f64]) {
    for (i, w) in values.windows(2).enumerate() {
        assert!(
            w[1] > w[0],
            "Values not increasing at index {}: {} -> {}",
            i,
            w[0],
            w[1]
        );
    }
}

/// Assert every step of `values` decreases strictly
#[track_caller]
pub fn assert_monotonic_decreasing(values: &[f64]) {
    for (i, w) in values.windows(2).enumerate() {
        assert!(
            w[1] < w[0],
            "Values not decreasing at index {}: {} -> {}",
            i,
            w[0],
            w[1]
        );
    }
}

/// Assert that the envelope polyline is finite and closed
#[track_caller]
pub fn assert_boundary_closed(boundary: &EnvelopeBoundary) {
    let polyline = boundary.polyline();
    assert!(polyline.len() > 4, "Polyline has too few points");
    assert!(
        polyline.iter().all(|p| p.v.is_finite() && p.n.is_finite()),
        "Polyline contains non-finite points"
    );
    assert_eq!(polyline.first(), polyline.last(), "Polyline is not closed");
}

/// Assert that a spanwise profile is internally consistent
#[track_caller]
pub fn assert_profile_valid(profile: &SpanwiseLoadProfile) {
    let n = profile.len();
    assert_eq!(profile.eta.len(), n);
    assert_eq!(profile.chord.len(), n);
    assert_eq!(profile.elliptical_load.len(), n);
    assert_eq!(profile.schrenk_load.len(), n);
    assert_eq!(profile.unit_lift_coefficient.len(), n);

    assert!(
        profile.chord.iter().all(|c| *c > 0.0),
        "Chord must be positive"
    );
    assert!(
        profile
            .unit_lift_coefficient
            .iter()
            .all(|cl| cl.is_finite() && *cl > 0.0),
        "Unit lift coefficient must be finite and positive"
    );
    assert!(
        profile.elliptical_load.iter().all(|l| *l >= 0.0),
        "Elliptical load must be non-negative"
    );
}
