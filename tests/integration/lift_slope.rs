use approx::assert_relative_eq;
use std::f64::consts::PI;
use vla_loads::{
    components::{AirfoilPolar, LiftSlope, PolarRow},
    io::read_polar_csv,
    DesignError,
};

use crate::common::{create_test_polar, write_temp_file};

const ASPECT_RATIO: f64 = 6.4;

#[test]
fn test_lift_slope_from_fixture() {
    let slope = LiftSlope::from_polar(&create_test_polar(), ASPECT_RATIO).unwrap();

    let a0 = 0.1 * 180.0 / PI;
    assert_relative_eq!(slope.section_per_radian, a0, epsilon = 1e-9);
    assert_relative_eq!(
        slope.wing_per_radian,
        a0 / (1.0 + a0 / (PI * ASPECT_RATIO)),
        epsilon = 1e-9
    );
    assert!(slope.wing_per_radian.is_finite() && slope.wing_per_radian > 0.0);
}

#[test]
fn test_lift_slope_is_repeatable() {
    let polar = create_test_polar();
    let first = LiftSlope::from_polar(&polar, ASPECT_RATIO).unwrap();
    let second = LiftSlope::from_polar(&polar, ASPECT_RATIO).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_no_zero_alpha_row() {
    let polar = AirfoilPolar::new(vec![
        PolarRow::new(-1.0, -0.05, 0.006, -0.05),
        PolarRow::new(1.0, 0.15, 0.006, -0.05),
    ]);
    assert!(matches!(
        LiftSlope::from_polar(&polar, ASPECT_RATIO),
        Err(DesignError::NotFound(_))
    ));
}

#[test]
fn test_lift_slope_from_csv() {
    let csv = "\
Alpha,Cl,Cd,Cdp,Cm,Top_Xtr,Bot_Xtr
-2.000,-0.1000,0.00600,0.00100,-0.0500,0.60,0.50
0.000,0.0500,0.00580,0.00090,-0.0500,0.55,0.55
2.000,0.2500,0.00610,0.00110,-0.0490,0.50,0.60
";
    let file = write_temp_file(csv, ".csv");
    let polar = read_polar_csv(file.path(), 0).unwrap();
    let from_csv = LiftSlope::from_polar(&polar, ASPECT_RATIO).unwrap();
    let from_rows = LiftSlope::from_polar(&create_test_polar(), ASPECT_RATIO).unwrap();

    assert_relative_eq!(
        from_csv.wing_per_radian,
        from_rows.wing_per_radian,
        epsilon = 1e-12
    );
}
