pub mod airfoil;
pub mod atmosphere;
pub mod envelope;
pub mod wing;

pub use airfoil::{finite_wing_lift_slope, AirfoilPolar, LiftSlope, PolarRow};
pub use atmosphere::{isa_density, Atmosphere};
pub use envelope::{
    check_limit_load_factors, design_cruise_speed, design_dive_speed, generate_load_factors,
    gust_alleviation_factor, gust_load_factor, gust_mass_ratio, minimum_cruise_speed,
    stall_speed, Branch, DesignSpeeds, EnvelopeBoundary, EnvelopePoint, EnvelopeSegment,
    FlightEnvelope, GustLine, GustLoads, LoadFactorCurve, SegmentKind, StallSpeedCurve,
};
pub use wing::{schrenk_load, SpanwiseLoadProfile, SpanwiseStation, WingPlanform};
