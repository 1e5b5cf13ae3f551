mod lift_slope;
mod polar;

pub use lift_slope::{finite_wing_lift_slope, LiftSlope};
pub use polar::{AirfoilPolar, PolarRow};
