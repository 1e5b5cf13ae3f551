//! Conceptual-design load calculators for very light aeroplanes.
//!
//! - V-n flight envelope per CS-VLA 333/335/337, with optional CS-VLA 341 gust lines
//! - Schrenk spanwise lift distribution for straight-tapered wings
//! - Lift curve slope from tabulated section polars
//!
//! The calculators in [`components`] are pure; [`config`] and [`io`] hold the
//! file handling around them.

pub mod components;
pub mod config;
pub mod io;
pub mod utils;

pub use components::{
    schrenk_load, AirfoilPolar, Atmosphere, DesignSpeeds, EnvelopeBoundary, FlightEnvelope,
    LiftSlope, SpanwiseLoadProfile, WingPlanform,
};
pub use config::{ConfigError, EnvelopeConfig, WingConfig};
pub use utils::{DesignError, DesignResult};
