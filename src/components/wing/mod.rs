mod planform;
mod schrenk;

pub use planform::WingPlanform;
pub use schrenk::{schrenk_load, SpanwiseLoadProfile, SpanwiseStation};
