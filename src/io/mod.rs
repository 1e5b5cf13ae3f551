pub mod polar;
pub mod report;

pub use polar::{read_polar_csv, PolarReadError, POLAR_COLUMNS};
pub use report::{write_json, EnvelopeReport, ReportError};
