use polars::prelude::{CsvReader, DataFrame, DataType, PolarsError, SerReader};
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::components::AirfoilPolar;
use crate::utils::DesignError;

#[derive(Error, Debug)]
pub enum PolarReadError {
    #[error("Failed to open polar file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse polar CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing value in column {column} at row {row}")]
    MissingValue { column: String, row: usize },
    #[error(transparent)]
    Design(#[from] DesignError),
}

/// Columns every polar file must provide; others are ignored.
pub const POLAR_COLUMNS: [&str; 4] = ["Alpha", "Cl", "Cd", "Cm"];

/// Reads a section polar from CSV.
///
/// # Arguments
/// * `path` - CSV file with a header row naming `Alpha`, `Cl`, `Cd` and `Cm`.
/// * `skip_rows` - Preamble lines before the header (XFOIL exports carry some).
pub fn read_polar_csv<P: AsRef<Path>>(
    path: P,
    skip_rows: usize,
) -> Result<AirfoilPolar, PolarReadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let df = CsvReader::new(file)
        .has_header(true)
        .with_skip_rows(skip_rows)
        .finish()?;
    info!("Read {} polar rows from {}", df.height(), path.display());

    polar_from_frame(&df)
}

/// Extracts the polar columns of an already loaded frame.
pub fn polar_from_frame(df: &DataFrame) -> Result<AirfoilPolar, PolarReadError> {
    let alpha = column_values(df, "Alpha")?;
    let cl = column_values(df, "Cl")?;
    let cd = column_values(df, "Cd")?;
    let cm = column_values(df, "Cm")?;
    Ok(AirfoilPolar::from_columns(&alpha, &cl, &cd, &cm)?)
}

fn column_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, PolarReadError> {
    // Integer-looking columns are inferred as i64
    let series = df.column(name)?.cast(&DataType::Float64)?;
    let values = series.f64()?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| PolarReadError::MissingValue {
                column: name.to_string(),
                row,
            })
        })
        .collect()
}
