use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::components::{EnvelopePoint, FlightEnvelope};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Envelope output for the rendering side: every curve plus the closed boundary.
#[derive(Debug, Serialize)]
pub struct EnvelopeReport<'a> {
    #[serde(flatten)]
    pub envelope: &'a FlightEnvelope,
    pub polyline: Vec<EnvelopePoint>,
}

impl<'a> EnvelopeReport<'a> {
    pub fn new(envelope: &'a FlightEnvelope) -> Self {
        Self {
            envelope,
            polyline: envelope.boundary.polyline(),
        }
    }
}

/// Writes `value` as pretty JSON to `output`, or to stdout when `None`.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<(), ReportError> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            info!("Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, value)?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}
