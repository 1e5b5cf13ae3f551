use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use vla_loads::{
    components::{LiftSlope, SpanwiseLoadProfile},
    config::{EnvelopeConfig, WingConfig},
    io::{read_polar_csv, write_json, EnvelopeReport},
    FlightEnvelope,
};

/// CS-VLA loads calculators
#[derive(Parser)]
#[command(name = "vla-loads")]
#[command(version)]
#[command(about = "V-n envelope, Schrenk load and lift slope calculators for very light aeroplanes")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the V-n flight envelope
    Envelope {
        /// Aircraft configuration (.json or .yaml)
        #[arg(short, long)]
        config: PathBuf,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute the Schrenk spanwise load distribution
    Schrenk {
        /// Wing configuration (.json or .yaml)
        #[arg(short, long)]
        config: PathBuf,
        /// Number of stations across the semi-span, overrides the config file
        #[arg(short, long)]
        stations: Option<usize>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Extract the lift curve slope from a section polar
    LiftSlope {
        /// Polar CSV with Alpha, Cl, Cd and Cm columns
        #[arg(short, long)]
        polar: PathBuf,
        /// Wing aspect ratio for the finite span correction
        #[arg(short, long)]
        aspect_ratio: f64,
        /// Preamble lines before the CSV header
        #[arg(long, default_value_t = 0)]
        skip_rows: usize,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Envelope { config, output } => {
            let config = EnvelopeConfig::from_file(&config)?;
            let envelope = FlightEnvelope::compute(&config)?;
            info!(
                "VS1 = {:.2} m/s, VA = {:.2} m/s",
                envelope.stall_speed_1g(),
                envelope.manoeuvring_speed()
            );
            write_json(&EnvelopeReport::new(&envelope), output.as_deref())?;
        }
        Commands::Schrenk {
            config,
            stations,
            output,
        } => {
            let mut wing = WingConfig::from_file(&config)?;
            if let Some(stations) = stations {
                wing = wing.with_stations(stations);
            }
            let profile = SpanwiseLoadProfile::compute(&wing.planform, wing.stations)?;
            info!(
                "Integrated Schrenk load {:.4} m^2 over {} stations",
                profile.integrated_load(),
                profile.len()
            );
            write_json(&profile, output.as_deref())?;
        }
        Commands::LiftSlope {
            polar,
            aspect_ratio,
            skip_rows,
            output,
        } => {
            let polar = read_polar_csv(&polar, skip_rows)?;
            let slope = LiftSlope::from_polar(&polar, aspect_ratio)?;
            write_json(&slope, output.as_deref())?;
        }
    }

    Ok(())
}
