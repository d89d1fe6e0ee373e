//! Command line surface and logging setup.

use clap::Parser;
use csv2ply_data::{ConvertError, ConvertOptions, ConvertSummary, convert_files};
use glam::Vec3;
use std::path::PathBuf;
use tracing::info;

/// CSV2PLY - convert a graphics debugger mesh CSV export to ASCII PLY
#[derive(Parser, Debug)]
#[command(name = "csv2ply")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV file exported from the mesh viewer
    pub input: PathBuf,

    /// PLY file to write
    pub output: PathBuf,

    /// Added to every X position before axis conversion
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub offset_x: f32,

    /// Added to every Y position before axis conversion
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub offset_y: f32,

    /// Added to every Z position before axis conversion
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub offset_z: f32,

    /// Write 1 - V for texture coordinates
    #[arg(long)]
    pub flip_uv: bool,

    /// Keep Y-up axes instead of converting to Z-up
    #[arg(long)]
    pub y_up: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl From<&Args> for ConvertOptions {
    fn from(args: &Args) -> Self {
        Self {
            offset: Vec3::new(args.offset_x, args.offset_y, args.offset_z),
            y_up: args.y_up,
            flip_v: args.flip_uv,
        }
    }
}

/// Logging configuration.
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    fn init(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&self.level)),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

pub fn run(args: &Args) -> Result<ConvertSummary, ConvertError> {
    LoggingConfig {
        level: args.log_level.clone(),
    }
    .init();

    let options = ConvertOptions::from(args);
    info!(
        "Converting {} -> {}",
        args.input.display(),
        args.output.display()
    );

    let summary = convert_files(&args.input, &args.output, &options)?;
    if summary.duplicate_rows > 0 {
        info!(
            "{} rows repeated an earlier vertex index",
            summary.duplicate_rows
        );
    }
    Ok(summary)
}
