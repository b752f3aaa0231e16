//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Preset;
use crate::sink::DEFAULT_OUTPUT_FILE;

/// Parse and validate a scale factor (any positive, finite number)
pub fn parse_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(format!("Scale must be greater than 0, got {}", s));
    }
    Ok(scale)
}

/// Convert images to ASCII art using a luminance density ramp
#[derive(Parser, Debug)]
#[command(name = "ascii-art")]
#[command(version, about = "Convert images to ASCII art", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Print a small rendering to the terminal
    ascii-art photo.jpg

    # Larger rendering with block characters, saved to ascii-art.txt
    ascii-art photo.jpg --scale 0.2 --preset blocks --output

    # Custom ramp for a light background
    ascii-art photo.png --ramp '#+-. ' --invert

    # Re-render whenever the file changes
    ascii-art sketch.png --watch")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file to convert (PNG, JPEG, GIF, BMP, ...)
    pub image: Option<PathBuf>,

    /// Fraction of the image resolution to keep, e.g. 0.05-0.5 [default: 0.05]
    #[arg(short, long, value_parser = parse_scale)]
    pub scale: Option<f64>,

    /// Reverse the density ramp (for light backgrounds)
    #[arg(short, long)]
    pub invert: bool,

    /// Keep the ramp order even when the config sets invert
    #[arg(long, conflicts_with = "invert")]
    pub no_invert: bool,

    /// Density ramp, characters from dark to light
    #[arg(short, long, conflicts_with = "preset")]
    pub ramp: Option<String>,

    /// Named density ramp
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Write to a file instead of stdout (ascii-art.txt if no path is given)
    #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_OUTPUT_FILE)]
    pub output: Option<PathBuf>,

    /// Keep running and re-render whenever the image file changes
    #[arg(short, long)]
    pub watch: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the named density ramps
    Presets,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
