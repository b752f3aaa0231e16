//! Configuration file handling for ascii-art.
//!
//! Loads configuration from `<config dir>/ascii-art/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{RampPreset, DEFAULT_SCALE};
use crate::session::DEFAULT_FONT_SIZE;

/// Configuration file structure for ascii-art.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub invert: bool,
    /// Custom ramp; takes precedence over `preset`
    #[serde(default)]
    pub ramp: Option<String>,
    #[serde(default)]
    pub preset: Option<RampPreset>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            invert: false,
            ramp: None,
            preset: None,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_font_size")]
    pub font_size: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Write to this file instead of stdout
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_scale() -> f64 {
    DEFAULT_SCALE
}

fn default_font_size() -> u8 {
    DEFAULT_FONT_SIZE
}

/// Template written by `config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# ascii-art configuration

[render]
# Fraction of the image resolution to keep (any positive number)
scale = 0.05
# Reverse the ramp (for light backgrounds)
invert = false
# Characters from dark to light; overrides preset when set
# ramp = "@%#*+=-:. "
# Named ramp: standard, blocks, minimal, detailed
preset = "standard"

[display]
# Font size in pixels for viewers that honor it (does not affect output)
font_size = 5

[output]
# Write to a file instead of stdout
# path = "ascii-art.txt"
"#;

impl Config {
    /// Load configuration from the default location.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path that must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Ramp string selected by this config: explicit ramp, then preset, then default.
    pub fn ramp_text(&self) -> String {
        match (&self.render.ramp, self.render.preset) {
            (Some(ramp), _) => ramp.clone(),
            (None, Some(preset)) => preset.as_str().to_string(),
            (None, None) => RampPreset::default().as_str().to_string(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-art").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-art/config.toml")
        })
}
