//! Merging CLI arguments with the config file.
//!
//! Precedence: CLI args > config file > built-in defaults.

use std::path::PathBuf;

use super::args::Args;
use crate::ascii::{RampPreset, RenderParams};
use crate::config::Config;

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub image: Option<PathBuf>,
    pub params: RenderParams,
    pub ramp: String,
    pub font_size: u8,
    /// `None` writes to stdout
    pub output: Option<PathBuf>,
    pub watch: bool,
}

impl Settings {
    pub fn resolve(args: &Args, config: &Config) -> Self {
        let scale = args.scale.unwrap_or(config.render.scale);
        let invert = if args.invert {
            true
        } else if args.no_invert {
            false
        } else {
            config.render.invert
        };

        let ramp = match (&args.ramp, args.preset) {
            (Some(ramp), _) => ramp.clone(),
            (None, Some(preset)) => RampPreset::from(preset).as_str().to_string(),
            (None, None) => config.ramp_text(),
        };

        Self {
            image: args.image.clone(),
            params: RenderParams::new(scale, invert),
            ramp,
            font_size: config.display.font_size,
            output: args.output.clone().or_else(|| config.output.path.clone()),
            watch: args.watch,
        }
    }
}
