//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;
mod settings;

pub use args::{parse_scale, Args, Command, ConfigAction};
pub use commands::{handle_config_action, list_presets};
pub use enums::Preset;
pub use settings::Settings;
