//! Subcommand handlers for presets and config actions.

use std::path::Path;

use super::args::ConfigAction;
use crate::ascii::RampPreset;
use crate::config::{default_path, Config, DEFAULT_CONFIG_TOML};

/// Print the named density ramps to stdout.
pub fn list_presets() {
    println!("Available presets (dark to light):");
    for preset in RampPreset::ALL {
        println!(
            "  {:<10} {:>2} levels  \"{}\"",
            preset.name(),
            preset.ramp().len(),
            preset.as_str()
        );
    }
    println!();
    println!("Use --preset <name> to select one, or --ramp <chars> for your own.");
}

/// Handle config subcommand actions.
///
/// `path` overrides the default config location for both actions.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) -> Result<(), String> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = if config_path.exists() {
                Config::load_from(&config_path).map_err(|e| e.to_string())?
            } else {
                Config::default()
            };

            println!("Current configuration:");
            println!("  Scale: {}", config.render.scale);
            println!("  Invert: {}", if config.render.invert { "yes" } else { "no" });
            println!("  Ramp: \"{}\"", config.ramp_text());
            println!("  Font size: {}px", config.display.font_size);
            match &config.output.path {
                Some(p) => println!("  Output: {}", p.display()),
                None => println!("  Output: stdout"),
            }
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(format!(
                    "Config file already exists: {}\nUse 'ascii-art config show' to view current settings.",
                    config_path.display()
                ));
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Error creating config directory: {}", e))?;
            }

            std::fs::write(&config_path, DEFAULT_CONFIG_TOML)
                .map_err(|e| format!("Error writing config file: {}", e))?;

            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}
