use std::path::Path;

use ascii_art::cli::{handle_config_action, list_presets, Args, Command, Settings};
use ascii_art::config::Config;
use ascii_art::session::Session;
use ascii_art::sink::{FileSink, TextSink, WriterSink};
use ascii_art::watch::{ctrlc_received, setup_ctrlc_handler, WatchLoop};
use ascii_art::{source, ConvertError};
use clap::Parser;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Load config: an explicit --config must exist, the default location may not.
fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) => match Config::load_from(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => match Config::load() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                eprintln!("Using default settings.\n");
                Config::default()
            }
        },
    }
}

fn make_sink(settings: &Settings) -> Box<dyn TextSink> {
    match &settings.output {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(WriterSink::new(std::io::stdout())),
    }
}

/// Convert once and write the result.
fn run_once(settings: &Settings, image_path: &Path) -> Result<(), String> {
    let mut session =
        Session::default().with_inputs(settings.params, settings.ramp.clone(), settings.font_size);

    let ticket = session.begin_load();
    session.finish_load(ticket, source::load_file(image_path));

    let art = match session.output() {
        Some(Ok(art)) => art,
        Some(Err(e)) => return Err(describe(e)),
        None => return Err("No output produced".to_string()),
    };

    let mut sink = make_sink(settings);
    sink.write_art(art).map_err(|e| e.to_string())?;

    if let Some(path) = &settings.output {
        eprintln!("Saved {}x{} art to {}", art.width(), art.height(), path.display());
    }
    Ok(())
}

/// Re-render on every change to the image file until Ctrl+C.
fn run_watch(settings: &Settings, image_path: &Path) -> Result<(), String> {
    setup_ctrlc_handler().map_err(|e| format!("Failed to set Ctrl+C handler: {}", e))?;

    let mut session =
        Session::default().with_inputs(settings.params, settings.ramp.clone(), settings.font_size);
    let mut sink = make_sink(settings);

    eprintln!("Watching {} (Ctrl+C to stop)", image_path.display());
    WatchLoop::new(image_path, &mut session, &mut sink)
        .run(ctrlc_received)
        .map_err(|e| e.to_string())
}

/// Add a hint for errors the user can fix.
fn describe(e: &ConvertError) -> String {
    match e {
        ConvertError::InvalidRamp => {
            format!("{}\nPass --ramp with at least one character, or use --preset.", e)
        }
        ConvertError::InvalidImage(_) => {
            format!("{}\nPlease try another image (PNG, JPEG, GIF, BMP, ...).", e)
        }
        _ => e.to_string(),
    }
}

fn main() {
    init_logging();

    let args = Args::parse();

    match args.command {
        Some(Command::Presets) => list_presets(),
        Some(Command::Config { ref action }) => {
            if let Err(e) = handle_config_action(action.clone(), args.config.as_deref()) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            let cfg = load_config(args.config.as_deref());
            let settings = Settings::resolve(&args, &cfg);

            let Some(image_path) = settings.image.clone() else {
                eprintln!("Error: no image given.\n\nUsage: ascii-art <IMAGE> [OPTIONS]");
                std::process::exit(2);
            };

            let result = if settings.watch {
                run_watch(&settings, &image_path)
            } else {
                run_once(&settings, &image_path)
            };

            if let Err(e) = result {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
