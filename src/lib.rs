//! ascii-art library crate.
//!
//! Converts decoded raster images into character art by sampling luminance
//! over a downscaled grid and mapping each sample onto a density ramp.
//!
//! ```no_run
//! use ascii_art::ascii::{convert, DensityRamp, RenderParams};
//! use ascii_art::source;
//! use std::path::Path;
//!
//! let image = source::load_file(Path::new("photo.png"))?;
//! let art = convert(&image, &RenderParams::new(0.1, false), &DensityRamp::default())?;
//! print!("{}", art);
//! # Ok::<(), ascii_art::ConvertError>(())
//! ```

pub mod art;
pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod image_buffer;
pub mod session;
pub mod sink;
pub mod source;
pub mod watch;

pub use art::AsciiArt;
pub use error::ConvertError;
pub use image_buffer::ImageBuffer;
