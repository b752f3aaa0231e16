//! Image to character-art conversion.
//!
//! The pipeline for a single conversion:
//!
//! 1. **Grid sizing** - scale both axes, halve the rows for glyph aspect
//! 2. **Sampling** - shrink the image onto the grid via an [`ImageSampler`]
//! 3. **Luminance** - RGB to luma using BT.601 weights
//! 4. **Mapping** - luma to a character from the [`DensityRamp`]
//!
//! # Ramps
//!
//! Ramps are free-form strings ordered from dark to light. Named presets are
//! available via [`RampPreset`]:
//! - `Standard` - `@%#*+=-:. ` (the default)
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look
//! - `Detailed` - 70 levels

mod dimensions;
mod luminance;
mod mapping;
mod ramp;
mod rasterizer;
mod sampler;

pub use dimensions::{grid_dimensions, GridSize, CHAR_ASPECT_CORRECTION};
pub use luminance::{luminance, luminance_rgba};
pub use mapping::{map_row, ramp_index};
pub use ramp::{
    DensityRamp, RampPreset, BLOCKS_RAMP, DEFAULT_RAMP, DETAILED_RAMP, MINIMAL_RAMP,
};
pub use rasterizer::{convert, Rasterizer, RenderParams, DEFAULT_SCALE};
pub use sampler::{ImageSampler, NearestSampler};
