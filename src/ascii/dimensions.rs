//! Character grid size from image size and scale.

/// Vertical correction for monospace glyph cells.
///
/// Terminal and editor glyphs are roughly twice as tall as they are wide, so
/// the grid keeps half as many rows as the scale alone would give.
pub const CHAR_ASPECT_CORRECTION: f64 = 0.5;

/// Dimensions of the output character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridSize {
    /// Characters per line
    pub width: u32,
    /// Number of lines
    pub height: u32,
}

impl GridSize {
    /// True when either dimension is zero (the output has no characters).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Calculate the character grid for an image at a given scale.
///
/// `width = floor(img_width * scale)` and
/// `height = floor(img_height * scale * 0.5)`. Either may be zero when the
/// scale is small enough; that is a legal, empty grid.
///
/// # Example
/// ```ignore
/// let grid = grid_dimensions(20, 20, 0.1);
/// assert_eq!((grid.width, grid.height), (2, 1));
/// ```
pub fn grid_dimensions(img_width: u32, img_height: u32, scale: f64) -> GridSize {
    if !scale.is_finite() || scale <= 0.0 {
        return GridSize::default();
    }

    let width = (img_width as f64 * scale).floor();
    let height = (img_height as f64 * scale * CHAR_ASPECT_CORRECTION).floor();

    GridSize {
        width: clamp_to_u32(width),
        height: clamp_to_u32(height),
    }
}

fn clamp_to_u32(v: f64) -> u32 {
    if v <= 0.0 {
        0
    } else if v >= u32::MAX as f64 {
        u32::MAX
    } else {
        v as u32
    }
}
