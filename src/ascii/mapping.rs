//! Luminance to character mapping.

use super::luminance::luminance_rgba;
use super::ramp::DensityRamp;

/// Map a luminance value to a ramp index.
///
/// `idx = floor((L / 255) * (levels - 1))`, clamped to `[0, levels - 1]`
/// so values slightly outside `0..=255` never index out of bounds.
///
/// # Example
/// ```ignore
/// // Mid gray on a 10-level ramp: floor(128/255 * 9) = floor(4.52) = 4
/// assert_eq!(ramp_index(128.0, 10), 4);
/// ```
#[inline]
pub fn ramp_index(luminance: f64, levels: usize) -> usize {
    if levels <= 1 {
        return 0;
    }
    let max = levels - 1;
    let scaled = (luminance / 255.0) * max as f64;
    if scaled.is_nan() || scaled <= 0.0 {
        return 0;
    }
    (scaled.floor() as usize).min(max)
}

/// Map one row of RGBA bytes to a line of characters from `ramp`.
pub fn map_row(row: &[u8], ramp: &DensityRamp) -> String {
    let levels = ramp.len();
    row.chunks_exact(4)
        .map(|px| ramp.at(ramp_index(luminance_rgba(px), levels)))
        .collect()
}
