//! RGB to luminance using the ITU-R BT.601 luma weights.

/// Luminance of a single RGB pixel in the range `0.0..=255.0`.
///
/// The formula is `Y = 0.299*R + 0.587*G + 0.114*B`. The weighted sum is
/// taken over integers (coefficients scaled by 1000) and divided once, so
/// pure white lands on exactly 255.0 and uniform grays on their own value.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    let weighted = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    weighted as f64 / 1000.0
}

/// Luminance of an RGBA pixel. Alpha is ignored.
#[inline]
pub fn luminance_rgba(px: &[u8]) -> f64 {
    luminance(px[0], px[1], px[2])
}
