//! Image source: turns encoded files into [`ImageBuffer`]s.
//!
//! Decoding is delegated to the `image` crate, so anything it understands
//! (PNG, JPEG, GIF, BMP, WebP, ...) is accepted. Animated formats yield
//! their first frame.

use std::path::Path;

use crate::error::ConvertError;
use crate::image_buffer::ImageBuffer;

/// Decode an in-memory encoded image into RGBA pixels.
///
/// Bytes the decoder cannot make sense of are an `InvalidImage`, since the
/// caller handed us something that is not a picture.
pub fn decode_bytes(bytes: &[u8]) -> Result<ImageBuffer, ConvertError> {
    if bytes.is_empty() {
        return Err(ConvertError::InvalidImage("no image data".to_string()));
    }

    let format = image::guess_format(bytes)
        .map_err(|e| ConvertError::InvalidImage(format!("unrecognized format: {}", e)))?;

    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| ConvertError::InvalidImage(format!("failed to decode {:?}: {}", format, e)))?;

    log::debug!(
        "Decoded {:?} image ({}x{})",
        format,
        decoded.width(),
        decoded.height()
    );

    ImageBuffer::try_from(decoded.to_rgba8())
}

/// Read and decode an image file.
///
/// A file that cannot be read is an environment problem and surfaces as
/// `ConversionFailed` with the I/O error attached.
pub fn load_file(path: &Path) -> Result<ImageBuffer, ConvertError> {
    let bytes = std::fs::read(path)
        .map_err(|e| ConvertError::failed(format!("reading '{}'", path.display()), e))?;
    log::info!("Loaded {} ({} bytes)", path.display(), bytes.len());
    decode_bytes(&bytes)
}
