//! Decoded pixel buffers.

use crate::error::ConvertError;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A decoded image in RGBA8 format.
///
/// Pixels are stored row-major, top-to-bottom, four bytes per pixel
/// (R, G, B, A). The buffer is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Byte length of a `width x height` RGBA buffer, or `InvalidImage` when it
/// does not fit in memory.
pub fn byte_len(width: u32, height: u32) -> Result<usize, ConvertError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or_else(|| {
            ConvertError::InvalidImage(format!("{}x{} RGBA buffer is too large", width, height))
        })
}

impl ImageBuffer {
    /// Create a buffer from raw RGBA bytes.
    ///
    /// Fails with `InvalidImage` when either dimension is zero or the byte
    /// count does not match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ConvertError> {
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidImage(format!(
                "image has zero dimension ({}x{})",
                width, height
            )));
        }

        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(ConvertError::InvalidImage(format!(
                "expected {} bytes for {}x{} RGBA, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, ConvertError> {
        let pixel_count = byte_len(width, height)? / BYTES_PER_PIXEL;
        let data = rgba.repeat(pixel_count);
        Self::from_rgba(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// RGBA value of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = &self.data[idx..idx + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Iterate over rows, each row being `width * 4` bytes.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width as usize * BYTES_PER_PIXEL)
    }
}

impl TryFrom<image::RgbaImage> for ImageBuffer {
    type Error = ConvertError;

    fn try_from(img: image::RgbaImage) -> Result<Self, Self::Error> {
        let (width, height) = img.dimensions();
        Self::from_rgba(width, height, img.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_valid() {
        let buf = ImageBuffer::from_rgba(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 1);
        assert_eq!(buf.pixel(1, 0), Some([5, 6, 7, 8]));
        assert_eq!(buf.pixel(2, 0), None);
    }

    #[test]
    fn test_from_rgba_zero_dimension() {
        let err = ImageBuffer::from_rgba(0, 5, Vec::new()).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidImage(_)));
    }

    #[test]
    fn test_from_rgba_wrong_length() {
        let err = ImageBuffer::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidImage(_)));
    }

    #[test]
    fn test_filled_and_rows() {
        let buf = ImageBuffer::filled(3, 2, [10, 20, 30, 255]).unwrap();
        let rows: Vec<&[u8]> = buf.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 12);
        assert_eq!(buf.pixel(2, 1), Some([10, 20, 30, 255]));
    }

    #[test]
    fn test_oversized_dimensions_are_invalid_image() {
        // 2^31 * 2^31 * 4 overflows usize
        assert!(matches!(
            ImageBuffer::from_rgba(1 << 31, 1 << 31, Vec::new()),
            Err(ConvertError::InvalidImage(_))
        ));
        assert!(matches!(
            ImageBuffer::filled(u32::MAX, u32::MAX, [0, 0, 0, 255]),
            Err(ConvertError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(byte_len(3, 2).unwrap(), 24);
        // Fits in usize but not in isize
        assert!(byte_len(1 << 31, 1 << 30).is_err());
    }
}
