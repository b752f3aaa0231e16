//! Resampling a source image onto the character grid.

use crate::error::SampleError;
use crate::image_buffer::{byte_len, ImageBuffer, BYTES_PER_PIXEL};

/// Renders an image into a destination grid of arbitrary size.
///
/// This is the one drawing primitive the rasterizer needs. Keeping it behind
/// a trait lets tests feed synthetic pixel data and lets other backends
/// (a canvas, a GPU surface) plug in without touching the mapping code.
pub trait ImageSampler {
    /// Produce a `width x height` RGBA buffer from `image`.
    fn sample(&self, image: &ImageBuffer, width: u32, height: u32)
        -> Result<ImageBuffer, SampleError>;
}

impl<S: ImageSampler + ?Sized> ImageSampler for &S {
    fn sample(
        &self,
        image: &ImageBuffer,
        width: u32,
        height: u32,
    ) -> Result<ImageBuffer, SampleError> {
        (**self).sample(image, width, height)
    }
}

/// Nearest-neighbor sampler.
///
/// Destination pixel `(x, y)` takes the source pixel at
/// `(floor(x * src_w / dst_w), floor(y * src_h / dst_h))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestSampler;

impl ImageSampler for NearestSampler {
    fn sample(
        &self,
        image: &ImageBuffer,
        width: u32,
        height: u32,
    ) -> Result<ImageBuffer, SampleError> {
        if width == 0 || height == 0 {
            return Err(SampleError::EmptyTarget { width, height });
        }

        let len = byte_len(width, height).map_err(|e| SampleError::Backend(e.to_string()))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| SampleError::Backend(format!("{}x{} target: {}", width, height, e)))?;

        let src_w = image.width() as u64;
        let src_h = image.height() as u64;
        let src = image.as_bytes();
        let row_stride = src_w as usize * BYTES_PER_PIXEL;

        // Source column offsets are the same for every row
        let columns: Vec<usize> = (0..width as u64)
            .map(|x| ((x * src_w / width as u64).min(src_w - 1)) as usize * BYTES_PER_PIXEL)
            .collect();

        for y in 0..height as u64 {
            let sy = (y * src_h / height as u64).min(src_h - 1) as usize;
            let row = &src[sy * row_stride..(sy + 1) * row_stride];
            for &offset in &columns {
                data.extend_from_slice(&row[offset..offset + BYTES_PER_PIXEL]);
            }
        }

        ImageBuffer::from_rgba(width, height, data)
            .map_err(|e| SampleError::Backend(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x2 image whose red channel encodes the pixel index.
    fn indexed_image() -> ImageBuffer {
        let mut data = Vec::new();
        for i in 0..8u8 {
            data.extend_from_slice(&[i, 0, 0, 255]);
        }
        ImageBuffer::from_rgba(4, 2, data).unwrap()
    }

    fn reds(img: &ImageBuffer) -> Vec<u8> {
        img.as_bytes().chunks_exact(4).map(|px| px[0]).collect()
    }

    #[test]
    fn test_identity_size() {
        let img = indexed_image();
        let out = NearestSampler.sample(&img, 4, 2).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_downsample_picks_top_left_of_each_cell() {
        let img = indexed_image();
        let out = NearestSampler.sample(&img, 2, 1).unwrap();
        assert_eq!(reds(&out), vec![0, 2]);
    }

    #[test]
    fn test_upsample_repeats_pixels() {
        let img = indexed_image();
        let out = NearestSampler.sample(&img, 8, 2).unwrap();
        assert_eq!(reds(&out), vec![0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7]);
    }

    #[test]
    fn test_empty_target_rejected() {
        let img = indexed_image();
        assert!(matches!(
            NearestSampler.sample(&img, 0, 3),
            Err(SampleError::EmptyTarget { width: 0, height: 3 })
        ));
    }

    #[test]
    fn test_preserves_alpha_channel() {
        let img = ImageBuffer::filled(3, 3, [1, 2, 3, 77]).unwrap();
        let out = NearestSampler.sample(&img, 1, 1).unwrap();
        assert_eq!(out.pixel(0, 0), Some([1, 2, 3, 77]));
    }

    #[test]
    fn test_oversized_target_is_backend_error() {
        let img = indexed_image();
        assert!(matches!(
            NearestSampler.sample(&img, u32::MAX, u32::MAX),
            Err(SampleError::Backend(_))
        ));
    }
}
