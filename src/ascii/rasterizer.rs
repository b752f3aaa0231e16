//! Image to character-art conversion.

use super::dimensions::{grid_dimensions, GridSize};
use super::mapping::map_row;
use super::ramp::DensityRamp;
use super::sampler::{ImageSampler, NearestSampler};
use crate::art::AsciiArt;
use crate::error::ConvertError;
use crate::image_buffer::ImageBuffer;

/// Default scale, matching the smallest step of the original slider.
pub const DEFAULT_SCALE: f64 = 0.05;

/// Parameters that drive a conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    /// Fraction of the source resolution to keep, applied to both axes.
    pub scale: f64,
    /// Reverse the ramp before mapping.
    pub invert: bool,
}

impl RenderParams {
    pub fn new(scale: f64, invert: bool) -> Self {
        Self { scale, invert }
    }

    /// Reject scales that are zero, negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConvertError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            invert: false,
        }
    }
}

/// Converts decoded images to character art.
///
/// The rasterizer holds no state between calls; the only thing it owns is
/// the sampler used to shrink the image onto the character grid.
#[derive(Debug, Clone, Default)]
pub struct Rasterizer<S = NearestSampler> {
    sampler: S,
}

impl Rasterizer<NearestSampler> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: ImageSampler> Rasterizer<S> {
    /// Use a custom sampler backend.
    pub fn with_sampler(sampler: S) -> Self {
        Self { sampler }
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Grid size `convert` would produce for `image` at `params`.
    pub fn grid_for(&self, image: &ImageBuffer, params: &RenderParams) -> GridSize {
        grid_dimensions(image.width(), image.height(), params.scale)
    }

    /// Convert an image to character art.
    ///
    /// Each grid cell takes the luminance of its sampled pixel and picks
    /// `ramp[floor(L / 255 * (len - 1))]`. With `params.invert` set the ramp
    /// is reversed first.
    ///
    /// # Errors
    /// * `InvalidImage` - the image has a zero dimension
    /// * `InvalidScale` - `params.scale` is not a positive finite number
    /// * `ConversionFailed` - the sampler failed or the grid is too large
    ///
    /// Empty ramps are rejected earlier, by `DensityRamp::new`.
    pub fn convert(
        &self,
        image: &ImageBuffer,
        params: &RenderParams,
        ramp: &DensityRamp,
    ) -> Result<AsciiArt, ConvertError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(ConvertError::InvalidImage(format!(
                "image has zero dimension ({}x{})",
                image.width(),
                image.height()
            )));
        }
        params.validate()?;

        let grid = self.grid_for(image, params);
        log::debug!(
            "Converting {}x{} image to {}x{} grid (scale {}, invert {})",
            image.width(),
            image.height(),
            grid.width,
            grid.height,
            params.scale,
            params.invert
        );

        if grid.is_empty() {
            // A zero-width grid still has its rows, they are just empty
            let rows = if grid.width == 0 { grid.height as usize } else { 0 };
            return Ok(AsciiArt::from_lines(grid.width, vec![String::new(); rows]));
        }

        let sampled = self.sampler.sample(image, grid.width, grid.height)?;
        if sampled.width() != grid.width || sampled.height() != grid.height {
            return Err(ConvertError::failed(
                "resampling image",
                format!(
                    "sampler returned {}x{}, expected {}x{}",
                    sampled.width(),
                    sampled.height(),
                    grid.width,
                    grid.height
                ),
            ));
        }

        let inverted;
        let ramp = if params.invert {
            inverted = ramp.reversed();
            &inverted
        } else {
            ramp
        };

        let lines = sampled.rows().map(|row| map_row(row, ramp)).collect();
        Ok(AsciiArt::from_lines(grid.width, lines))
    }
}

/// Convert with the default nearest-neighbor sampler.
pub fn convert(
    image: &ImageBuffer,
    params: &RenderParams,
    ramp: &DensityRamp,
) -> Result<AsciiArt, ConvertError> {
    Rasterizer::new().convert(image, params, ramp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SampleError;

    struct FailingSampler;

    impl ImageSampler for FailingSampler {
        fn sample(&self, _: &ImageBuffer, _: u32, _: u32) -> Result<ImageBuffer, SampleError> {
            Err(SampleError::Backend("surface lost".into()))
        }
    }

    /// Returns a fixed 1x1 buffer regardless of the requested size.
    struct WrongSizeSampler;

    impl ImageSampler for WrongSizeSampler {
        fn sample(&self, _: &ImageBuffer, _: u32, _: u32) -> Result<ImageBuffer, SampleError> {
            ImageBuffer::filled(1, 1, [0, 0, 0, 255]).map_err(|e| SampleError::Backend(e.to_string()))
        }
    }

    #[test]
    fn test_mid_gray_scenario() {
        let img = ImageBuffer::filled(20, 20, [128, 128, 128, 255]).unwrap();
        let art = convert(&img, &RenderParams::new(0.1, false), &DensityRamp::default()).unwrap();
        assert_eq!(art.lines(), &["++".to_string()]);
    }

    #[test]
    fn test_invalid_scale() {
        let img = ImageBuffer::filled(4, 4, [0, 0, 0, 255]).unwrap();
        let ramp = DensityRamp::default();
        for scale in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let err = convert(&img, &RenderParams::new(scale, false), &ramp).unwrap_err();
            assert!(matches!(err, ConvertError::InvalidScale(_)));
        }
    }

    #[test]
    fn test_sampler_failure_is_conversion_failed() {
        let img = ImageBuffer::filled(10, 10, [0, 0, 0, 255]).unwrap();
        let rasterizer = Rasterizer::with_sampler(FailingSampler);
        let err = rasterizer
            .convert(&img, &RenderParams::new(0.5, false), &DensityRamp::default())
            .unwrap_err();
        assert!(matches!(err, ConvertError::ConversionFailed { .. }));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_wrong_sampler_output_size_is_conversion_failed() {
        let img = ImageBuffer::filled(10, 10, [0, 0, 0, 255]).unwrap();
        let rasterizer = Rasterizer::with_sampler(WrongSizeSampler);
        let err = rasterizer
            .convert(&img, &RenderParams::new(0.5, false), &DensityRamp::default())
            .unwrap_err();
        assert!(matches!(err, ConvertError::ConversionFailed { .. }));
    }

    #[test]
    fn test_zero_height_grid_is_empty() {
        let img = ImageBuffer::filled(20, 1, [0, 0, 0, 255]).unwrap();
        let art = convert(&img, &RenderParams::new(0.5, false), &DensityRamp::default()).unwrap();
        assert!(art.is_empty());
        assert_eq!(art.width(), 10);
    }

    #[test]
    fn test_zero_width_grid_keeps_rows() {
        let img = ImageBuffer::filled(1, 40, [0, 0, 0, 255]).unwrap();
        let art = convert(&img, &RenderParams::new(0.5, false), &DensityRamp::default()).unwrap();
        assert_eq!(art.height(), 10);
        assert!(art.lines().iter().all(|l| l.is_empty()));
    }

    #[test]
    fn test_failing_sampler_not_called_for_empty_grid() {
        let img = ImageBuffer::filled(1, 1, [0, 0, 0, 255]).unwrap();
        let rasterizer = Rasterizer::with_sampler(FailingSampler);
        let art = rasterizer
            .convert(&img, &RenderParams::new(0.5, false), &DensityRamp::default())
            .unwrap();
        assert!(art.is_empty());
    }

    #[test]
    fn test_huge_scale_is_conversion_failed() {
        // Grid clamps to u32::MAX on both axes, far more than can be allocated
        let img = ImageBuffer::filled(2, 2, [0, 0, 0, 255]).unwrap();
        let err = convert(&img, &RenderParams::new(1e12, false), &DensityRamp::default())
            .unwrap_err();
        assert!(matches!(err, ConvertError::ConversionFailed { .. }));
    }
}
