//! Conversion session: keeps the current inputs and re-renders on change.
//!
//! A session owns the latest image, scale, invert flag and ramp text. Any
//! change to one of those re-runs the rasterizer; font size is display-only
//! and never does.
//!
//! Image loads are asynchronous from the session's point of view: a caller
//! takes a [`LoadTicket`] before decoding and hands the result back with
//! [`Session::finish_load`]. Only the most recent ticket is honored, so a
//! slow decode that finishes after a newer one was started is dropped
//! instead of overwriting fresher output.

use crate::art::AsciiArt;
use crate::ascii::{DensityRamp, ImageSampler, NearestSampler, Rasterizer, RenderParams, DEFAULT_RAMP};
use crate::error::ConvertError;
use crate::image_buffer::ImageBuffer;

/// Default display font size in pixels.
pub const DEFAULT_FONT_SIZE: u8 = 5;
/// Smallest display font size.
pub const MIN_FONT_SIZE: u8 = 4;
/// Largest display font size.
pub const MAX_FONT_SIZE: u8 = 16;

/// Identifies one pending image load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Holds conversion inputs and the most recent result.
pub struct Session<S = NearestSampler> {
    rasterizer: Rasterizer<S>,
    image: Option<ImageBuffer>,
    params: RenderParams,
    ramp: String,
    font_size: u8,
    /// Ticket id handed out by the last `begin_load`
    latest_ticket: u64,
    /// Ticket id whose result is currently applied (0 = none)
    applied_ticket: u64,
    output: Option<Result<AsciiArt, ConvertError>>,
    conversions: u64,
}

impl Default for Session<NearestSampler> {
    fn default() -> Self {
        Self::new(Rasterizer::new())
    }
}

impl<S: ImageSampler> Session<S> {
    pub fn new(rasterizer: Rasterizer<S>) -> Self {
        Self {
            rasterizer,
            image: None,
            params: RenderParams::default(),
            ramp: DEFAULT_RAMP.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            latest_ticket: 0,
            applied_ticket: 0,
            output: None,
            conversions: 0,
        }
    }

    /// Seed the inputs without rendering (no image is loaded yet).
    pub fn with_inputs(mut self, params: RenderParams, ramp: impl Into<String>, font_size: u8) -> Self {
        self.params = params;
        self.ramp = ramp.into();
        self.font_size = font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self
    }

    pub fn params(&self) -> RenderParams {
        self.params
    }

    pub fn ramp(&self) -> &str {
        &self.ramp
    }

    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    pub fn image(&self) -> Option<&ImageBuffer> {
        self.image.as_ref()
    }

    /// Latest conversion result, if any conversion has run.
    pub fn output(&self) -> Option<&Result<AsciiArt, ConvertError>> {
        self.output.as_ref()
    }

    /// Number of times the rasterizer has been invoked.
    pub fn conversions(&self) -> u64 {
        self.conversions
    }

    /// True while a ticket newer than the applied result is outstanding.
    pub fn has_pending_load(&self) -> bool {
        self.latest_ticket != self.applied_ticket
    }

    pub fn set_scale(&mut self, scale: f64) {
        if self.params.scale != scale {
            self.params.scale = scale;
            self.refresh();
        }
    }

    pub fn set_invert(&mut self, invert: bool) {
        if self.params.invert != invert {
            self.params.invert = invert;
            self.refresh();
        }
    }

    pub fn set_ramp(&mut self, ramp: impl Into<String>) {
        let ramp = ramp.into();
        if self.ramp != ramp {
            self.ramp = ramp;
            self.refresh();
        }
    }

    /// Change the display font size. Clamped to the supported range.
    pub fn set_font_size(&mut self, size: u8) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    /// Start a new image load, superseding any load still in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        LoadTicket(self.latest_ticket)
    }

    /// Apply the result of a load started with `begin_load`.
    ///
    /// Returns `false` and leaves the session untouched if a newer load has
    /// been started since `ticket` was issued. A failed load clears the
    /// current image and records the error as the output.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<ImageBuffer, ConvertError>,
    ) -> bool {
        if ticket.0 != self.latest_ticket {
            log::debug!(
                "Discarding stale load {} (latest is {})",
                ticket.0,
                self.latest_ticket
            );
            return false;
        }

        self.applied_ticket = ticket.0;
        match result {
            Ok(image) => {
                self.image = Some(image);
                self.refresh();
            }
            Err(e) => {
                log::warn!("Image load failed: {}", e);
                self.image = None;
                self.output = Some(Err(e));
            }
        }
        true
    }

    /// Replace the image directly, bypassing the ticket flow.
    pub fn load_image(&mut self, image: ImageBuffer) {
        let ticket = self.begin_load();
        self.finish_load(ticket, Ok(image));
    }

    fn refresh(&mut self) {
        let Some(image) = self.image.as_ref() else {
            return;
        };

        self.conversions += 1;
        let result = DensityRamp::new(&self.ramp)
            .and_then(|ramp| self.rasterizer.convert(image, &self.params, &ramp));
        if let Err(e) = &result {
            log::warn!("Conversion failed: {}", e);
        }
        self.output = Some(result);
    }
}
