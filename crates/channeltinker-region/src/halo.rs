//! Halo repair
//!
//! Background removal often leaves a fringe of partially transparent
//! pixels whose color is wrong. [`extend`] recolors each of them from the
//! nearest sufficiently opaque pixel, and can binarize alpha afterwards
//! so the result converts cleanly to indexed color.
//!
//! The surface is modified in place, in row-major order, so a repaired
//! pixel can serve as the source for later ones.

use crate::error::{NoOpaqueCandidate, RegionResult};
use crate::search::{SearchOutcome, SearchQuery, find_opaque_pos, require_float_alpha};
use channeltinker_core::{
    ChannelType, Diagnostics, PixelSurface, Point, Progress, convert_channel, pixel_channel,
};

const OWN_POSITION: &str = "got own position when searching for a better color";
const NO_OPAQUE: &str = "the image has no pixels at or above the minimum good alpha";

/// Options for [`extend`], on the 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HaloOptions {
    /// Only edit pixels with at least this alpha
    pub minimum: u8,
    /// Only edit pixels with at most this alpha (at most 254)
    pub maximum: u8,
    /// Copy color from pixels with at least this alpha
    pub good_minimum: u8,
    /// Take alpha from the source pixel instead of keeping the pixel's own
    pub make_opaque: bool,
    /// Binarize alpha at `threshold` and keep going when no source exists
    pub enable_threshold: bool,
    /// Alpha above this becomes opaque, the rest transparent
    pub threshold: u8,
}

impl Default for HaloOptions {
    fn default() -> Self {
        Self {
            minimum: 1,
            maximum: 254,
            good_minimum: 255,
            make_opaque: false,
            enable_threshold: false,
            threshold: 128,
        }
    }
}

impl HaloOptions {
    /// Set the alpha range of pixels to repair
    pub fn with_range(mut self, minimum: u8, maximum: u8) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Set the alpha a source pixel needs
    pub fn with_good_minimum(mut self, good_minimum: u8) -> Self {
        self.good_minimum = good_minimum;
        self
    }

    /// Take alpha from the source pixel
    pub fn with_make_opaque(mut self, make_opaque: bool) -> Self {
        self.make_opaque = make_opaque;
        self
    }

    /// Binarize alpha at `threshold`
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.enable_threshold = true;
        self.threshold = threshold;
        self
    }
}

/// Result of [`extend`]
#[derive(Debug, Clone, Default)]
pub struct HaloReport {
    /// Pixels recolored from a source pixel
    pub repaired: u64,
    /// Pixels whose alpha was binarized
    pub thresholded: u64,
    /// Deduplicated warnings
    pub diagnostics: Diagnostics,
    /// Set when the pass stopped early because no source pixel exists
    pub stopped: Option<NoOpaqueCandidate>,
}

impl HaloReport {
    /// Whether the pass ran to completion without warnings.
    pub fn is_success(&self) -> bool {
        self.stopped.is_none() && self.diagnostics.is_empty()
    }

    /// Every distinct warning and the stop reason, if any, as one message.
    pub fn error_message(&self) -> Option<String> {
        let parts: Vec<String> = self
            .stopped
            .iter()
            .map(|s| s.to_string())
            .chain(self.diagnostics.summary())
            .collect();
        (!parts.is_empty()).then(|| parts.join("; "))
    }
}

fn to_float(value: u8) -> f64 {
    convert_channel(value as f64, ChannelType::Integer, ChannelType::NormalizedFloat)
}

/// Repair the halo of a normalized float surface with alpha.
///
/// For every pixel with alpha in `[minimum, maximum]`, the nearest pixel
/// with alpha of at least `good_minimum` is found with
/// [`find_opaque_pos`]. If its color differs, it is copied in; alpha stays
/// the pixel's own unless `make_opaque` is set. With thresholding
/// enabled, every pixel's alpha becomes 1.0 if it was above `threshold`
/// and 0.0 otherwise.
///
/// When no source pixel exists and thresholding is off, the pass stops and
/// [`HaloReport::stopped`] says why. Progress is reported after each pixel.
///
/// # Errors
///
/// Returns [`crate::RegionError::UnsupportedPixelFormat`] or
/// [`crate::RegionError::MissingAlphaChannel`] for a surface that is not
/// float with alpha, and propagates pixel access errors.
pub fn extend<S: PixelSurface + ?Sized>(
    surface: &mut S,
    options: &HaloOptions,
    mut progress: Option<&mut dyn Progress>,
) -> RegionResult<HaloReport> {
    let alpha_index = require_float_alpha(&*surface)?;
    let minimum = to_float(options.minimum);
    let maximum = to_float(options.maximum.min(254));
    let good_minimum = to_float(options.good_minimum);
    let threshold = to_float(options.threshold);

    let (w, h) = surface.size();
    let channel_count = surface.channel_count();
    let total = w as f64 * h as f64;
    let query = SearchQuery::new(good_minimum).with_bounds(w, h);
    let mut report = HaloReport::default();
    let mut message_shown = false;

    for y in 0..h {
        for x in 0..w {
            let pixel = surface.get_pixel(x, y)?;
            let alpha = pixel_channel(&pixel, alpha_index, channel_count)?;
            let pos = Point::new(x as i32, y as i32);
            let mut thresholded = false;

            if alpha >= minimum && alpha <= maximum {
                match find_opaque_pos(&*surface, pos, &query)? {
                    SearchOutcome::Found { position, .. } if position == pos => {
                        let entry = report.diagnostics.record(
                            OWN_POSITION,
                            format!(
                                "got own position when searching for a better color than {pixel} \
                                 (alpha >= {good_minimum})"
                            ),
                        );
                        if let Some(p) = progress.as_deref_mut() {
                            p.set_status(&entry.to_string());
                        }
                    }
                    SearchOutcome::Found { position, .. } => {
                        let source = surface.get_pixel_at(position)?;
                        if source != pixel {
                            let mut repaired = source;
                            if !options.make_opaque {
                                repaired.set(alpha_index, alpha);
                            }
                            if options.enable_threshold {
                                repaired.set(alpha_index, binarize(alpha, threshold));
                                thresholded = true;
                                report.thresholded += 1;
                            }
                            log::trace!("halo: {pos} takes color from {position}");
                            surface.put_pixel(x, y, &repaired)?;
                            report.repaired += 1;
                        }
                    }
                    SearchOutcome::NotFound { max_alpha } => {
                        if !message_shown {
                            message_shown = true;
                            if let Some(p) = progress.as_deref_mut() {
                                p.show_message(NO_OPAQUE);
                            }
                        }
                        if !options.enable_threshold {
                            let stop = NoOpaqueCandidate {
                                x: pos.x,
                                y: pos.y,
                                max_alpha,
                            };
                            log::warn!("halo pass stopped: {stop}");
                            report.stopped = Some(stop);
                            return Ok(report);
                        }
                    }
                }
            }

            if options.enable_threshold && !thresholded {
                let binary = pixel.clone().with_channel(alpha_index, binarize(alpha, threshold));
                surface.put_pixel(x, y, &binary)?;
                report.thresholded += 1;
            }

            if let Some(p) = progress.as_deref_mut() {
                let done = y as f64 * w as f64 + x as f64 + 1.0;
                p.progress_update(done / total);
            }
        }
    }

    log::debug!(
        "halo pass on {}x{}: {} repaired, {} thresholded, {} distinct warnings",
        w,
        h,
        report.repaired,
        report.thresholded,
        report.diagnostics.len()
    );
    Ok(report)
}

fn binarize(alpha: f64, threshold: f64) -> f64 {
    if alpha > threshold { 1.0 } else { 0.0 }
}
