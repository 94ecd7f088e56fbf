//! Whole-image comparison
//!
//! [`diff_images`] walks every position of a target canvas, scores each
//! pixel pair with [`diff_color`], accumulates a mean difference and
//! optionally paints a visualization:
//!
//! - Positions only inside `head` get the addition marker (green).
//! - Positions only inside `base` get the deletion marker (red).
//! - Positions inside both are painted gray in proportion to their
//!   difference, and left alone when identical.
//!
//! [`gen_diff_image`] is the convenience entry point that normalizes two
//! arbitrary surfaces and allocates the visualization itself.

use crate::depth::convert_depth;
use crate::diff::{DiffColorOptions, diff_color};
use crate::error::{ColorError, ColorResult};
use channeltinker_core::{
    Canvas, ChannelType, ColorInput, INT_CHANNEL_MAX, Pixel, PixelSurface, layout,
};

/// Options for [`diff_images`]
#[derive(Debug, Clone, PartialEq)]
pub struct DiffOptions {
    /// Background color of the visualization; never used as a marker
    pub nochange_color: Pixel,
    /// The value that means 100% for a channel
    pub scale_max: f64,
    /// Number of leading channels compared per pixel
    pub max_count: usize,
    /// Count pixels transparent on both sides as fully different
    pub clear_in_stats: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            nochange_color: Pixel::rgba8(0, 0, 0, 255),
            scale_max: INT_CHANNEL_MAX,
            max_count: 3,
            clear_in_stats: false,
        }
    }
}

impl DiffOptions {
    /// Set the background color
    pub fn with_nochange_color(mut self, color: Pixel) -> Self {
        self.nochange_color = color;
        self
    }

    /// Set the value that means 100%
    pub fn with_scale_max(mut self, scale_max: f64) -> Self {
        self.scale_max = scale_max;
        self
    }

    /// Set how many leading channels are compared
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    /// Count pixels that are transparent on both sides
    pub fn with_clear_in_stats(mut self, clear_in_stats: bool) -> Self {
        self.clear_in_stats = clear_in_stats;
        self
    }
}

/// Size information for one compared surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceInfo {
    /// `(width, height)`
    pub size: (u32, u32),
}

impl SurfaceInfo {
    /// Aspect ratio (width / height), `None` for a zero-height surface.
    pub fn ratio(&self) -> Option<f64> {
        let (w, h) = self.size;
        (h != 0).then(|| w as f64 / h as f64)
    }
}

/// Result of [`diff_images`]
#[derive(Debug, Clone, PartialEq)]
pub struct DiffResult {
    /// `Some(true)` if every pixel pair is identical, `Some(false)` if any
    /// pair differs in any channel or a position lies in only one surface,
    /// `None` if no position was visited
    pub same: Option<bool>,
    /// The base surface
    pub base: SurfaceInfo,
    /// The head surface
    pub head: SurfaceInfo,
    /// Mean difference over the counted pixels, `None` if none counted
    pub mean: Option<f64>,
    /// Number of pixels counted toward the mean
    pub compared: u64,
    /// Number of positions painted with a non-background color
    pub changed: u64,
}

impl DiffResult {
    /// Mean difference in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::NoEligiblePixels`] if no pixel was counted.
    pub fn mean_diff(&self) -> ColorResult<f64> {
        self.mean.ok_or(ColorError::NoEligiblePixels)
    }
}

/// Compare two surfaces over a `diff_size` canvas.
///
/// Both surfaces must have the same channel count (normalize them first,
/// e.g. with [`Canvas::from_surface_rgba`]). When `diff` is given, only
/// positions whose color differs from `options.nochange_color` are
/// written, so the caller should pre-fill it with that color.
///
/// Statistics: a pair that is opaque on both sides adds `|d|`; a pair
/// with exactly one transparent side adds 1.0; a pair transparent on both
/// sides is skipped unless `clear_in_stats` is set, in which case it adds
/// 1.0. Positions outside one surface add 1.0. Positions outside both are
/// neither painted nor counted.
///
/// # Errors
///
/// - [`ColorError::CanvasTooSmall`] if `diff_size` does not cover both
///   surfaces
/// - [`ColorError::ChannelCountMismatch`] if the surfaces differ in
///   channel count
/// - [`ColorError::Core`] if reading or writing a pixel fails
pub fn diff_images<B, H>(
    base: &B,
    head: &H,
    diff_size: (u32, u32),
    mut diff: Option<&mut dyn PixelSurface>,
    options: &DiffOptions,
) -> ColorResult<DiffResult>
where
    B: PixelSurface + ?Sized,
    H: PixelSurface + ?Sized,
{
    let base_size = base.size();
    let head_size = head.size();
    let (w, h) = diff_size;
    let needed = (base_size.0.max(head_size.0), base_size.1.max(head_size.1));
    if w < needed.0 || h < needed.1 {
        return Err(ColorError::CanvasTooSmall {
            width: w,
            height: h,
            needed_width: needed.0,
            needed_height: needed.1,
        });
    }
    if base.channel_count() != head.channel_count() {
        return Err(ColorError::ChannelCountMismatch {
            base: base.channel_count(),
            head: head.channel_count(),
        });
    }
    let nochange = &options.nochange_color;
    if nochange.is_empty() {
        return Err(ColorError::InvalidParameters(
            "nochange_color must have at least one channel".to_string(),
        ));
    }

    let m = options.scale_max;
    let integer = base.channel_type().is_integer();
    let half = if integer { (m / 2.0).trunc() } else { m / 2.0 };
    let add_color = pick_marker(
        &[
            Pixel::rgba(0.0, m, 0.0, m),
            Pixel::rgba(0.0, half, 0.0, m),
            Pixel::rgba(m, m, 0.0, m),
        ],
        nochange,
        m,
    )?;
    let del_color = pick_marker(
        &[
            Pixel::rgba(m, 0.0, 0.0, m),
            Pixel::rgba(half, 0.0, 0.0, m),
            Pixel::rgba(m, 0.0, m, m),
        ],
        nochange,
        m,
    )?;

    let color_options = DiffColorOptions::default()
        .with_scale_max(m)
        .with_max_count(options.max_count);
    let base_alpha = base.alpha_index();
    let head_alpha = head.alpha_index();
    let pix_len = nochange.len();

    let mut result = DiffResult {
        same: None,
        base: SurfaceInfo { size: base_size },
        head: SurfaceInfo { size: head_size },
        mean: None,
        compared: 0,
        changed: 0,
    };
    let mut total = 0.0;

    for y in 0..h {
        for x in 0..w {
            let in_base = x < base_size.0 && y < base_size.1;
            let in_head = x < head_size.0 && y < head_size.1;
            let (color, differs) = match (in_base, in_head) {
                (false, false) => continue,
                (false, true) => {
                    total += 1.0;
                    result.compared += 1;
                    (add_color.clone(), true)
                }
                (true, false) => {
                    total += 1.0;
                    result.compared += 1;
                    (del_color.clone(), true)
                }
                (true, true) => {
                    let base_px = base.get_pixel(x, y)?;
                    let head_px = head.get_pixel(x, y)?;
                    let d = diff_color(&base_px, &head_px, &color_options)?;

                    let base_opaque = is_opaque(&base_px, base_alpha);
                    let head_opaque = is_opaque(&head_px, head_alpha);
                    match (base_opaque, head_opaque) {
                        (true, true) => {
                            total += d.abs();
                            result.compared += 1;
                        }
                        (false, false) if !options.clear_in_stats => {}
                        _ => {
                            total += 1.0;
                            result.compared += 1;
                        }
                    }

                    let color = if d == 0.0 {
                        nochange.clone()
                    } else {
                        let mut v = m * d.abs();
                        if integer {
                            v = v.trunc();
                        }
                        let gray_len = pix_len.min(3);
                        let mut channels = vec![v; gray_len];
                        channels.resize(pix_len, m);
                        Pixel::new(channels)
                    };
                    (color, base_px != head_px)
                }
            };

            // Unscored channels and truncated grays can hide a difference
            let painted = color != *nochange;
            if painted || differs {
                result.same = Some(false);
            } else if result.same.is_none() {
                result.same = Some(true);
            }
            if painted {
                result.changed += 1;
                if let Some(surface) = diff.as_deref_mut() {
                    surface.put_pixel(x, y, &color)?;
                }
            }
        }
    }

    if result.compared > 0 {
        result.mean = Some(total / result.compared as f64);
    }
    log::debug!(
        "diff_images: {}x{} canvas, {} counted, {} changed, mean {:?}",
        w,
        h,
        result.compared,
        result.changed,
        result.mean
    );
    Ok(result)
}

fn is_opaque(pixel: &Pixel, alpha: Option<usize>) -> bool {
    alpha.and_then(|i| pixel.get(i)).is_none_or(|a| a > 0.0)
}

/// First candidate (converted to the background's channel count) that
/// differs from the background, or the last candidate.
fn pick_marker(candidates: &[Pixel], nochange: &Pixel, scale_max: f64) -> ColorResult<Pixel> {
    let pix_len = nochange.len();
    let mut converted = Vec::with_capacity(candidates.len());
    for (i, candidate) in candidates.iter().enumerate() {
        let color = if pix_len == 1 && i == 0 {
            Pixel::gray(scale_max)
        } else {
            convert_depth(&ColorInput::from(candidate), pix_len, scale_max)?
        };
        if color != *nochange {
            return Ok(color);
        }
        converted.push(color);
    }
    converted
        .pop()
        .ok_or_else(|| ColorError::InvalidParameters("no marker candidates".to_string()))
}

/// Compare any two surfaces and render the visualization.
///
/// Both surfaces are normalized to RGBA in the base surface's channel
/// type. The visualization covers the per-axis maximum of both sizes and
/// starts filled with opaque black.
///
/// # Errors
///
/// Returns [`ColorError::Core`] if a surface cannot be normalized to RGBA,
/// or any error of [`diff_images`].
pub fn gen_diff_image<B, H>(base: &B, head: &H) -> ColorResult<(DiffResult, Canvas)>
where
    B: PixelSurface + ?Sized,
    H: PixelSurface + ?Sized,
{
    let channel_type = base.channel_type();
    let base = Canvas::from_surface_rgba(base)?;
    let head = Canvas::from_surface_rgba(head)?.to_channel_type(channel_type);

    let (bw, bh) = base.size();
    let (hw, hh) = head.size();
    let size = (bw.max(hw), bh.max(hh));
    let max = channel_type.max_value();
    let nochange = default_nochange_color(channel_type);

    let mut canvas = Canvas::filled(size.0, size.1, layout::RGBA, channel_type, &nochange)?;
    let options = DiffOptions::default()
        .with_scale_max(max)
        .with_nochange_color(nochange);
    let result = diff_images(
        &base,
        &head,
        size,
        Some(&mut canvas as &mut dyn PixelSurface),
        &options,
    )?;
    Ok((result, canvas))
}

/// Opaque black in `channel_type`'s scale.
pub fn default_nochange_color(channel_type: ChannelType) -> Pixel {
    let max = channel_type.max_value();
    Pixel::rgba(0.0, 0.0, 0.0, max)
}
