//! Channel-count conversion
//!
//! [`convert_depth`] grows or shrinks a color to a requested number of
//! channels:
//!
//! - Added trailing channels are filled with the maximum value, so an
//!   added alpha channel is fully opaque.
//! - Shrinking to one channel averages channels 0-2 (unweighted) and
//!   ignores alpha, flattening color to luminance.
//! - Any other shrink keeps the leading channels verbatim.
//!
//! A scalar float is first clamped to `[0, scale_max]` and mapped onto the
//! 0-255 scale.

use crate::error::{ColorError, ColorResult};
use channeltinker_core::{ColorInput, INT_CHANNEL_MAX, Pixel};

/// Convert a color to `channel_count` channels.
///
/// # Arguments
///
/// * `color` - A scalar or a channel tuple
/// * `channel_count` - Number of channels in the result
/// * `scale_max` - The value that means 100% for float scalars and for the
///   channels of a tuple
///
/// Scalars land on the 0-255 scale, so their padding is 255; a tuple keeps
/// its own scale and is padded with `scale_max`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidChannelCount`] if `channel_count` is 0, or
/// [`ColorError::InvalidParameters`] if `scale_max` is not positive.
pub fn convert_depth(
    color: &ColorInput,
    channel_count: usize,
    scale_max: f64,
) -> ColorResult<Pixel> {
    if channel_count == 0 {
        return Err(ColorError::InvalidChannelCount(channel_count));
    }
    if scale_max.is_nan() || scale_max <= 0.0 {
        return Err(ColorError::InvalidParameters(format!(
            "scale_max must be positive, got {scale_max}"
        )));
    }

    let (channels, filler) = match color {
        ColorInput::Int(v) => (vec![*v as f64], INT_CHANNEL_MAX),
        ColorInput::Float(v) => {
            let v = v.clamp(0.0, scale_max);
            (vec![(v / scale_max * INT_CHANNEL_MAX).round()], INT_CHANNEL_MAX)
        }
        ColorInput::Channels(p) => (p.channels().to_vec(), scale_max),
    };

    let len = channels.len();
    let converted = if channel_count > len {
        let mut padded = channels;
        padded.resize(channel_count, filler);
        padded
    } else if channel_count < len {
        if channel_count == 1 && len >= 3 {
            let mean = (channels[0] + channels[1] + channels[2]) / 3.0;
            vec![mean.round()]
        } else {
            channels[..channel_count].to_vec()
        }
    } else {
        channels
    };
    Ok(Pixel::new(converted))
}
