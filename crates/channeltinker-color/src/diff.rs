//! Per-pixel difference scoring
//!
//! [`diff_color`] compares selected channels of two pixels and returns a
//! score in `[-1, 1]`: 0 means identical on every compared channel, and
//! a negative signed score means `base` measured brighter than `head`
//! on the summed channels.

use crate::depth::convert_depth;
use crate::error::{ColorError, ColorResult};
use channeltinker_core::{ColorInput, INT_CHANNEL_MAX, Pixel};

/// Options for [`diff_color`]
#[derive(Debug, Clone, PartialEq)]
pub struct DiffColorOptions {
    /// Convert the shorter pixel to the longer one's channel count when
    /// lengths differ, instead of failing
    pub enable_convert: bool,
    /// The value that means 100% for a channel
    pub scale_max: f64,
    /// Channels of `base` to compare (defaults to `0..max_count`)
    pub base_indices: Option<Vec<usize>>,
    /// Channels of `head` to compare (defaults to `0..max_count`)
    pub head_indices: Option<Vec<usize>>,
    /// Sum absolute differences (true) or signed `head - base` differences (false)
    pub real_diff: bool,
    /// Compare at most this many channels when indices are generated
    pub max_count: usize,
}

impl Default for DiffColorOptions {
    fn default() -> Self {
        Self {
            enable_convert: false,
            scale_max: INT_CHANNEL_MAX,
            base_indices: None,
            head_indices: None,
            real_diff: true,
            max_count: 3,
        }
    }
}

impl DiffColorOptions {
    /// Set the value that means 100%
    pub fn with_scale_max(mut self, scale_max: f64) -> Self {
        self.scale_max = scale_max;
        self
    }

    /// Allow channel-count conversion
    pub fn with_convert(mut self, enable_convert: bool) -> Self {
        self.enable_convert = enable_convert;
        self
    }

    /// Choose absolute (true) or signed (false) accumulation
    pub fn with_real_diff(mut self, real_diff: bool) -> Self {
        self.real_diff = real_diff;
        self
    }

    /// Limit generated indices to this many channels
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    /// Compare explicit channel indices
    pub fn with_indices(mut self, base: Vec<usize>, head: Vec<usize>) -> Self {
        self.base_indices = Some(base);
        self.head_indices = Some(head);
        self
    }
}

/// Compare two pixels.
///
/// The accumulated difference over the compared channels is divided by
/// `scale_max * channels_compared`. Comparing no channels scores 0.
///
/// # Errors
///
/// - [`ColorError::ChannelCountMismatch`] if the pixel lengths differ and
///   `enable_convert` is off
/// - [`ColorError::IndexCountMismatch`] if the index lists differ in length
/// - [`ColorError::ChannelIndexOutOfRange`] if an index is past a pixel's end
pub fn diff_color(base: &Pixel, head: &Pixel, options: &DiffColorOptions) -> ColorResult<f64> {
    if options.scale_max.is_nan() || options.scale_max <= 0.0 {
        return Err(ColorError::InvalidParameters(format!(
            "scale_max must be positive, got {}",
            options.scale_max
        )));
    }

    let (base, head) = if base.len() == head.len() {
        (base.clone(), head.clone())
    } else if options.enable_convert {
        if base.len() > head.len() {
            let head = convert_depth(&ColorInput::from(head), base.len(), options.scale_max)?;
            (base.clone(), head)
        } else {
            let base = convert_depth(&ColorInput::from(base), head.len(), options.scale_max)?;
            (base, head.clone())
        }
    } else {
        return Err(ColorError::ChannelCountMismatch {
            base: base.len(),
            head: head.len(),
        });
    };

    let base_indices = resolve_indices(&options.base_indices, base.len(), options.max_count);
    let head_indices = resolve_indices(&options.head_indices, head.len(), options.max_count);
    if base_indices.len() != head_indices.len() {
        return Err(ColorError::IndexCountMismatch {
            base: base_indices.len(),
            head: head_indices.len(),
        });
    }
    if base_indices.is_empty() {
        return Ok(0.0);
    }

    let mut diff = 0.0;
    for (&bi, &hi) in base_indices.iter().zip(&head_indices) {
        let b = channel(&base, bi)?;
        let h = channel(&head, hi)?;
        if b != h {
            diff += if options.real_diff {
                (h - b).abs()
            } else {
                h - b
            };
        }
    }
    Ok(diff / (base_indices.len() as f64 * options.scale_max))
}

fn resolve_indices(explicit: &Option<Vec<usize>>, len: usize, max_count: usize) -> Vec<usize> {
    match explicit {
        Some(indices) => indices.clone(),
        None => (0..len.min(max_count)).collect(),
    }
}

fn channel(pixel: &Pixel, index: usize) -> ColorResult<f64> {
    pixel.get(index).ok_or(ColorError::ChannelIndexOutOfRange {
        index,
        len: pixel.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed() -> DiffColorOptions {
        DiffColorOptions::default().with_real_diff(false)
    }

    #[test]
    fn test_identical_is_zero() {
        let p = Pixel::rgba8(12, 200, 7, 255);
        assert_eq!(diff_color(&p, &p, &DiffColorOptions::default()).unwrap(), 0.0);
        assert_eq!(diff_color(&p, &p, &signed()).unwrap(), 0.0);
    }

    #[test]
    fn test_black_vs_white() {
        let black = Pixel::rgba8(0, 0, 0, 255);
        let white = Pixel::rgba8(255, 255, 255, 255);
        let opts = DiffColorOptions::default();
        assert_eq!(diff_color(&black, &white, &opts).unwrap(), 1.0);
        // Signed: negative when base is brighter
        assert_eq!(diff_color(&white, &black, &signed()).unwrap(), -1.0);
        assert_eq!(diff_color(&black, &white, &signed()).unwrap(), 1.0);
    }

    #[test]
    fn test_signed_can_cancel() {
        let a = Pixel::rgb(100.0, 0.0, 0.0);
        let b = Pixel::rgb(0.0, 100.0, 0.0);
        assert_eq!(diff_color(&a, &b, &signed()).unwrap(), 0.0);
        let d = diff_color(&a, &b, &DiffColorOptions::default()).unwrap();
        assert!((d - 200.0 / (3.0 * 255.0)).abs() < 1e-12);
    }

    #[test]
    fn test_max_count_limits_channels() {
        let a = Pixel::rgba8(0, 0, 0, 0);
        let b = Pixel::rgba8(0, 0, 0, 255);
        assert_eq!(diff_color(&a, &b, &DiffColorOptions::default()).unwrap(), 0.0);
        let all = DiffColorOptions::default().with_max_count(4);
        assert_eq!(diff_color(&a, &b, &all).unwrap(), 0.25);
    }

    #[test]
    fn test_explicit_indices() {
        // Alpha first: compare channels 1..=3 only
        let a = Pixel::new(vec![0.0, 10.0, 20.0, 30.0]);
        let b = Pixel::new(vec![255.0, 10.0, 20.0, 30.0]);
        let opts = DiffColorOptions::default().with_indices(vec![1, 2, 3], vec![1, 2, 3]);
        assert_eq!(diff_color(&a, &b, &opts).unwrap(), 0.0);

        // Different channels of each side
        let c = Pixel::rgb(5.0, 0.0, 0.0);
        let d = Pixel::rgb(0.0, 0.0, 5.0);
        let opts = DiffColorOptions::default().with_indices(vec![0], vec![2]);
        assert_eq!(diff_color(&c, &d, &opts).unwrap(), 0.0);
    }

    #[test]
    fn test_index_count_mismatch() {
        let p = Pixel::rgb(1.0, 2.0, 3.0);
        let opts = DiffColorOptions::default().with_indices(vec![0, 1], vec![0]);
        assert!(matches!(
            diff_color(&p, &p, &opts),
            Err(ColorError::IndexCountMismatch { base: 2, head: 1 })
        ));
        let opts = DiffColorOptions::default().with_indices(vec![5], vec![0]);
        assert!(matches!(
            diff_color(&p, &p, &opts),
            Err(ColorError::ChannelIndexOutOfRange { index: 5, len: 3 })
        ));
    }

    #[test]
    fn test_channel_count_mismatch_and_convert() {
        let rgb = Pixel::rgb(10.0, 20.0, 30.0);
        let rgba = Pixel::rgba(10.0, 20.0, 30.0, 255.0);
        assert!(matches!(
            diff_color(&rgb, &rgba, &DiffColorOptions::default()),
            Err(ColorError::ChannelCountMismatch { base: 3, head: 4 })
        ));
        let opts = DiffColorOptions::default().with_convert(true).with_max_count(4);
        assert_eq!(diff_color(&rgb, &rgba, &opts).unwrap(), 0.0);
    }

    #[test]
    fn test_antisymmetry_and_symmetry() {
        let samples = [
            Pixel::rgba8(0, 0, 0, 255),
            Pixel::rgba8(255, 128, 3, 255),
            Pixel::rgba8(17, 99, 250, 10),
            Pixel::rgba8(200, 200, 200, 0),
        ];
        for a in &samples {
            for b in &samples {
                let s_ab = diff_color(a, b, &signed()).unwrap();
                let s_ba = diff_color(b, a, &signed()).unwrap();
                assert_eq!(s_ab, -s_ba);
                assert!((-1.0..=1.0).contains(&s_ab));
                let r_ab = diff_color(a, b, &DiffColorOptions::default()).unwrap();
                let r_ba = diff_color(b, a, &DiffColorOptions::default()).unwrap();
                assert_eq!(r_ab, r_ba);
            }
        }
    }
}
