//! Pixel values and channel descriptions
//!
//! A [`Pixel`] is an ordered, fixed-length tuple of channel values. The
//! values are kept on the native scale of the surface they came from:
//!
//! - [`ChannelType::Integer`]: whole numbers in `0..=255`
//! - [`ChannelType::NormalizedFloat`]: `0.0..=1.0`, where 255 maps to 1.0
//!
//! [`convert_channel`] is the conversion boundary between the two scales.

use std::fmt;
use std::ops::Index;

/// Largest channel value on the integer scale.
pub const INT_CHANNEL_MAX: f64 = 255.0;

/// Identifier of one channel in a surface layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelId {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
    /// Alpha (opacity)
    Alpha,
    /// Luminance (grayscale)
    Luminance,
}

impl ChannelId {
    /// Single-letter band name (`R`, `G`, `B`, `A`, `L`).
    pub fn as_char(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Alpha => 'A',
            Self::Luminance => 'L',
        }
    }

    /// Parse a single-letter band name.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'A' => Some(Self::Alpha),
            'L' => Some(Self::Luminance),
            _ => None,
        }
    }
}

/// Common channel layouts.
pub mod layout {
    use super::ChannelId;

    /// Grayscale
    pub const L: &[ChannelId] = &[ChannelId::Luminance];
    /// Grayscale with alpha
    pub const LA: &[ChannelId] = &[ChannelId::Luminance, ChannelId::Alpha];
    /// Color without alpha
    pub const RGB: &[ChannelId] = &[ChannelId::Red, ChannelId::Green, ChannelId::Blue];
    /// Color with alpha
    pub const RGBA: &[ChannelId] = &[
        ChannelId::Red,
        ChannelId::Green,
        ChannelId::Blue,
        ChannelId::Alpha,
    ];

    /// Index of the alpha channel within a layout, if any.
    pub fn alpha_index(layout: &[ChannelId]) -> Option<usize> {
        layout.iter().position(|&c| c == ChannelId::Alpha)
    }

    /// Render a layout as band letters, such as `"RGBA"`.
    pub fn band_string(layout: &[ChannelId]) -> String {
        layout.iter().map(|c| c.as_char()).collect()
    }
}

/// Per-channel value representation of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelType {
    /// 8-bit integer channels (0-255)
    #[default]
    Integer,
    /// Normalized floating-point channels (0.0-1.0)
    NormalizedFloat,
}

impl ChannelType {
    /// The value that means 100% on this scale.
    pub fn max_value(self) -> f64 {
        match self {
            Self::Integer => INT_CHANNEL_MAX,
            Self::NormalizedFloat => 1.0,
        }
    }

    /// Whether values on this scale are whole numbers.
    pub fn is_integer(self) -> bool {
        self == Self::Integer
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("integer 0-255"),
            Self::NormalizedFloat => f.write_str("normalized float 0.0-1.0"),
        }
    }
}

/// Convert a single channel value between scales.
///
/// Integer to float divides by 255; float to integer multiplies by 255
/// and rounds to nearest (ties away from zero), so an integer survives
/// a round trip unchanged.
pub fn convert_channel(value: f64, from: ChannelType, to: ChannelType) -> f64 {
    match (from, to) {
        (ChannelType::Integer, ChannelType::NormalizedFloat) => value / INT_CHANNEL_MAX,
        (ChannelType::NormalizedFloat, ChannelType::Integer) => (value * INT_CHANNEL_MAX).round(),
        _ => value,
    }
}

/// An ordered tuple of channel values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pixel {
    channels: Vec<f64>,
}

impl Pixel {
    /// Create a pixel from channel values.
    pub fn new(channels: Vec<f64>) -> Self {
        Self { channels }
    }

    /// Create a pixel by copying channel values.
    pub fn from_slice(channels: &[f64]) -> Self {
        Self {
            channels: channels.to_vec(),
        }
    }

    /// Single-channel pixel.
    pub fn gray(value: f64) -> Self {
        Self {
            channels: vec![value],
        }
    }

    /// Three-channel pixel.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            channels: vec![r, g, b],
        }
    }

    /// Four-channel pixel.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            channels: vec![r, g, b, a],
        }
    }

    /// Four-channel pixel from 8-bit values.
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(r as f64, g as f64, b as f64, a as f64)
    }

    /// A pixel of `len` channels all set to `value`.
    pub fn splat(value: f64, len: usize) -> Self {
        Self {
            channels: vec![value; len],
        }
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether the pixel has no channels.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Channel values.
    pub fn channels(&self) -> &[f64] {
        &self.channels
    }

    /// Get a channel value.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.channels.get(index).copied()
    }

    /// Replace a channel value in place. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: f64) {
        if let Some(c) = self.channels.get_mut(index) {
            *c = value;
        }
    }

    /// Return a copy with one channel replaced.
    pub fn with_channel(mut self, index: usize, value: f64) -> Self {
        self.set(index, value);
        self
    }

    /// Convert every channel between scales.
    pub fn convert(&self, from: ChannelType, to: ChannelType) -> Self {
        Self {
            channels: self
                .channels
                .iter()
                .map(|&v| convert_channel(v, from, to))
                .collect(),
        }
    }

    /// Round and clamp every channel into `0..=255`.
    pub fn to_u8(&self) -> Vec<u8> {
        self.channels
            .iter()
            .map(|&v| v.round().clamp(0.0, INT_CHANNEL_MAX) as u8)
            .collect()
    }

    /// Consume the pixel, returning its channel values.
    pub fn into_channels(self) -> Vec<f64> {
        self.channels
    }
}

impl Index<usize> for Pixel {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.channels[index]
    }
}

impl From<Vec<f64>> for Pixel {
    fn from(channels: Vec<f64>) -> Self {
        Self::new(channels)
    }
}

impl From<&[f64]> for Pixel {
    fn from(channels: &[f64]) -> Self {
        Self::from_slice(channels)
    }
}

impl<const N: usize> From<[u8; N]> for Pixel {
    fn from(channels: [u8; N]) -> Self {
        Self {
            channels: channels.iter().map(|&v| v as f64).collect(),
        }
    }
}

impl<const N: usize> From<[f64; N]> for Pixel {
    fn from(channels: [f64; N]) -> Self {
        Self {
            channels: channels.to_vec(),
        }
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, v) in self.channels.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}

/// A color argument whose shape has already been resolved by the caller.
///
/// Depth conversion accepts either a single numeric value or a full
/// channel tuple.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// A single integer value (taken as channel 0)
    Int(i64),
    /// A single float value on a `0..=scale_max` scale
    Float(f64),
    /// A full channel tuple
    Channels(Pixel),
}

impl From<Pixel> for ColorInput {
    fn from(pixel: Pixel) -> Self {
        Self::Channels(pixel)
    }
}

impl From<&Pixel> for ColorInput {
    fn from(pixel: &Pixel) -> Self {
        Self::Channels(pixel.clone())
    }
}

impl From<i64> for ColorInput {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ColorInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_channel_int_to_float() {
        assert_eq!(
            convert_channel(255.0, ChannelType::Integer, ChannelType::NormalizedFloat),
            1.0
        );
        assert_eq!(
            convert_channel(1.0, ChannelType::Integer, ChannelType::NormalizedFloat),
            1.0 / 255.0
        );
    }

    #[test]
    fn test_convert_channel_float_to_int() {
        assert_eq!(
            convert_channel(1.0, ChannelType::NormalizedFloat, ChannelType::Integer),
            255.0
        );
        assert_eq!(
            convert_channel(0.5, ChannelType::NormalizedFloat, ChannelType::Integer),
            128.0
        );
    }

    #[test]
    fn test_convert_channel_roundtrip() {
        for v in 0..=255u32 {
            let f = convert_channel(v as f64, ChannelType::Integer, ChannelType::NormalizedFloat);
            let back = convert_channel(f, ChannelType::NormalizedFloat, ChannelType::Integer);
            assert_eq!(back, v as f64, "roundtrip failed for {v}");
        }
    }

    #[test]
    fn test_pixel_accessors() {
        let mut p = Pixel::rgba8(10, 20, 30, 255);
        assert_eq!(p.len(), 4);
        assert_eq!(p.get(2), Some(30.0));
        assert_eq!(p.get(4), None);
        p.set(0, 11.0);
        assert_eq!(p[0], 11.0);
        assert_eq!(p.to_u8(), vec![11, 20, 30, 255]);
        assert_eq!(p.to_string(), "(11, 20, 30, 255)");
    }

    #[test]
    fn test_layout_helpers() {
        assert_eq!(layout::alpha_index(layout::RGBA), Some(3));
        assert_eq!(layout::alpha_index(layout::LA), Some(1));
        assert_eq!(layout::alpha_index(layout::RGB), None);
        assert_eq!(layout::band_string(layout::RGBA), "RGBA");
        assert_eq!(ChannelId::from_char('l'), Some(ChannelId::Luminance));
        assert_eq!(ChannelId::from_char('x'), None);
    }
}
