//! In-memory pixel surface
//!
//! [`Canvas`] owns its pixel data and implements [`PixelSurface`] for any
//! channel layout and channel type. Hosts without their own image object
//! can use it directly; it is also the surface that diff visualizations
//! are rendered into.

use crate::error::{Error, Result};
use crate::pixel::{ChannelId, ChannelType, Pixel, layout};
use crate::surface::{PixelSurface, check_bounds, pixel_channel};

/// Owned, row-major pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    layout: Vec<ChannelId>,
    channel_type: ChannelType,
    data: Vec<f64>,
}

impl Canvas {
    /// Create a canvas with every channel set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `layout` is empty, or
    /// [`Error::InvalidDimension`] if the buffer size overflows.
    pub fn new(
        width: u32,
        height: u32,
        layout: &[ChannelId],
        channel_type: ChannelType,
    ) -> Result<Self> {
        if layout.is_empty() {
            return Err(Error::InvalidParameter(
                "channel layout must not be empty".to_string(),
            ));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(layout.len()))
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            layout: layout.to_vec(),
            channel_type,
            data: vec![0.0; len],
        })
    }

    /// Create a canvas with every pixel set to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelCountMismatch`] if `color` does not match
    /// `layout`.
    pub fn filled(
        width: u32,
        height: u32,
        layout: &[ChannelId],
        channel_type: ChannelType,
        color: &Pixel,
    ) -> Result<Self> {
        let mut canvas = Self::new(width, height, layout, channel_type)?;
        canvas.fill(color)?;
        Ok(canvas)
    }

    /// Create a transparent 8-bit RGBA canvas.
    pub fn rgba8(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, layout::RGBA, ChannelType::Integer)
    }

    /// Create a transparent normalized-float RGBA canvas.
    pub fn rgba_float(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, layout::RGBA, ChannelType::NormalizedFloat)
    }

    /// Create a canvas from row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the pixel count is not
    /// `width * height`, or [`Error::ChannelCountMismatch`] for a pixel of
    /// the wrong length.
    pub fn from_pixels(
        width: u32,
        height: u32,
        layout: &[ChannelId],
        channel_type: ChannelType,
        pixels: &[Pixel],
    ) -> Result<Self> {
        let mut canvas = Self::new(width, height, layout, channel_type)?;
        if pixels.len() != width as usize * height as usize {
            return Err(Error::InvalidDimension { width, height });
        }
        for (i, p) in pixels.iter().enumerate() {
            let x = (i % width as usize) as u32;
            let y = (i / width as usize) as u32;
            canvas.put_pixel(x, y, p)?;
        }
        Ok(canvas)
    }

    /// Copy any surface into an RGBA canvas of the same channel type.
    ///
    /// Grayscale is replicated into R, G and B; a missing alpha channel
    /// becomes fully opaque.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the layout has neither RGB
    /// nor luminance channels, or [`Error::ChannelCountMismatch`] if the
    /// surface returns a pixel shorter than its layout.
    pub fn from_surface_rgba<S: PixelSurface + ?Sized>(surface: &S) -> Result<Self> {
        let src_layout = surface.channel_layout();
        let find = |id: ChannelId| src_layout.iter().position(|&c| c == id);
        let color_indices = match (
            find(ChannelId::Red),
            find(ChannelId::Green),
            find(ChannelId::Blue),
            find(ChannelId::Luminance),
        ) {
            (Some(r), Some(g), Some(b), _) => [r, g, b],
            (_, _, _, Some(l)) => [l, l, l],
            _ => {
                return Err(Error::InvalidParameter(format!(
                    "cannot normalize layout {} to RGBA",
                    layout::band_string(src_layout)
                )));
            }
        };
        let alpha = find(ChannelId::Alpha);
        let channel_type = surface.channel_type();
        let opaque = channel_type.max_value();

        let (width, height) = surface.size();
        let expected = src_layout.len();
        let mut canvas = Self::new(width, height, layout::RGBA, channel_type)?;
        for y in 0..height {
            for x in 0..width {
                let src = surface.get_pixel(x, y)?;
                let channel = |i: usize| pixel_channel(&src, i, expected);
                let a = match alpha {
                    Some(i) => channel(i)?,
                    None => opaque,
                };
                let [r, g, b] = color_indices;
                let rgba = Pixel::rgba(channel(r)?, channel(g)?, channel(b)?, a);
                canvas.put_pixel(x, y, &rgba)?;
            }
        }
        Ok(canvas)
    }

    /// Return a copy with every channel converted to another scale.
    pub fn to_channel_type(&self, channel_type: ChannelType) -> Self {
        let from = self.channel_type;
        Self {
            width: self.width,
            height: self.height,
            layout: self.layout.clone(),
            channel_type,
            data: self
                .data
                .iter()
                .map(|&v| crate::pixel::convert_channel(v, from, channel_type))
                .collect(),
        }
    }

    /// Set every pixel to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelCountMismatch`] if `color` does not match
    /// the layout.
    pub fn fill(&mut self, color: &Pixel) -> Result<()> {
        self.check_len(color)?;
        for chunk in self.data.chunks_exact_mut(self.layout.len()) {
            chunk.copy_from_slice(color.channels());
        }
        Ok(())
    }

    /// Raw channel data, row-major.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    fn check_len(&self, color: &Pixel) -> Result<()> {
        if color.len() != self.layout.len() {
            return Err(Error::ChannelCountMismatch {
                expected: self.layout.len(),
                actual: color.len(),
            });
        }
        Ok(())
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.layout.len()
    }
}

impl PixelSurface for Canvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Result<Pixel> {
        check_bounds(x, y, self.size())?;
        let start = self.offset(x, y);
        Ok(Pixel::from_slice(
            &self.data[start..start + self.layout.len()],
        ))
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: &Pixel) -> Result<()> {
        check_bounds(x, y, self.size())?;
        self.check_len(color)?;
        let start = self.offset(x, y);
        let n = self.layout.len();
        self.data[start..start + n].copy_from_slice(color.channels());
        Ok(())
    }

    fn channel_layout(&self) -> &[ChannelId] {
        &self.layout
    }

    fn channel_type(&self) -> ChannelType {
        self.channel_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_zeroed() {
        let canvas = Canvas::rgba8(3, 2).unwrap();
        assert_eq!(canvas.size(), (3, 2));
        assert_eq!(canvas.channel_count(), 4);
        assert_eq!(canvas.alpha_index(), Some(3));
        assert_eq!(canvas.get_pixel(2, 1).unwrap(), Pixel::rgba8(0, 0, 0, 0));
    }

    #[test]
    fn test_put_get_roundtrip() {
        let mut canvas = Canvas::rgba8(4, 4).unwrap();
        let red = Pixel::rgba8(255, 0, 0, 255);
        canvas.put_pixel(1, 2, &red).unwrap();
        assert_eq!(canvas.get_pixel(1, 2).unwrap(), red);
        assert_eq!(canvas.get_pixel(2, 1).unwrap(), Pixel::rgba8(0, 0, 0, 0));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut canvas = Canvas::rgba8(4, 4).unwrap();
        assert!(matches!(
            canvas.get_pixel(4, 0),
            Err(Error::IndexOutOfBounds { x: 4, y: 0, .. })
        ));
        assert!(canvas.put_pixel(0, 4, &Pixel::rgba8(0, 0, 0, 0)).is_err());
        assert!(canvas.get_pixel_at(crate::Point::new(-1, 0)).is_err());
    }

    #[test]
    fn test_wrong_channel_count_is_rejected() {
        let mut canvas = Canvas::rgba8(2, 2).unwrap();
        assert!(matches!(
            canvas.put_pixel(0, 0, &Pixel::rgb(1.0, 2.0, 3.0)),
            Err(Error::ChannelCountMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        assert!(Canvas::new(2, 2, &[], ChannelType::Integer).is_err());
    }

    #[test]
    fn test_from_surface_rgba_gray() {
        let gray = Canvas::filled(
            2,
            2,
            layout::L,
            ChannelType::Integer,
            &Pixel::gray(77.0),
        )
        .unwrap();
        let rgba = Canvas::from_surface_rgba(&gray).unwrap();
        assert_eq!(rgba.channel_layout(), layout::RGBA);
        assert_eq!(rgba.get_pixel(1, 1).unwrap(), Pixel::rgba8(77, 77, 77, 255));
    }

    #[test]
    fn test_to_channel_type() {
        let canvas = Canvas::filled(
            1,
            1,
            layout::RGBA,
            ChannelType::Integer,
            &Pixel::rgba8(255, 0, 51, 255),
        )
        .unwrap();
        let float = canvas.to_channel_type(ChannelType::NormalizedFloat);
        assert_eq!(float.channel_type(), ChannelType::NormalizedFloat);
        assert_eq!(float.get_pixel(0, 0).unwrap(), Pixel::rgba(1.0, 0.0, 0.2, 1.0));
        let back = float.to_channel_type(ChannelType::Integer);
        assert_eq!(back, canvas);
    }
}
