//! [`PixelSurface`] adapters for `image` crate buffers
//!
//! Available with the `image` feature. Only in-memory buffers are
//! adapted; loading and saving files stays with the host.
//!
//! - [`image::RgbaImage`]: integer channels (0-255)
//! - [`image::Rgba32FImage`]: normalized float channels (0.0-1.0)

use crate::error::{Error, Result};
use crate::pixel::{ChannelId, ChannelType, Pixel, layout};
use crate::surface::{PixelSurface, check_bounds};
use image::{Rgba, Rgba32FImage, RgbaImage};

fn check_rgba(color: &Pixel) -> Result<()> {
    if color.len() != 4 {
        return Err(Error::ChannelCountMismatch {
            expected: 4,
            actual: color.len(),
        });
    }
    Ok(())
}

impl PixelSurface for RgbaImage {
    fn size(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Result<Pixel> {
        check_bounds(x, y, self.dimensions())?;
        let Rgba(c) = *image::ImageBuffer::get_pixel(self, x, y);
        Ok(Pixel::from(c))
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: &Pixel) -> Result<()> {
        check_bounds(x, y, self.dimensions())?;
        check_rgba(color)?;
        let v = color.to_u8();
        image::ImageBuffer::put_pixel(self, x, y, Rgba([v[0], v[1], v[2], v[3]]));
        Ok(())
    }

    fn channel_layout(&self) -> &[ChannelId] {
        layout::RGBA
    }

    fn channel_type(&self) -> ChannelType {
        ChannelType::Integer
    }
}

impl PixelSurface for Rgba32FImage {
    fn size(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Result<Pixel> {
        check_bounds(x, y, self.dimensions())?;
        let Rgba(c) = *image::ImageBuffer::get_pixel(self, x, y);
        Ok(Pixel::new(c.iter().map(|&v| v as f64).collect()))
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: &Pixel) -> Result<()> {
        check_bounds(x, y, self.dimensions())?;
        check_rgba(color)?;
        let c = color.channels();
        image::ImageBuffer::put_pixel(
            self,
            x,
            y,
            Rgba([c[0] as f32, c[1] as f32, c[2] as f32, c[3] as f32]),
        );
        Ok(())
    }

    fn channel_layout(&self) -> &[ChannelId] {
        layout::RGBA
    }

    fn channel_type(&self) -> ChannelType {
        ChannelType::NormalizedFloat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_image_surface() {
        let mut img = RgbaImage::new(3, 2);
        PixelSurface::put_pixel(&mut img, 2, 1, &Pixel::rgba8(1, 2, 3, 4)).unwrap();
        assert_eq!(PixelSurface::size(&img), (3, 2));
        assert_eq!(
            PixelSurface::get_pixel(&img, 2, 1).unwrap(),
            Pixel::rgba8(1, 2, 3, 4)
        );
        assert!(PixelSurface::get_pixel(&img, 3, 0).is_err());
        assert_eq!(img.channel_type(), ChannelType::Integer);
    }

    #[test]
    fn test_rgba32f_image_surface() {
        let mut img = Rgba32FImage::new(2, 2);
        PixelSurface::put_pixel(&mut img, 0, 1, &Pixel::rgba(0.5, 0.25, 1.0, 1.0)).unwrap();
        assert_eq!(
            PixelSurface::get_pixel(&img, 0, 1).unwrap(),
            Pixel::rgba(0.5, 0.25, 1.0, 1.0)
        );
        assert!(PixelSurface::put_pixel(&mut img, 0, 0, &Pixel::gray(0.0)).is_err());
        assert_eq!(img.channel_type(), ChannelType::NormalizedFloat);
    }
}
