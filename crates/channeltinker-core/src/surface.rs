//! The pixel surface capability
//!
//! [`PixelSurface`] is the seam between the algorithms and whatever image
//! backend a host uses. An implementation only reports its size and
//! channel description and reads or writes single pixels; no algorithm
//! lives behind it.
//!
//! Implementations must reject positions outside `[0, width) x [0, height)`
//! with [`Error::IndexOutOfBounds`] rather than clamping them.

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::pixel::{ChannelId, ChannelType, Pixel, layout};

/// Minimal contract a host image object must satisfy.
pub trait PixelSurface {
    /// Surface size as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Read the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the surface.
    fn get_pixel(&self, x: u32, y: u32) -> Result<Pixel>;

    /// Write the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the surface, or
    /// [`Error::ChannelCountMismatch`] if `color` does not match the layout.
    fn put_pixel(&mut self, x: u32, y: u32, color: &Pixel) -> Result<()>;

    /// Ordered channel identifiers, such as R, G, B, A.
    fn channel_layout(&self) -> &[ChannelId];

    /// Per-channel value representation.
    fn channel_type(&self) -> ChannelType;

    /// Surface width.
    fn width(&self) -> u32 {
        self.size().0
    }

    /// Surface height.
    fn height(&self) -> u32 {
        self.size().1
    }

    /// Number of channels per pixel.
    fn channel_count(&self) -> usize {
        self.channel_layout().len()
    }

    /// Index of the alpha channel, if the layout has one.
    fn alpha_index(&self) -> Option<usize> {
        layout::alpha_index(self.channel_layout())
    }

    /// Whether a signed position lies inside the surface.
    fn contains(&self, pos: Point) -> bool {
        let (w, h) = self.size();
        pos.x >= 0 && pos.y >= 0 && (pos.x as i64) < w as i64 && (pos.y as i64) < h as i64
    }

    /// Read the pixel at a signed position.
    fn get_pixel_at(&self, pos: Point) -> Result<Pixel> {
        let (x, y) = checked_coords(pos, self.size())?;
        self.get_pixel(x, y)
    }

    /// Write the pixel at a signed position.
    fn put_pixel_at(&mut self, pos: Point, color: &Pixel) -> Result<()> {
        let (x, y) = checked_coords(pos, self.size())?;
        self.put_pixel(x, y, color)
    }

    /// Read channel `index` of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the surface, or
    /// [`Error::ChannelCountMismatch`] if the pixel read back is too short
    /// for `index`.
    fn get_channel(&self, x: u32, y: u32, index: usize) -> Result<f64> {
        let pixel = self.get_pixel(x, y)?;
        pixel_channel(&pixel, index, self.channel_count())
    }
}

/// Channel `index` of a pixel read from a surface with `expected` channels.
///
/// # Errors
///
/// Returns [`Error::ChannelCountMismatch`] if the pixel has no channel
/// `index`, which happens when a surface returns pixels shorter than its
/// layout.
pub fn pixel_channel(pixel: &Pixel, index: usize, expected: usize) -> Result<f64> {
    pixel.get(index).ok_or(Error::ChannelCountMismatch {
        expected,
        actual: pixel.len(),
    })
}

/// Validate `(x, y)` against a surface size.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfBounds`] outside `[0, width) x [0, height)`.
pub fn check_bounds(x: u32, y: u32, (width, height): (u32, u32)) -> Result<()> {
    if x >= width || y >= height {
        return Err(Error::IndexOutOfBounds {
            x: x as i64,
            y: y as i64,
            width,
            height,
        });
    }
    Ok(())
}

fn checked_coords(pos: Point, (width, height): (u32, u32)) -> Result<(u32, u32)> {
    if pos.x < 0 || pos.y < 0 || pos.x as u32 >= width || pos.y as u32 >= height {
        return Err(Error::IndexOutOfBounds {
            x: pos.x as i64,
            y: pos.y as i64,
            width,
            height,
        });
    }
    Ok((pos.x as u32, pos.y as u32))
}
