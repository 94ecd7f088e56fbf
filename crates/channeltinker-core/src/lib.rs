//! ChannelTinker Core - Pixel model and surface capability
//!
//! This crate provides the pieces every ChannelTinker algorithm is written
//! against, independent of any image backend:
//!
//! - [`Pixel`] / [`ChannelId`] / [`ChannelType`] - Channel tuples and how
//!   to read them
//! - [`PixelSurface`] - The capability a host image object implements
//! - [`Canvas`] - An owned in-memory surface
//! - [`Point`] - Signed integer positions and distance helpers
//! - [`Progress`] - Advisory progress reporting for long scans
//! - [`Diagnostics`] - Template-deduplicated warning collection
//!
//! With the `image` feature, `image::RgbaImage` and `image::Rgba32FImage`
//! implement [`PixelSurface`].
//!
//! # Example
//!
//! ```
//! use channeltinker_core::{Canvas, Pixel, PixelSurface};
//!
//! let mut canvas = Canvas::rgba8(4, 3).unwrap();
//! canvas.put_pixel(1, 2, &Pixel::rgba8(255, 0, 0, 255)).unwrap();
//! assert_eq!(canvas.size(), (4, 3));
//! assert_eq!(canvas.get_pixel(1, 2).unwrap()[0], 255.0);
//! ```

pub mod canvas;
pub mod diagnostics;
pub mod error;
pub mod geometry;
#[cfg(feature = "image")]
pub mod image_adapter;
pub mod pixel;
pub mod progress;
pub mod surface;

pub use canvas::Canvas;
pub use diagnostics::{DiagnosticEntry, Diagnostics};
pub use error::{Error, Result};
pub use geometry::{Point, fdist, quadrant_of_pos};
pub use pixel::{
    ChannelId, ChannelType, ColorInput, INT_CHANNEL_MAX, Pixel, convert_channel, layout,
};
pub use progress::{Progress, ProgressLog};
pub use surface::{PixelSurface, check_bounds, pixel_channel};
