//! ChannelTinker - Backend-independent pixel algorithms
//!
//! ChannelTinker works on any image object that implements
//! [`PixelSurface`], so the same code serves every host backend.
//!
//! # Overview
//!
//! - Channel depth conversion and normalized color difference
//! - Whole-image difference statistics and visualization
//! - Output names for diff images from two input paths
//! - Clockwise square ring traversal and nearest opaque pixel search
//! - Halo repair for semi-transparent fringes
//! - Square and circle drawing
//!
//! # Example
//!
//! ```
//! use channeltinker::{Canvas, Pixel, PixelSurface};
//! use channeltinker::color::gen_diff_image;
//!
//! let base = Canvas::rgba8(2, 2).unwrap();
//! let mut head = base.clone();
//! head.put_pixel(1, 1, &Pixel::rgba8(255, 255, 255, 255)).unwrap();
//!
//! let (result, diff) = gen_diff_image(&base, &head).unwrap();
//! assert_eq!(result.same, Some(false));
//! assert_eq!(diff.size(), (2, 2));
//! ```

// Re-export core types (pixel model and surface capability)
pub use channeltinker_core::*;

// Re-export algorithm crates as modules to avoid name conflicts
pub use channeltinker_color as color;
pub use channeltinker_region as region;
