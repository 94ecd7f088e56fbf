//! ChannelTinker Region - Spatial algorithms over pixel surfaces
//!
//! This crate provides the algorithms that walk outward from a position:
//!
//! - **Ring traversal** ([`ring`]): clockwise walk of a square perimeter
//! - **Nearest opaque search** ([`search`]): closest pixel with enough alpha
//! - **Halo repair** ([`halo`]): recolor semi-transparent fringe pixels
//! - **Shapes** ([`shapes`]): squares and circles drawn ring by ring
//!
//! # Example
//!
//! ```
//! use channeltinker_core::{Canvas, Pixel, PixelSurface, Point};
//! use channeltinker_region::{SearchQuery, find_opaque_pos};
//!
//! let mut canvas = Canvas::rgba_float(5, 5).unwrap();
//! canvas.put_pixel(4, 2, &Pixel::rgba(1.0, 0.0, 0.0, 1.0)).unwrap();
//! let found = find_opaque_pos(&canvas, Point::new(1, 2), &SearchQuery::new(1.0)).unwrap();
//! assert_eq!(found.position(), Some(Point::new(4, 2)));
//! ```

pub mod error;
pub mod halo;
pub mod ring;
pub mod search;
pub mod shapes;

// Re-export core types
pub use channeltinker_core;

// Re-export error types
pub use error::{NoOpaqueCandidate, RegionError, RegionResult};

pub use halo::{HaloOptions, HaloReport, extend};
pub use ring::{SquareRing, square_gen};
pub use search::{SearchOutcome, SearchQuery, default_max_radius, find_opaque_pos};
pub use shapes::{
    ShapeOptions, ShapeTrace, draw_centered_circle, draw_centered_square,
    draw_circle_from_center, draw_square_from_center,
};
