//! ChannelTinker Color - Channel math and image comparison
//!
//! This crate provides the color arithmetic the other algorithms build on:
//!
//! - **Depth conversion** ([`depth`]): grow or shrink a color's channel count
//! - **Color difference** ([`diff`]): signed or absolute per-pixel scoring
//! - **Image difference** ([`compare`]): mean difference of two surfaces
//!   and a visualization of where they differ
//! - **Diff naming** ([`naming`]): file names for saved visualizations
//!
//! # Example
//!
//! ```
//! use channeltinker_color::{DiffColorOptions, convert_depth, diff_color};
//! use channeltinker_core::{ColorInput, Pixel};
//!
//! let gray = convert_depth(&ColorInput::from(Pixel::rgb(10.0, 20.0, 30.0)), 1, 255.0).unwrap();
//! assert_eq!(gray, Pixel::gray(20.0));
//!
//! let black = Pixel::rgba8(0, 0, 0, 255);
//! let white = Pixel::rgba8(255, 255, 255, 255);
//! assert_eq!(diff_color(&black, &white, &DiffColorOptions::default()).unwrap(), 1.0);
//! ```

pub mod compare;
pub mod depth;
pub mod diff;
pub mod error;
pub mod naming;

// Re-export core types
pub use channeltinker_core;
pub use channeltinker_core::convert_channel;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use compare::{
    DiffOptions, DiffResult, SurfaceInfo, default_nochange_color, diff_images, gen_diff_image,
};
pub use depth::convert_depth;
pub use diff::{DiffColorOptions, diff_color};
pub use naming::{drive_name, generate_diff_name};
