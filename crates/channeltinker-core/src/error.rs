//! Error types for channeltinker-core
//!
//! Provides a unified error type for surface access and pixel shape
//! problems. Every variant is fatal to the call that produced it: an
//! out-of-range position or a mis-shaped pixel is never clamped or
//! coerced.

use thiserror::Error;

/// ChannelTinker core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Surface access outside `[0, width) x [0, height)`
    #[error("position ({x}, {y}) out of bounds for {width}x{height} surface")]
    IndexOutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// Invalid surface dimensions
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel length does not match the surface channel layout
    #[error("channel count mismatch: expected {expected}, got {actual}")]
    ChannelCountMismatch { expected: usize, actual: usize },

    /// Points of different dimensionality were compared
    #[error("dimension mismatch: {0} vs {1}")]
    DimensionMismatch(usize, usize),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for ChannelTinker core operations
pub type Result<T> = std::result::Result<T, Error>;
