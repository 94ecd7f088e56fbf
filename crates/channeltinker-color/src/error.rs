//! Error types for channeltinker-color

use thiserror::Error;

/// Errors that can occur during channel math and image comparison
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] channeltinker_core::Error),

    /// Requested channel count is not positive
    #[error("invalid channel count: {0}")]
    InvalidChannelCount(usize),

    /// Compared pixels have different channel counts and conversion is off
    #[error("channel counts do not match ({base} vs {head}) and conversion is disabled")]
    ChannelCountMismatch { base: usize, head: usize },

    /// Explicit channel index lists have different lengths
    #[error("base index count {base} does not match head index count {head}")]
    IndexCountMismatch { base: usize, head: usize },

    /// A channel index points past the end of a pixel
    #[error("channel index {index} out of range for {len}-channel pixel")]
    ChannelIndexOutOfRange { index: usize, len: usize },

    /// The diff canvas does not cover both surfaces
    #[error("diff canvas {width}x{height} is smaller than {needed_width}x{needed_height}")]
    CanvasTooSmall {
        width: u32,
        height: u32,
        needed_width: u32,
        needed_height: u32,
    },

    /// No pixel pair was eligible for the statistic
    #[error("there were no comparable pixels")]
    NoEligiblePixels,

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
