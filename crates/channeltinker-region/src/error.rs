//! Error types for channeltinker-region

use channeltinker_core::ChannelType;
use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] channeltinker_core::Error),

    /// Color math error
    #[error("color error: {0}")]
    Color(#[from] channeltinker_color::ColorError),

    /// Surface channels are not in the representation this operation needs
    #[error("unsupported pixel format: expected {expected}, got {actual}")]
    UnsupportedPixelFormat {
        expected: ChannelType,
        actual: String,
    },

    /// The surface layout has no alpha channel
    #[error("surface has no alpha channel (layout {layout})")]
    MissingAlphaChannel { layout: String },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

/// No pixel met the opacity threshold within the search bound.
///
/// Carried by [`crate::halo::HaloReport`] when it stops a halo pass; it is
/// an outcome of the data, not a failure of the call.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "no opaque pixel found near ({x}, {y}); highest alpha seen was {}",
    format_alpha(.max_alpha)
)]
pub struct NoOpaqueCandidate {
    /// Query position x
    pub x: i32,
    /// Query position y
    pub y: i32,
    /// Highest alpha visited during the search, if any pixel was visited
    pub max_alpha: Option<f64>,
}

fn format_alpha(alpha: &Option<f64>) -> String {
    match alpha {
        Some(a) => a.to_string(),
        None => "none".to_string(),
    }
}
