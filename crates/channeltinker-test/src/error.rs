//! Error types for the test helpers

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Surface construction or access failed
    #[error("surface error: {0}")]
    Surface(#[from] channeltinker_core::Error),

    /// Fixture rows were ragged or empty
    #[error("invalid fixture '{name}': {message}")]
    InvalidFixture { name: String, message: String },
}

/// Result type for test helper operations
pub type TestResult<T> = Result<T, TestError>;
