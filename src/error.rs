//! Error types for extraction operations.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input could not be treated as an HTML document at all.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// Character encoding resolution or conversion failed.
    #[error("Encoding error: {0}")]
    EncodingError(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
