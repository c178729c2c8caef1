//! Error types for the card pipeline

use thiserror::Error;

/// Result type alias for card operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching, planning or rendering cards
#[derive(Error, Debug)]
pub enum Error {
    /// Surah number or verse range outside what the chapter holds
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Transport failure or non-success HTTP status
    #[error("Network error: {0}")]
    NetworkError(String),

    /// API response did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Failed to rasterize or encode a card
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Invalid configuration (bad font file, bad URL, ...)
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}
