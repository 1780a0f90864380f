//! Error types for the HTTP client.

use thiserror::Error;

/// Client-specific errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid base URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    /// A file to attach could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
