//! Error types for attview library.

use std::io;
use thiserror::Error;

/// Result type alias for attview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading and converting attachments.
///
/// Classification and rendering never fail; these variants belong to the
/// surrounding pipeline (fetching, kind detection, JSON decoding).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Fetching remote content failed.
    #[error("{0}")]
    Fetch(#[from] FetchError),

    /// The attachment kind is not one we can visualize.
    #[error("Unsupported file kind: {0}")]
    UnsupportedKind(String),

    /// Content declared as JSON could not be decoded.
    #[error("JSON decode error: {0}")]
    JsonDecode(#[from] serde_json::Error),

    /// The host has switched visualization off.
    #[error("Visualization is disabled")]
    Disabled,

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}

/// Failure reported by a [`ContentFetcher`](crate::viewer::ContentFetcher).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP {code}: {reason}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Reason phrase
        reason: String,
    },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
}

impl FetchError {
    /// HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { code, .. } => Some(*code),
            FetchError::Network(_) => None,
        }
    }
}
