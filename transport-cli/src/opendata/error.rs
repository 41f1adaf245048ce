//! Connection lookup error types.

use std::path::PathBuf;

/// Number of body characters kept in a decode error.
const BODY_EXCERPT_CHARS: usize = 500;

/// The response body could not be decoded into connections.
#[derive(Debug, thiserror::Error)]
#[error("JSON parse error: {source}")]
pub struct DecodeError {
    #[source]
    source: serde_json::Error,
    body: String,
}

impl DecodeError {
    pub(crate) fn new(source: serde_json::Error, body: &[u8]) -> Self {
        Self {
            source,
            body: String::from_utf8_lossy(body)
                .chars()
                .take(BODY_EXCERPT_CHARS)
                .collect(),
        }
    }

    /// The start of the offending body, for diagnostics.
    pub fn body_excerpt(&self) -> &str {
        &self.body
    }
}

/// Errors from fetching or reading connections.
#[derive(Debug, thiserror::Error)]
pub enum OpendataError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a connections payload
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Saved response file could not be read
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
