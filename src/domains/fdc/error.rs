//! Upstream call error types.

use thiserror::Error;

/// Result type for upstream calls.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// An upstream call failed.
///
/// Callers treat every variant the same way; the variants only exist to
/// produce a useful message.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request could not be sent or the connection failed.
    #[error("request to {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream API answered with a non-2xx status.
    #[error("{path} returned status {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("{path} returned a malformed body: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be initialized.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request URL could not be built.
    #[error("invalid upstream URL: {0}")]
    Url(String),
}

impl UpstreamError {
    /// Create a status error.
    pub fn status(path: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            path: path.into(),
            status,
            body: body.into(),
        }
    }
}
