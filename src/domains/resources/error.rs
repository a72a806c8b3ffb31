//! Resource-specific error types.

use thiserror::Error;

use crate::domains::fdc::UpstreamError;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The resource URI could not be parsed.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// A required query parameter is absent or empty.
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    /// A query parameter has a value outside its accepted range or enum.
    #[error("Invalid {name} parameter: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The upstream API call failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "invalid URI" error.
    pub fn invalid_uri(msg: impl Into<String>) -> Self {
        Self::InvalidUri(msg.into())
    }

    /// Create a new "invalid parameter" error.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the request was rejected before reaching the upstream API.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidUri(_) | Self::MissingParameter(_) | Self::InvalidParameter { .. }
        )
    }
}
