//! Error types and handling for the MCP server.
//!
//! Everything that can stop the server from starting or serving ends up
//! here. Per-request failures stay in their domain error and are mapped to
//! protocol errors at the server boundary.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// An upstream API call failed.
    #[error("Upstream error: {0}")]
    Upstream(#[from] crate::domains::fdc::UpstreamError),

    /// Error from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two operations were registered under the same name.
    #[error("Duplicate registration: {0}")]
    Registration(String),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new duplicate-registration error.
    pub fn registration(name: impl Into<String>) -> Self {
        Self::Registration(name.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
