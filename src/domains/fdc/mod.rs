//! FoodData Central domain module.
//!
//! Shared by the resources and tools domains:
//!
//! - `types` - Enumerated upstream values and limits
//! - `request` - Normalized upstream requests (path + query parameters)
//! - `client` - The HTTP client performing one GET per invocation
//! - `envelope` - Wrapping upstream bodies into MCP results
//! - `error` - Upstream failure type

pub mod client;
pub mod envelope;
mod error;
pub mod request;
pub mod types;

pub use client::FdcClient;
pub use error::{UpstreamError, UpstreamResult};
pub use request::{UpstreamQuery, UpstreamRequest};
pub use types::{DataType, Format, SortBy, SortOrder, TradeChannel, WireValue};
