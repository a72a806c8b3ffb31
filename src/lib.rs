//! FoodData Central MCP Server Library
//!
//! This crate exposes the USDA FoodData Central API through the Model Context
//! Protocol (MCP): three parameterized resources for food lookups and
//! listings, and one search tool.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and the
//!   STDIO transport
//! - **domains**: business logic organized by bounded contexts
//!   - **fdc**: upstream client, request model and response envelopes
//!   - **resources**: `food://details`, `food://foods`, `food://list`
//!   - **tools**: `search-foods`
//!
//! # Example
//!
//! ```rust,no_run
//! use fdc_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
