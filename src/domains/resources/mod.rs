//! Resources domain module.
//!
//! Resources are read-only, parameterized views onto the FoodData Central
//! API, addressed as `food://<name>?<query>`.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `query.rs` - Typed access to the address query string
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`
//!
//! **No need to modify `service.rs`!**

pub mod definitions;
mod error;
pub mod query;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use query::QueryParams;
pub use registry::{ResourceEntry, get_all_resources};
pub use service::ResourceService;
