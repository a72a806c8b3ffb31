//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - Address and metadata
//! - A typed request parsed from the address query string
//! - The mapping from that request onto an upstream call
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod food_details;
mod food_list;
mod foods;

pub use food_details::{FoodDetailsRequest, FoodDetailsResource};
pub use food_list::{FoodListRequest, FoodListResource};
pub use foods::{FoodsRequest, FoodsResource};

use super::error::ResourceError;
use super::query::QueryParams;
use crate::domains::fdc::UpstreamRequest;

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// Registered resource name.
    const NAME: &'static str;

    /// Resource address without query string, e.g. `food://details`.
    const URI: &'static str;

    /// RFC 6570 template advertising the accepted query parameters.
    const URI_TEMPLATE: &'static str;

    /// Short human-readable title.
    const TITLE: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str = "application/json";

    /// Typed, validated request.
    type Request;

    /// Parse the query string, failing on missing or invalid parameters.
    fn parse(params: &QueryParams) -> Result<Self::Request, ResourceError>;

    /// Map a validated request onto exactly one upstream GET.
    fn upstream_request(request: &Self::Request) -> UpstreamRequest;
}
