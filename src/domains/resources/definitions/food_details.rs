//! Single food lookup by FDC ID.

use super::ResourceDefinition;
use crate::domains::fdc::types::MAX_NUTRIENTS;
use crate::domains::fdc::{Format, UpstreamQuery, UpstreamRequest};
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::query::QueryParams;

/// `food://details?fdcId=…&format=…&nutrients=…`
pub struct FoodDetailsResource;

/// Validated request for one food record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodDetailsRequest {
    pub fdc_id: u64,
    pub format: Format,
    pub nutrients: Vec<u32>,
}

impl ResourceDefinition for FoodDetailsResource {
    const NAME: &'static str = "food-details";
    const URI: &'static str = "food://details";
    const URI_TEMPLATE: &'static str = "food://details{?fdcId,format,nutrients}";
    const TITLE: &'static str = "Food Details";
    const DESCRIPTION: &'static str = "Details for one food item by FDC ID. Optional format \
        ('abridged' or 'full', default 'full') and nutrients (up to 25 nutrient numbers, \
        comma separated) narrow the response.";

    type Request = FoodDetailsRequest;

    fn parse(params: &QueryParams) -> Result<Self::Request, ResourceError> {
        Ok(FoodDetailsRequest {
            fdc_id: params.required_id("fdcId")?,
            format: params.enum_value("format")?.unwrap_or_default(),
            nutrients: params.number_list("nutrients", MAX_NUTRIENTS)?,
        })
    }

    fn upstream_request(request: &Self::Request) -> UpstreamRequest {
        let query = UpstreamQuery::new()
            .set_enum("format", Some(request.format))
            .set_list("nutrients", &request.nutrients);

        UpstreamRequest::new(["food".to_string(), request.fdc_id.to_string()], query)
    }
}
