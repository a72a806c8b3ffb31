//! Paged food listing.

use super::ResourceDefinition;
use crate::domains::fdc::types::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_DATA_TYPES, MAX_PAGE_SIZE,
};
use crate::domains::fdc::{DataType, SortBy, SortOrder, UpstreamQuery, UpstreamRequest};
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::query::QueryParams;

/// `food://list?dataType=…&pageSize=…&pageNumber=…&sortBy=…&sortOrder=…`
pub struct FoodListResource;

/// Validated request for one page of the abridged food list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodListRequest {
    pub data_types: Vec<DataType>,
    pub page_size: u32,
    pub page_number: u32,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

impl ResourceDefinition for FoodListResource {
    const NAME: &'static str = "food-list";
    const URI: &'static str = "food://list";
    const URI_TEMPLATE: &'static str =
        "food://list{?dataType,pageSize,pageNumber,sortBy,sortOrder}";
    const TITLE: &'static str = "Food List";
    const DESCRIPTION: &'static str = "A paged list of foods in the abridged format. \
        Optional dataType filter (up to 4 of Branded, Foundation, Survey (FNDDS), SR Legacy), \
        pageSize (1-200, default 50), pageNumber (default 1), sortBy (dataType.keyword, \
        lowercaseDescription.keyword, fdcId, publishedDate) and sortOrder (asc, desc).";

    type Request = FoodListRequest;

    fn parse(params: &QueryParams) -> Result<Self::Request, ResourceError> {
        Ok(FoodListRequest {
            data_types: params.enum_list("dataType", MAX_DATA_TYPES)?,
            page_size: params
                .number("pageSize", 1, MAX_PAGE_SIZE)?
                .unwrap_or(DEFAULT_PAGE_SIZE),
            page_number: params
                .number("pageNumber", 1, u32::MAX)?
                .unwrap_or(DEFAULT_PAGE_NUMBER),
            sort_by: params.enum_value("sortBy")?,
            sort_order: params.enum_value("sortOrder")?,
        })
    }

    fn upstream_request(request: &Self::Request) -> UpstreamRequest {
        let query = UpstreamQuery::new()
            .set_enum_list("dataType", &request.data_types)
            .set("pageSize", request.page_size)
            .set("pageNumber", request.page_number)
            .set_enum("sortBy", request.sort_by)
            .set_enum("sortOrder", request.sort_order);

        UpstreamRequest::new(["foods", "list"], query)
    }
}
