//! FoodData Central food search tool.
//!
//! Arguments are checked in two stages. Schema validation (types, enums,
//! bounds, date format) rejects the call with `invalid_params` before any
//! upstream request is made. Once validated, upstream failures are reported
//! inline as an error-flagged result instead of failing the call.

use std::sync::Arc;

use chrono::NaiveDate;
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{error, info};

use crate::domains::fdc::types::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_DATA_TYPES, MAX_PAGE_SIZE, MAX_TRADE_CHANNELS,
};
use crate::domains::fdc::{
    DataType, FdcClient, SortBy, SortOrder, TradeChannel, UpstreamQuery, UpstreamRequest, envelope,
};
use crate::domains::tools::error::ToolError;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_page_number() -> u32 {
    DEFAULT_PAGE_NUMBER
}

/// Parameters for the food search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchFoodsParams {
    /// Search terms; may include FoodData Central search operators.
    #[schemars(description = "Search terms to find foods")]
    pub query: String,

    #[schemars(
        description = "Filter on a specific data type; specify one or more values",
        length(min = 1, max = 4)
    )]
    #[serde(default)]
    pub data_type: Option<Vec<DataType>>,

    #[schemars(
        description = "Maximum number of results to return for the current page (default: 50)",
        range(min = 1, max = 200)
    )]
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[schemars(description = "Page number to retrieve (default: 1)", range(min = 1))]
    #[serde(default = "default_page_number")]
    pub page_number: u32,

    #[schemars(description = "Specify one of the possible values to sort by that field")]
    #[serde(default)]
    pub sort_by: Option<SortBy>,

    #[schemars(description = "The sort direction for the results")]
    #[serde(default)]
    pub sort_order: Option<SortOrder>,

    #[schemars(
        description = "Filter results based on the brand owner of the food (only for Branded Foods)"
    )]
    #[serde(default)]
    pub brand_owner: Option<String>,

    #[schemars(
        description = "Filter foods containing any of the specified trade channels",
        length(min = 1, max = 3)
    )]
    #[serde(default)]
    pub trade_channel: Option<Vec<TradeChannel>>,

    #[schemars(description = "Filter foods published on or after this date (format: YYYY-MM-DD)")]
    #[serde(default)]
    pub start_date: Option<String>,

    #[schemars(description = "Filter foods published on or before this date (format: YYYY-MM-DD)")]
    #[serde(default)]
    pub end_date: Option<String>,
}

impl SearchFoodsParams {
    /// Enforce the bounds serde alone cannot express.
    pub fn validate(&self) -> Result<(), ToolError> {
        if self.query.trim().is_empty() {
            return Err(ToolError::invalid_arguments("query must not be empty"));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ToolError::invalid_arguments(format!(
                "pageSize must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }

        if self.page_number < 1 {
            return Err(ToolError::invalid_arguments("pageNumber must be at least 1"));
        }

        check_count("dataType", self.data_type.as_deref(), MAX_DATA_TYPES)?;
        check_count("tradeChannel", self.trade_channel.as_deref(), MAX_TRADE_CHANNELS)?;
        check_date("startDate", self.start_date.as_deref())?;
        check_date("endDate", self.end_date.as_deref())?;

        Ok(())
    }

    /// Map validated parameters onto the `/foods/search` call.
    ///
    /// Optional fields appear only when set; `query` is forwarded verbatim.
    pub fn upstream_request(&self) -> UpstreamRequest {
        let query = UpstreamQuery::new()
            .set("query", &self.query)
            .set_enum_list("dataType", self.data_type.as_deref().unwrap_or_default())
            .set("pageSize", self.page_size)
            .set("pageNumber", self.page_number)
            .set_enum("sortBy", self.sort_by)
            .set_enum("sortOrder", self.sort_order)
            .set_opt("brandOwner", self.brand_owner.as_deref())
            .set_enum_list("tradeChannel", self.trade_channel.as_deref().unwrap_or_default())
            .set_opt("startDate", self.start_date.as_deref())
            .set_opt("endDate", self.end_date.as_deref());

        UpstreamRequest::new(["foods", "search"], query)
    }
}

fn check_count<T>(name: &str, values: Option<&[T]>, max: usize) -> Result<(), ToolError> {
    match values {
        Some(values) if values.is_empty() || values.len() > max => {
            Err(ToolError::invalid_arguments(format!(
                "{} accepts 1 to {} values, got {}",
                name,
                max,
                values.len()
            )))
        }
        _ => Ok(()),
    }
}

/// Dates are forwarded verbatim, so only the zero-padded form is accepted.
fn check_date(name: &str, value: Option<&str>) -> Result<(), ToolError> {
    let Some(raw) = value.filter(|raw| !raw.is_empty()) else {
        return Ok(());
    };

    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) if date.format(DATE_FORMAT).to_string() == raw => Ok(()),
        _ => Err(ToolError::invalid_arguments(format!(
            "{} must be a YYYY-MM-DD date, got '{}'",
            name, raw
        ))),
    }
}

/// FoodData Central search tool implementation.
#[derive(Debug, Clone)]
pub struct SearchFoodsTool;

impl SearchFoodsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search-foods";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search the USDA FoodData Central database for foods \
        matching one or more keywords. Results can be filtered by data type, brand owner, trade \
        channel and publication date, paged, and sorted. Returns the raw search response JSON.";

    /// Deserialize and validate raw tool arguments.
    pub fn parse_arguments(arguments: JsonObject) -> Result<SearchFoodsParams, ToolError> {
        let params: SearchFoodsParams =
            serde_json::from_value(serde_json::Value::Object(arguments))
                .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Validate arguments, then search.
    ///
    /// Validation failures are returned as `Err`; everything after that
    /// produces `Ok`, with upstream failures flagged in the result.
    pub async fn run(client: &FdcClient, arguments: JsonObject) -> Result<CallToolResult, McpError> {
        let params = Self::parse_arguments(arguments).map_err(|e| {
            info!("Rejected {} arguments: {}", Self::NAME, e);
            McpError::invalid_params(e.to_string(), None)
        })?;

        Ok(Self::execute(client, &params).await)
    }

    /// Execute the search against validated parameters.
    pub async fn execute(client: &FdcClient, params: &SearchFoodsParams) -> CallToolResult {
        match Self::search(client, params).await {
            Ok(result) => result,
            Err(e) => {
                error!("Food search failed: {}", e);
                envelope::tool_error(format!("Error searching foods: {}", e))
            }
        }
    }

    async fn search(client: &FdcClient, params: &SearchFoodsParams) -> Result<CallToolResult, ToolError> {
        info!("Searching foods matching: {}", params.query);

        let body = client.get(&params.upstream_request()).await?;
        envelope::tool_success(&body).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchFoodsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    pub fn create_route<S>(client: Arc<FdcClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move { Self::run(&client, args).await }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::UpstreamConfig;
    use rmcp::model::RawContent;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args(value: serde_json::Value) -> JsonObject {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("Expected a JSON object"),
        }
    }

    fn client_for(server: &MockServer) -> FdcClient {
        FdcClient::new(&UpstreamConfig::new(
            Url::parse(&server.uri()).unwrap(),
            "test-key".to_string(),
        ))
        .unwrap()
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    /// Mounts a catch-all mock that must never be hit.
    async fn forbid_upstream(server: &MockServer) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(server)
            .await;
    }

    #[test]
    fn test_defaults_applied() {
        let params = SearchFoodsTool::parse_arguments(args(json!({"query": "cheddar cheese"}))).unwrap();
        assert_eq!(params.page_size, 50);
        assert_eq!(params.page_number, 1);

        let request = params.upstream_request();
        assert_eq!(request.path(), "/foods/search");
        assert_eq!(request.query.len(), 3);
        assert_eq!(request.query.get("query"), Some("cheddar cheese"));
        assert_eq!(request.query.get("pageSize"), Some("50"));
        assert_eq!(request.query.get("pageNumber"), Some("1"));
    }

    #[test]
    fn test_all_fields_forwarded() {
        let params = SearchFoodsTool::parse_arguments(args(json!({
            "query": "almonds",
            "dataType": ["Branded", "Survey (FNDDS)"],
            "pageSize": 25,
            "pageNumber": 2,
            "sortBy": "dataType.keyword",
            "sortOrder": "asc",
            "brandOwner": "Kar Nut Products Company",
            "tradeChannel": ["CHILD_NUTRITION_FOOD_PROGRAMS", "GROCERY"],
            "startDate": "2021-01-01",
            "endDate": "2021-12-30"
        })))
        .unwrap();

        let query = params.upstream_request().query;
        assert_eq!(query.get("dataType"), Some("Branded,Survey (FNDDS)"));
        assert_eq!(query.get("pageSize"), Some("25"));
        assert_eq!(query.get("pageNumber"), Some("2"));
        assert_eq!(query.get("sortBy"), Some("dataType.keyword"));
        assert_eq!(query.get("sortOrder"), Some("asc"));
        assert_eq!(query.get("brandOwner"), Some("Kar Nut Products Company"));
        assert_eq!(
            query.get("tradeChannel"),
            Some("CHILD_NUTRITION_FOOD_PROGRAMS,GROCERY")
        );
        assert_eq!(query.get("startDate"), Some("2021-01-01"));
        assert_eq!(query.get("endDate"), Some("2021-12-30"));
    }

    #[test]
    fn test_empty_brand_owner_omitted() {
        let params =
            SearchFoodsTool::parse_arguments(args(json!({"query": "milk", "brandOwner": ""}))).unwrap();
        assert!(!params.upstream_request().query.contains("brandOwner"));
    }

    #[test]
    fn test_validation_failures() {
        let rejected = [
            json!({}),
            json!({"query": ""}),
            json!({"query": "milk", "pageSize": 0}),
            json!({"query": "milk", "pageSize": 201}),
            json!({"query": "milk", "pageNumber": 0}),
            json!({"query": "milk", "dataType": []}),
            json!({"query": "milk", "dataType": ["Experimental"]}),
            json!({"query": "milk", "sortBy": "name"}),
            json!({"query": "milk", "sortOrder": "up"}),
            json!({"query": "milk", "tradeChannel": ["RETAIL"]}),
            json!({"query": "milk", "startDate": "01/01/2021"}),
            json!({"query": "milk", "endDate": "2021-02-30"}),
            json!({"query": "milk", "startDate": "2021-1-5"}),
            json!({"query": "milk", "startDate": "+2021-01-01"}),
            json!({"query": "milk", "startDate": " 2021-01-01"}),
            json!({"query": "milk", "endDate": "2021-01-01 "}),
        ];

        for value in rejected {
            let result = SearchFoodsTool::parse_arguments(args(value.clone()));
            assert!(
                matches!(result, Err(ToolError::InvalidArguments(_))),
                "{} should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_schema_declares_fields() {
        let tool = SearchFoodsTool::to_tool();
        let schema = serde_json::Value::Object((*tool.input_schema).clone());

        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("query")));

        let properties = schema["properties"].as_object().unwrap();
        for field in [
            "query",
            "dataType",
            "pageSize",
            "pageNumber",
            "sortBy",
            "sortOrder",
            "brandOwner",
            "tradeChannel",
            "startDate",
            "endDate",
        ] {
            assert!(properties.contains_key(field), "missing {}", field);
        }
    }

    #[tokio::test]
    async fn test_only_query_outbound_call() {
        let server = MockServer::start().await;
        let body = json!({
            "totalHits": 1,
            "currentPage": 1,
            "totalPages": 1,
            "foods": [{"fdcId": 1, "description": "CHEDDAR CHEESE"}]
        });

        let mut mock = Mock::given(method("GET"))
            .and(path("/foods/search"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("query", "cheddar cheese"))
            .and(query_param("pageSize", "50"))
            .and(query_param("pageNumber", "1"));
        for missing in [
            "dataType",
            "sortBy",
            "sortOrder",
            "brandOwner",
            "tradeChannel",
            "startDate",
            "endDate",
        ] {
            mock = mock.and(query_param_is_missing(missing));
        }
        mock.respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = SearchFoodsTool::run(&client, args(json!({"query": "cheddar cheese"})))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        assert_eq!(text_of(&result), serde_json::to_string_pretty(&body).unwrap());
    }

    #[tokio::test]
    async fn test_too_many_trade_channels_makes_no_call() {
        let server = MockServer::start().await;
        forbid_upstream(&server).await;

        let client = client_for(&server);
        let result = SearchFoodsTool::run(
            &client,
            args(json!({
                "query": "milk",
                "tradeChannel": ["DRUG", "GROCERY", "ONLINE", "VENDING"]
            })),
        )
        .await;

        let err = result.unwrap_err();
        assert!(err.message.contains("tradeChannel"));
    }

    #[tokio::test]
    async fn test_page_size_over_limit_makes_no_call() {
        let server = MockServer::start().await;
        forbid_upstream(&server).await;

        let client = client_for(&server);
        let result = SearchFoodsTool::run(&client, args(json!({"query": "milk", "pageSize": 500}))).await;

        let err = result.unwrap_err();
        assert!(err.message.contains("pageSize"));
    }

    #[tokio::test]
    async fn test_upstream_error_is_soft_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/foods/search"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = SearchFoodsTool::run(&client, args(json!({"query": "milk"})))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.starts_with("Error searching foods:"));
        assert!(text.contains("500"));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_soft_failure() {
        // Nothing listens on port 9 of the loopback interface.
        let client = FdcClient::new(&UpstreamConfig::new(
            Url::parse("http://127.0.0.1:9").unwrap(),
            "test-key".to_string(),
        ))
        .unwrap();
        let result = SearchFoodsTool::run(&client, args(json!({"query": "milk"})))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
    }
}
