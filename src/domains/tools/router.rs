//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only collects
//! them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::SearchFoodsTool;
use crate::domains::fdc::FdcClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<FdcClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(SearchFoodsTool::create_route(client))
}
