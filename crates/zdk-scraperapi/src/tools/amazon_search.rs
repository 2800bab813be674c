//! Amazon search tool

use super::{parse_params, run_tool};
use crate::client::ScraperApiClient;
use crate::error::ScraperApiError;
use crate::request::{MarketplaceQueryRequest, ScrapeRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use zdk_core::{Result as ZResult, Tool, ToolContext, ToolResponse};
use zdk_tool::generate_schema;

/// ScraperAPI Amazon Search tool
///
/// Searches Amazon product listings through ScraperAPI's structured endpoint.
/// One page per call; pass `page` to move through results.
pub struct ScraperApiAmazonSearchTool {
    name: String,
    description: String,
    client: Arc<ScraperApiClient>,
}

impl ScraperApiAmazonSearchTool {
    pub const NAME: &'static str = "scraperapi_amazon_search";

    pub fn new() -> Result<Self, ScraperApiError> {
        Ok(Self::with_client(Arc::new(ScraperApiClient::from_env()?)))
    }

    pub fn with_client(client: Arc<ScraperApiClient>) -> Self {
        Self {
            name: Self::NAME.to_string(),
            description: "A tool for performing Amazon searches using ScraperAPI. \
                Useful for extracting structured data from Amazon search results. \
                Input should be a query and optional parameters for the search request."
                .to_string(),
            client,
        }
    }

    /// Create with custom name and description
    pub fn with_config(name: String, description: String, client: Arc<ScraperApiClient>) -> Self {
        Self {
            name,
            description,
            client,
        }
    }

    fn parse(params: Value) -> Result<ScrapeRequest, ScraperApiError> {
        parse_params::<MarketplaceQueryRequest>(params).map(ScrapeRequest::from)
    }
}

#[async_trait]
impl Tool for ScraperApiAmazonSearchTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        generate_schema::<MarketplaceQueryRequest>()
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, params: Value) -> ZResult<ToolResponse> {
        run_tool(
            &self.name,
            &self.description,
            &self.client,
            ctx,
            params,
            Self::parse,
        )
        .await
    }
}
