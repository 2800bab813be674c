//! Page fetch tool

use super::{parse_params, run_tool};
use crate::client::ScraperApiClient;
use crate::error::ScraperApiError;
use crate::request::{PageFetchRequest, ScrapeRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use zdk_core::{Result as ZResult, Tool, ToolContext, ToolResponse};
use zdk_tool::generate_schema;

/// ScraperAPI page fetch tool
///
/// Fetches a web page through ScraperAPI's proxy pool and returns the body as a
/// string: raw HTML by default, or text/markdown rendered by the service.
///
/// ## 🔑 API Keys Required
///
/// Set `SCRAPERAPI_API_KEY`, or build the tool from a shared
/// [`ScraperApiClient`] with [`ScraperApiTool::with_client`].
///
/// ## Example
///
/// ```rust,no_run
/// use zdk_scraperapi::ScraperApiTool;
/// use std::sync::Arc;
///
/// let tool = Arc::new(ScraperApiTool::new().unwrap());
///
/// // Invoked with e.g. {"url": "https://www.example.com", "output_format": "text"}
/// ```
pub struct ScraperApiTool {
    name: String,
    description: String,
    client: Arc<ScraperApiClient>,
}

impl ScraperApiTool {
    pub const NAME: &'static str = "scraperapi";

    /// Create the tool with a client configured from the environment
    pub fn new() -> Result<Self, ScraperApiError> {
        Ok(Self::with_client(Arc::new(ScraperApiClient::from_env()?)))
    }

    /// Create the tool on top of an existing client
    pub fn with_client(client: Arc<ScraperApiClient>) -> Self {
        Self {
            name: Self::NAME.to_string(),
            description: "A tool for scraping web content. \
                Useful for extracting information from websites. \
                Input should be a URL and optional parameters for the scraping request."
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
        parse_params::<PageFetchRequest>(params).map(ScrapeRequest::from)
    }
}

#[async_trait]
impl Tool for ScraperApiTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        generate_schema::<PageFetchRequest>()
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

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;
    use zdk_tool::DefaultToolContext;

    fn ctx() -> Arc<dyn ToolContext> {
        Arc::new(DefaultToolContext::new("call-1", "inv-1"))
    }

    fn offline_tool() -> ScraperApiTool {
        ScraperApiTool::with_client(Arc::new(ScraperApiClient::new("test-key").unwrap()))
    }

    #[test]
    fn test_tool_metadata() {
        let tool = offline_tool();
        assert_eq!(tool.name(), "scraperapi");
        assert!(tool.description().contains("scraping"));
        assert!(!tool.is_long_running());
    }

    #[test]
    fn test_schema_generation() {
        let schema = offline_tool().schema();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["url"].is_object());
        assert!(schema["properties"]["keep_headers"].is_object());
        assert_eq!(schema["required"], json!(["url"]));

        let formats = schema["properties"]["output_format"]["enum"]
            .as_array()
            .unwrap();
        assert!(formats.contains(&json!("markdown")));
    }

    #[test]
    fn test_custom_config() {
        let client = Arc::new(ScraperApiClient::new("test-key").unwrap());
        let tool = ScraperApiTool::with_config(
            "fetch_page".to_string(),
            "Custom description".to_string(),
            client,
        );
        assert_eq!(tool.name(), "fetch_page");
        assert_eq!(tool.description(), "Custom description");
    }

    #[tokio::test]
    async fn test_execute_returns_page_as_string() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_key".into(), "test-key".into()),
                Matcher::UrlEncoded("url".into(), "https://example.com".into()),
                Matcher::UrlEncoded("render".into(), "true".into()),
            ]))
            .with_status(200)
            .with_body("<html>Success</html>")
            .create_async()
            .await;

        let client = ScraperApiClient::new("test-key")
            .unwrap()
            .with_base_url(&server.url())
            .unwrap();
        let tool = ScraperApiTool::with_client(Arc::new(client));

        let response = tool
            .execute(ctx(), json!({"url": "https://example.com", "render": true}))
            .await
            .unwrap();

        assert_eq!(response.result, json!("<html>Success</html>"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_url_is_validation_error() {
        let err = offline_tool()
            .execute(ctx(), json!({"output_format": "text"}))
            .await
            .unwrap_err();

        let source = err.tool_source::<ScraperApiError>().unwrap();
        assert!(source.is_validation());
    }
}
