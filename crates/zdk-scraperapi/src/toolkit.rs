//! ScraperAPI toolset

use crate::client::ScraperApiClient;
use crate::error::ScraperApiError;
use crate::tools::{ScraperApiAmazonSearchTool, ScraperApiGoogleSearchTool, ScraperApiTool};
use async_trait::async_trait;
use std::sync::Arc;
use zdk_core::{Error, Result, Tool, Toolset, ZConfig};

/// Bundles the page fetch, Google search and Amazon search tools around one
/// shared client.
pub struct ScraperApiToolkit {
    name: String,
    client: Arc<ScraperApiClient>,
    tool_filter: Option<Vec<String>>,
}

impl ScraperApiToolkit {
    pub const DEFAULT_NAME: &'static str = "scraperapi";

    pub fn builder() -> ScraperApiToolkitBuilder {
        ScraperApiToolkitBuilder::new()
    }

    /// Toolkit over an existing client with every tool enabled
    pub fn new(client: Arc<ScraperApiClient>) -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            client,
            tool_filter: None,
        }
    }

    pub fn from_env() -> std::result::Result<Self, ScraperApiError> {
        Ok(Self::new(Arc::new(ScraperApiClient::from_env()?)))
    }

    pub fn from_config(config: &ZConfig) -> std::result::Result<Self, ScraperApiError> {
        Ok(Self::new(Arc::new(ScraperApiClient::from_config(config)?)))
    }

    pub fn client(&self) -> &Arc<ScraperApiClient> {
        &self.client
    }

    /// All tools that pass the filter, in a stable order
    pub fn tools(&self) -> Vec<Arc<dyn Tool>> {
        let all: Vec<Arc<dyn Tool>> = vec![
            Arc::new(ScraperApiTool::with_client(self.client.clone())),
            Arc::new(ScraperApiGoogleSearchTool::with_client(self.client.clone())),
            Arc::new(ScraperApiAmazonSearchTool::with_client(self.client.clone())),
        ];

        match &self.tool_filter {
            Some(filter) => all
                .into_iter()
                .filter(|t| filter.iter().any(|name| name == t.name()))
                .collect(),
            None => all,
        }
    }

    /// Look up one exposed tool by name
    pub fn tool(&self, name: &str) -> Result<Arc<dyn Tool>> {
        self.tools()
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| Error::ToolNotFound(name.to_string()))
    }
}

#[async_trait]
impl Toolset for ScraperApiToolkit {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_tools(&self) -> Result<Vec<Arc<dyn Tool>>> {
        let tools = self.tools();

        tracing::info!(
            toolset = %self.name,
            count = tools.len(),
            "Loaded ScraperAPI tools"
        );

        Ok(tools)
    }
}

/// Builder for ScraperApiToolkit
pub struct ScraperApiToolkitBuilder {
    name: Option<String>,
    client: Option<Arc<ScraperApiClient>>,
    tool_filter: Option<Vec<String>>,
}

impl ScraperApiToolkitBuilder {
    fn new() -> Self {
        Self {
            name: None,
            client: None,
            tool_filter: None,
        }
    }

    /// Set the name of the toolset
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn client(mut self, client: Arc<ScraperApiClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Only expose tools whose names are listed
    pub fn tool_filter(mut self, filter: Vec<String>) -> Self {
        self.tool_filter = Some(filter);
        self
    }

    /// Build the toolkit. Without an explicit client the key is read from
    /// `SCRAPERAPI_API_KEY`.
    pub fn build(self) -> Result<ScraperApiToolkit> {
        let client = match self.client {
            Some(client) => client,
            None => Arc::new(
                ScraperApiClient::from_env().map_err(|e| Error::config_error(e.to_string()))?,
            ),
        };

        if let Some(filter) = &self.tool_filter {
            let known = [
                ScraperApiTool::NAME,
                ScraperApiGoogleSearchTool::NAME,
                ScraperApiAmazonSearchTool::NAME,
            ];
            if let Some(unknown) = filter.iter().find(|n| !known.contains(&n.as_str())) {
                return Err(Error::config_error(format!(
                    "Unknown ScraperAPI tool in filter: {}",
                    unknown
                )));
            }
        }

        Ok(ScraperApiToolkit {
            name: self
                .name
                .unwrap_or_else(|| ScraperApiToolkit::DEFAULT_NAME.to_string()),
            client,
            tool_filter: self.tool_filter,
        })
    }
}
