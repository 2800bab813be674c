use super::{Result, ToolContext};
use async_trait::async_trait;
use std::sync::Arc;

/// Tool trait - abstraction for callable tools
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the name of the tool
    fn name(&self) -> &str;

    /// Returns a description of what the tool does
    fn description(&self) -> &str;

    /// Returns the JSON schema for the tool's parameters
    fn schema(&self) -> serde_json::Value;

    /// Indicates whether this is a long-running tool
    fn is_long_running(&self) -> bool {
        false
    }

    /// Executes the tool with given parameters
    async fn execute(
        &self,
        ctx: Arc<dyn ToolContext>,
        params: serde_json::Value,
    ) -> Result<ToolResponse>;
}

/// Toolset trait - a named provider of several related tools
#[async_trait]
pub trait Toolset: Send + Sync {
    /// Returns the name of the toolset
    fn name(&self) -> &str;

    /// Returns the tools currently exposed by this toolset
    async fn get_tools(&self) -> Result<Vec<Arc<dyn Tool>>>;
}

/// Tool execution response
#[derive(Debug, Clone)]
pub struct ToolResponse {
    pub result: serde_json::Value,
}
