//! ZDK tools backed by ScraperAPI

mod amazon_search;
mod google_search;
mod scrape;

pub use amazon_search::ScraperApiAmazonSearchTool;
pub use google_search::ScraperApiGoogleSearchTool;
pub use scrape::ScraperApiTool;

use crate::client::{ScrapeOutput, ScraperApiClient};
use crate::error::ScraperApiError;
use crate::request::ScrapeRequest;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use zdk_core::{Error, Result as ZResult, ToolContext, ToolResponse};
use zdk_telemetry::{ToolOutcome, ToolSpanAttributes, safe_serialize, trace_tool_call};

/// Deserialize tool arguments into a typed request.
///
/// A missing required field or a wrongly typed value is reported as a
/// validation error, like any other invalid parameter.
pub(crate) fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T, ScraperApiError> {
    serde_json::from_value(params)
        .map_err(|e| ScraperApiError::validation("parameters", e.to_string()))
}

/// Shared body of every ScraperAPI tool: parse, call, trace, wrap.
pub(crate) async fn run_tool(
    name: &str,
    description: &str,
    client: &ScraperApiClient,
    ctx: Arc<dyn ToolContext>,
    params: Value,
    parse: fn(Value) -> Result<ScrapeRequest, ScraperApiError>,
) -> ZResult<ToolResponse> {
    tracing::debug!(
        invocation_id = %ctx.invocation_id(),
        tool_call_id = %ctx.function_call_id(),
        tool = %name,
        "Executing ScraperAPI tool"
    );

    let args_json = safe_serialize(&params);
    let outcome = match parse(params) {
        Ok(request) => client.execute(request).await,
        Err(e) => Err(e),
    };

    let (tool_outcome, response_bytes) = match &outcome {
        Ok(ScrapeOutput::Text(text)) => (ToolOutcome::Success, text.len() as u64),
        Ok(ScrapeOutput::Json(value)) => (ToolOutcome::Success, value.to_string().len() as u64),
        Err(_) => (ToolOutcome::Failure, 0),
    };

    trace_tool_call(ToolSpanAttributes {
        tool_name: name.to_string(),
        tool_description: description.to_string(),
        tool_call_id: ctx.function_call_id().to_string(),
        invocation_id: ctx.invocation_id().to_string(),
        args_json,
        outcome: tool_outcome,
        response_bytes,
    });

    match outcome {
        Ok(output) => Ok(ToolResponse {
            result: output.into_value(),
        }),
        Err(e) => {
            tracing::warn!(tool = %name, error = %e, "ScraperAPI tool failed");
            Err(Error::tool_failed(name, e))
        }
    }
}
