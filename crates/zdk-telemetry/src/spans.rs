//! Span creation helpers for tool executions

use crate::attributes::*;

/// How a tool invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    Success,
    Failure,
}

impl ToolOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolOutcome::Success => "success",
            ToolOutcome::Failure => "failure",
        }
    }
}

/// Attributes for tracing a tool call
///
/// Only the caller-supplied arguments are recorded; response bodies are
/// summarised by size since scraped pages can be arbitrarily large.
#[derive(Debug, Clone)]
pub struct ToolSpanAttributes {
    pub tool_name: String,
    pub tool_description: String,
    pub tool_call_id: String,
    pub invocation_id: String,
    pub args_json: String,
    pub outcome: ToolOutcome,
    pub response_bytes: u64,
}

/// Create and record an OpenTelemetry span for a tool execution.
///
/// Records tool invocation details including tool name, description, call ID,
/// arguments and outcome. This enables distributed tracing of tool calls
/// throughout the agent execution flow.
pub fn trace_tool_call(attrs: ToolSpanAttributes) {
    let span = tracing::info_span!(
        "execute_tool",
        { GEN_AI_OPERATION_NAME } = "execute_tool",
        { GEN_AI_SYSTEM } = SYSTEM_NAME,
        { GEN_AI_TOOL_NAME } = %attrs.tool_name,
        { GEN_AI_TOOL_DESCRIPTION } = %attrs.tool_description,
        { GEN_AI_TOOL_CALL_ID } = %attrs.tool_call_id,
        { ZDK_INVOCATION_ID } = %attrs.invocation_id,
        { ZDK_TOOL_CALL_ARGS } = %attrs.args_json,
        { ZDK_TOOL_OUTCOME } = attrs.outcome.as_str(),
        { ZDK_TOOL_RESPONSE_BYTES } = attrs.response_bytes,
    );

    // Enter and immediately exit the span (it's recorded)
    let _guard = span.enter();
}

/// Helper to safely serialize to JSON string
pub fn safe_serialize<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "<not serializable>".to_string())
}
