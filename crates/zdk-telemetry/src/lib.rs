//! # ZDK Telemetry
//!
//! Structured logging and OpenTelemetry tracing for ZDK tools.
//!
//! `init_telemetry` installs a `tracing` subscriber that prints structured log
//! lines and forwards spans to an OpenTelemetry tracer provider. Tool crates
//! call [`trace_tool_call`] once per invocation so every tool execution shows up
//! as an `execute_tool` span carrying gen-ai semantic attributes.

mod spans;
mod tracer;

pub use spans::{ToolOutcome, ToolSpanAttributes, safe_serialize, trace_tool_call};
pub use tracer::{TelemetryOptions, init_telemetry, init_telemetry_with, tracer_provider};

/// OpenTelemetry span attribute constants for tool observability.
///
/// Generic attributes follow the OpenTelemetry semantic conventions for
/// generative AI; the `zdk.*` attributes are specific to this workspace.
pub mod attributes {
    // Generic AI attributes
    pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";
    pub const GEN_AI_SYSTEM: &str = "gen_ai.system";

    // Tool-specific attributes
    pub const GEN_AI_TOOL_NAME: &str = "gen_ai.tool.name";
    pub const GEN_AI_TOOL_DESCRIPTION: &str = "gen_ai.tool.description";
    pub const GEN_AI_TOOL_CALL_ID: &str = "gen_ai.tool.call.id";

    // ZDK attributes
    pub const ZDK_INVOCATION_ID: &str = "zdk.invocation_id";
    pub const ZDK_TOOL_CALL_ARGS: &str = "zdk.tool_call_args";
    pub const ZDK_TOOL_OUTCOME: &str = "zdk.tool.outcome";
    pub const ZDK_TOOL_RESPONSE_BYTES: &str = "zdk.tool.response_bytes";

    // System name constant
    pub const SYSTEM_NAME: &str = "zdk";
}
