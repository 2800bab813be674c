//! Tool system for ZDK
//!
//! This crate provides the pieces shared by concrete tool crates:
//! - Default tool context for direct invocation and tests
//! - JSON schema generation for tool parameters

pub mod context;
pub mod schema;

// Re-exports
pub use context::DefaultToolContext;
pub use schema::generate_schema;

// Re-export core types
pub use zdk_core::{Result, Tool, ToolContext, ToolResponse, Toolset};
