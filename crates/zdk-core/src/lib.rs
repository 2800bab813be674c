//! Core traits and types for ZDK
//!
//! This crate provides the foundational abstractions shared by ZDK tool crates:
//! the `Tool` and `Toolset` traits, the tool execution context, the common error
//! type and configuration loading.

pub mod config;
pub mod context;
pub mod error;
pub mod traits;

// Re-exports
pub use config::{ObservabilityConfig, SCRAPERAPI_API_KEY_ENV, ScraperApiConfig, ZConfig};
pub use context::ToolContext;
pub use error::{Error, Result};
pub use traits::{Tool, ToolResponse, Toolset};
