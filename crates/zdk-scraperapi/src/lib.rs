//! ScraperAPI Tools for ZDK
//!
//! This crate exposes [ScraperAPI](https://www.scraperapi.com) as ZDK tools so
//! an agent can fetch web pages and run structured searches.
//!
//! ## 🔑 API Keys Required
//!
//! One ScraperAPI key, read from `SCRAPERAPI_API_KEY` or from config.toml:
//!
//! ```toml
//! [scraperapi]
//! api_key = "${SCRAPERAPI_API_KEY}"
//! ```
//!
//! The key is sent with every request and never appears in logs or tool results.
//!
//! ## Tools
//!
//! - **ScraperApiTool** (`scraperapi`) - fetch a page as HTML, text or markdown
//! - **ScraperApiGoogleSearchTool** (`scraperapi_google_search`) - structured Google results
//! - **ScraperApiAmazonSearchTool** (`scraperapi_amazon_search`) - structured Amazon results
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zdk_scraperapi::{ScraperApiClient, ScraperApiToolkit};
//! use zdk_core::Toolset;
//! use std::sync::Arc;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = Arc::new(ScraperApiClient::from_env()?);
//! let toolkit = ScraperApiToolkit::new(client);
//!
//! // Hand these to your agent
//! let tools = toolkit.get_tools().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod request;
pub mod toolkit;
pub mod tools;

pub use client::{ApiKey, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ScrapeOutput, ScraperApiClient};
pub use error::{Result, ScraperApiError};
pub use request::{
    DeviceType, MarketplaceQueryRequest, PageFetchRequest, PageOutputFormat, QueryParams,
    ResponseDecoding, ScrapeRequest, SearchQueryRequest, StructuredOutputFormat,
};
pub use toolkit::{ScraperApiToolkit, ScraperApiToolkitBuilder};
pub use tools::{ScraperApiAmazonSearchTool, ScraperApiGoogleSearchTool, ScraperApiTool};
